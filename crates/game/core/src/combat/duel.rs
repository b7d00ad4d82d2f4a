//! Duel orchestration between the player and one opponent.
//!
//! # State machine
//!
//! ```text
//! Ongoing ──(opponent down)──────────────▶ PlayerWon   (+victory points)
//!    │
//!    ├──(player down | stalemate | forfeit)▶ PlayerLost (+defeat points)
//!    │
//!    └──(both standing)──▶ Ongoing
//! ```
//!
//! One call to [`Duel::player_turn`] plays a full round: the player's cast,
//! then (if the opponent still stands) the opponent's reply. Entering a
//! terminal state clears the player's status effects and applies the fixed
//! post-duel recovery, exactly once.

use rand::Rng;

use super::behavior::choose_spell;
use super::cast::{CastOutcome, cast};
use super::event::{DuelEvent, DuelOutcome, DuelStatus, Side, TurnReport};
use crate::config::DuelRules;
use crate::error::{ErrorSeverity, GameError};
use crate::spell::{EffectTag, Spell};
use crate::state::{Combatant, Npc, Player, StatusEffectKind};

/// Errors raised by the duel orchestrator.
///
/// These signal misuse by the input provider; gameplay failures such as
/// "Not enough mana!" are reported as [`DuelEvent::CastFailed`] instead.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DuelError {
    #[error("the player knows no spells and cannot duel")]
    NoKnownSpells,

    #[error("the player has no health left and cannot duel")]
    PlayerDown,

    #[error("spell index {index} is out of range (player knows {known} spells)")]
    SpellIndexOutOfRange { index: usize, known: usize },

    #[error("the duel is already over")]
    Finished,

    #[error("the duel has not finished yet")]
    Unfinished,
}

impl GameError for DuelError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoKnownSpells | Self::PlayerDown | Self::SpellIndexOutOfRange { .. } => {
                ErrorSeverity::Validation
            }
            Self::Finished | Self::Unfinished => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoKnownSpells => "DUEL_NO_KNOWN_SPELLS",
            Self::PlayerDown => "DUEL_PLAYER_DOWN",
            Self::SpellIndexOutOfRange { .. } => "DUEL_SPELL_INDEX_OUT_OF_RANGE",
            Self::Finished => "DUEL_FINISHED",
            Self::Unfinished => "DUEL_UNFINISHED",
        }
    }
}

/// A duel in progress.
///
/// The player is borrowed for the duel's lifetime; the opponent is owned,
/// so nothing about it survives the duel.
#[derive(Debug)]
pub struct Duel<'p> {
    player: &'p mut Player,
    opponent: Npc,
    rules: DuelRules,
    status: DuelStatus,
    round: u32,
    house_points: i32,
}

impl<'p> Duel<'p> {
    pub fn new(player: &'p mut Player, opponent: Npc, rules: DuelRules) -> Result<Self, DuelError> {
        if player.combatant().known_spells().is_empty() {
            return Err(DuelError::NoKnownSpells);
        }
        if !player.combatant().is_alive() {
            return Err(DuelError::PlayerDown);
        }

        Ok(Self {
            player,
            opponent,
            rules,
            status: DuelStatus::Ongoing,
            round: 0,
            house_points: 0,
        })
    }

    pub fn status(&self) -> DuelStatus {
        self.status
    }

    /// Number of rounds played so far.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn player(&self) -> &Player {
        self.player
    }

    pub fn opponent(&self) -> &Npc {
        &self.opponent
    }

    /// Plays one round with the player's `spell_index`-th known spell.
    ///
    /// # Errors
    ///
    /// - [`DuelError::Finished`] if the duel is already over
    /// - [`DuelError::SpellIndexOutOfRange`] for an invalid index (nothing happens)
    pub fn player_turn<R: Rng + ?Sized>(
        &mut self,
        spell_index: usize,
        rng: &mut R,
    ) -> Result<TurnReport, DuelError> {
        if self.status.is_terminal() {
            return Err(DuelError::Finished);
        }

        let known = self.player.combatant().known_spells();
        let spell = known
            .get(spell_index)
            .cloned()
            .ok_or(DuelError::SpellIndexOutOfRange {
                index: spell_index,
                known: known.len(),
            })?;

        self.round += 1;
        let mut events = Vec::new();

        resolve_cast(
            &spell,
            Side::Player,
            self.player.combatant_mut(),
            self.opponent.combatant_mut(),
            &self.rules,
            &mut events,
        );

        if !self.opponent.combatant().is_alive() {
            self.conclude(DuelStatus::PlayerWon, &mut events);
        } else {
            self.opponent_turn(rng, &mut events);

            if !self.player.combatant().is_alive() {
                self.conclude(DuelStatus::PlayerLost, &mut events);
            } else if self.is_stalemate() {
                events.push(DuelEvent::Stalemate);
                self.conclude(DuelStatus::PlayerLost, &mut events);
            }
        }

        Ok(self.report(events))
    }

    /// The player yields; the duel ends as a loss.
    pub fn forfeit(&mut self) -> Result<TurnReport, DuelError> {
        if self.status.is_terminal() {
            return Err(DuelError::Finished);
        }

        let mut events = vec![DuelEvent::Forfeit];
        self.conclude(DuelStatus::PlayerLost, &mut events);
        Ok(self.report(events))
    }

    /// True when neither side will ever deal damage again.
    ///
    /// Mana does not regenerate mid-duel and stun only clears when the duel
    /// ends, so once both sides are stunned or out of affordable damaging
    /// spells no further round can change the result.
    pub fn is_stalemate(&self) -> bool {
        !can_threaten(self.player.combatant()) && !can_threaten(self.opponent.combatant())
    }

    /// Summary of the duel once it has reached a terminal state.
    pub fn outcome(&self) -> Option<DuelOutcome> {
        self.status.is_terminal().then(|| DuelOutcome {
            opponent: self.opponent.name().to_string(),
            status: self.status,
            rounds: self.round,
            house_points: self.house_points,
        })
    }

    fn opponent_turn<R: Rng + ?Sized>(&mut self, rng: &mut R, events: &mut Vec<DuelEvent>) {
        match choose_spell(self.opponent.combatant(), rng).cloned() {
            Some(spell) => resolve_cast(
                &spell,
                Side::Opponent,
                self.opponent.combatant_mut(),
                self.player.combatant_mut(),
                &self.rules,
                events,
            ),
            None => events.push(DuelEvent::OpponentSkipped),
        }
    }

    fn conclude(&mut self, status: DuelStatus, events: &mut Vec<DuelEvent>) {
        let points = match status {
            DuelStatus::PlayerWon => {
                events.push(DuelEvent::Victory {
                    house_points: self.rules.victory_points,
                });
                self.rules.victory_points
            }
            DuelStatus::PlayerLost => {
                events.push(DuelEvent::Defeat {
                    house_points: self.rules.defeat_points,
                });
                self.rules.defeat_points
            }
            DuelStatus::Ongoing => return,
        };

        self.player.award_house_points(points);
        self.house_points = points;
        self.status = status;

        let player = self.player.combatant_mut();
        player.clear_effects();
        let (health, mana) = (player.health(), player.mana());
        player.heal(self.rules.recovery_health);
        player.restore_mana(self.rules.recovery_mana);
        events.push(DuelEvent::Recovered {
            health: player.health() - health,
            mana: player.mana() - mana,
        });
    }

    fn report(&self, events: Vec<DuelEvent>) -> TurnReport {
        TurnReport {
            round: self.round,
            events,
            status: self.status,
        }
    }
}

/// Casts and applies the result to the opposing side.
fn resolve_cast(
    spell: &Spell,
    side: Side,
    caster: &mut Combatant,
    target: &mut Combatant,
    rules: &DuelRules,
    events: &mut Vec<DuelEvent>,
) {
    let (damage, effect) = match cast(spell, caster, Some(&mut *target)) {
        CastOutcome::Failed(reason) => {
            events.push(DuelEvent::CastFailed {
                caster: side,
                spell: spell.name.clone(),
                reason,
            });
            return;
        }
        CastOutcome::Resolved { damage, effect } => (damage, effect),
    };

    events.push(DuelEvent::SpellCast {
        caster: side,
        spell: spell.name.clone(),
    });

    if damage > 0 {
        let dealt = target.take_damage(damage);
        events.push(DuelEvent::DamageDealt {
            target: side.other(),
            raw: damage,
            dealt,
        });
    }

    if effect == EffectTag::Heal {
        let before = caster.health();
        caster.heal(rules.heal_spell_amount);
        events.push(DuelEvent::Healed {
            target: side,
            amount: caster.health() - before,
        });
    }

    if effect != EffectTag::None {
        events.push(DuelEvent::EffectApplied {
            caster: side,
            effect,
        });
    }
}

fn can_threaten(combatant: &Combatant) -> bool {
    !combatant.has_effect(StatusEffectKind::Stunned) && combatant.can_deal_damage()
}

/// What the player does on their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnChoice {
    /// Cast the known spell at this index.
    Cast(usize),
    Forfeit,
}

/// Input provider and display sink for [`run_duel`].
///
/// Implementations are expected to return valid indices; an invalid one
/// forfeits the duel and [`run_duel`] returns
/// [`DuelError::SpellIndexOutOfRange`].
pub trait DuelInput {
    /// Chooses the player's action for the next round.
    fn choose(&mut self, player: &Player, opponent: &Npc) -> TurnChoice;

    /// Receives each round's report.
    fn observe(&mut self, _report: &TurnReport) {}
}

/// Drives a duel to completion.
///
/// A failed step still ends the duel as a forfeit before the error is
/// returned, so the player never keeps duel-scoped effects.
pub fn run_duel<I, R>(mut duel: Duel<'_>, input: &mut I, rng: &mut R) -> Result<DuelOutcome, DuelError>
where
    I: DuelInput + ?Sized,
    R: Rng + ?Sized,
{
    while !duel.status().is_terminal() {
        let step = match input.choose(duel.player(), duel.opponent()) {
            TurnChoice::Cast(index) => duel.player_turn(index, rng),
            TurnChoice::Forfeit => duel.forfeit(),
        };
        match step {
            Ok(report) => input.observe(&report),
            Err(err) => {
                if let Ok(report) = duel.forfeit() {
                    input.observe(&report);
                }
                return Err(err);
            }
        }
    }

    duel.outcome().ok_or(DuelError::Unfinished)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::combat::CastFailure;
    use crate::spell::SpellCatalog;
    use crate::state::{Difficulty, House, NpcTemplate};

    fn spell(name: &str) -> Spell {
        SpellCatalog::standard().get(name).unwrap().clone()
    }

    fn player_with(house: House, spells: &[&str]) -> Player {
        let mut player = Player::new("Test Wizard", house);
        for name in spells {
            player.learn_spell(spell(name));
        }
        player
    }

    fn scripted_npc(name: &str, max_health: u32, max_mana: u32, spells: &[&str]) -> Npc {
        let mut combatant = Combatant::new(name, max_health, max_mana);
        for s in spells {
            combatant.learn_spell(spell(s));
        }
        Npc::from_combatant(combatant, Difficulty::Normal)
    }

    /// Always casts the first affordable damaging spell, else the first spell.
    struct Aggressive {
        reports: Vec<TurnReport>,
    }

    impl DuelInput for Aggressive {
        fn choose(&mut self, player: &Player, _opponent: &Npc) -> TurnChoice {
            let c = player.combatant();
            let index = c
                .known_spells()
                .iter()
                .position(|s| s.is_damaging() && s.is_castable_with(c.mana()))
                .unwrap_or(0);
            TurnChoice::Cast(index)
        }

        fn observe(&mut self, report: &TurnReport) {
            self.reports.push(report.clone());
        }
    }

    #[test]
    fn stupefy_against_fresh_training_dummy() {
        let mut player = player_with(House::Gryffindor, &["stupefy"]);
        let mut rng = StdRng::seed_from_u64(5);
        let dummy = NpcTemplate::new("Training Dummy", Difficulty::Easy)
            .spawn(&SpellCatalog::standard(), &mut rng);
        let mut duel = Duel::new(&mut player, dummy, DuelRules::default()).unwrap();

        let report = duel.player_turn(0, &mut rng).unwrap();
        assert_eq!(
            &report.events[..3],
            &[
                DuelEvent::SpellCast {
                    caster: Side::Player,
                    spell: "Stupefy".to_string()
                },
                DuelEvent::DamageDealt {
                    target: Side::Opponent,
                    raw: 20,
                    dealt: 20
                },
                DuelEvent::EffectApplied {
                    caster: Side::Player,
                    effect: EffectTag::Stun
                },
            ]
        );
        assert_eq!(duel.opponent().combatant().health(), 60);
        assert!(
            duel.opponent()
                .combatant()
                .has_effect(StatusEffectKind::Stunned)
        );

        // A stunned opponent attempts its cast and fails without spending mana.
        match &report.events[3] {
            DuelEvent::CastFailed { caster, reason, .. } => {
                assert_eq!(*caster, Side::Opponent);
                assert_eq!(*reason, CastFailure::Stunned);
            }
            other => panic!("expected a failed opponent cast, got {other:?}"),
        }
        assert_eq!(duel.opponent().combatant().mana(), 80);
    }

    #[test]
    fn victory_awards_points_and_recovers() {
        let mut player = player_with(House::Gryffindor, &["stupefy"]);
        let dummy = scripted_npc("Training Dummy", 80, 80, &[]);
        let mut rng = StdRng::seed_from_u64(1);

        let mut duel = Duel::new(&mut player, dummy, DuelRules::default()).unwrap();
        for _ in 0..3 {
            let report = duel.player_turn(0, &mut rng).unwrap();
            assert_eq!(report.status, DuelStatus::Ongoing);
            assert!(report.events.contains(&DuelEvent::OpponentSkipped));
        }

        let report = duel.player_turn(0, &mut rng).unwrap();
        assert_eq!(report.status, DuelStatus::PlayerWon);
        assert!(!report.events.contains(&DuelEvent::OpponentSkipped));
        assert_eq!(
            &report.events[report.events.len() - 2..],
            &[
                DuelEvent::Victory { house_points: 20 },
                DuelEvent::Recovered {
                    health: 0,
                    mana: 30
                },
            ]
        );

        let outcome = duel.outcome().unwrap();
        assert!(outcome.player_won());
        assert_eq!(outcome.rounds, 4);
        assert_eq!(outcome.opponent, "Training Dummy");

        assert_eq!(player.house_points(), 20);
        assert_eq!(player.combatant().mana(), 30);
    }

    #[test]
    fn defeat_deducts_points_clears_effects_and_recovers() {
        let mut player = player_with(House::Ravenclaw, &["lumos"]);
        let wizard = scripted_npc("Dark Wizard", 120, 500, &["flipendo"]);
        let mut rng = StdRng::seed_from_u64(2);
        let mut input = Aggressive {
            reports: Vec::new(),
        };

        let duel = Duel::new(&mut player, wizard, DuelRules::default()).unwrap();
        let outcome = run_duel(duel, &mut input, &mut rng).unwrap();

        assert_eq!(outcome.status, DuelStatus::PlayerLost);
        assert_eq!(outcome.house_points, -10);
        assert_eq!(outcome.rounds, 8);
        assert_eq!(input.reports.len(), 8);

        assert_eq!(player.house_points(), -10);
        assert_eq!(player.combatant().health(), 30);
        assert_eq!(player.combatant().mana(), 130 - 8 * 5 + 30);
        assert!(player.combatant().status_effects().is_empty());
    }

    #[test]
    fn opponent_shield_halves_next_player_hit() {
        let mut player = player_with(House::Gryffindor, &["flipendo"]);
        let guard = scripted_npc("Student Duelist", 100, 15, &["protego"]);
        let mut rng = StdRng::seed_from_u64(3);

        let mut duel = Duel::new(&mut player, guard, DuelRules::default()).unwrap();
        duel.player_turn(0, &mut rng).unwrap();
        assert!(
            duel.opponent()
                .combatant()
                .has_effect(StatusEffectKind::Shield)
        );

        let report = duel.player_turn(0, &mut rng).unwrap();
        assert!(report.events.contains(&DuelEvent::DamageDealt {
            target: Side::Opponent,
            raw: 12,
            dealt: 6
        }));
        assert_eq!(duel.opponent().combatant().health(), 100 - 12 - 6);
        assert!(
            !duel
                .opponent()
                .combatant()
                .has_effect(StatusEffectKind::Shield)
        );
    }

    #[test]
    fn insufficient_mana_is_reported_and_turn_continues() {
        let mut player = player_with(House::Gryffindor, &["episkey", "flipendo"]);
        player.combatant_mut().spend_mana(80);
        let dummy = scripted_npc("Training Dummy", 80, 80, &[]);
        let mut rng = StdRng::seed_from_u64(4);

        let mut duel = Duel::new(&mut player, dummy, DuelRules::default()).unwrap();
        let report = duel.player_turn(0, &mut rng).unwrap();

        assert_eq!(
            report.events,
            [
                DuelEvent::CastFailed {
                    caster: Side::Player,
                    spell: "Episkey".to_string(),
                    reason: CastFailure::NotEnoughMana
                },
                DuelEvent::OpponentSkipped,
            ]
        );
        assert_eq!(duel.player().combatant().mana(), 20);
        assert_eq!(report.status, DuelStatus::Ongoing);
    }

    #[test]
    fn heal_spell_restores_caster() {
        let mut player = player_with(House::Gryffindor, &["episkey"]);
        player.combatant_mut().take_damage(40);
        let dummy = scripted_npc("Training Dummy", 80, 80, &["flipendo"]);
        let mut rng = StdRng::seed_from_u64(6);

        let mut duel = Duel::new(&mut player, dummy, DuelRules::default()).unwrap();
        let report = duel.player_turn(0, &mut rng).unwrap();

        assert!(report.events.contains(&DuelEvent::Healed {
            target: Side::Player,
            amount: 25
        }));
        assert!(report.events.contains(&DuelEvent::EffectApplied {
            caster: Side::Player,
            effect: EffectTag::Heal
        }));
        // 120 - 40 + 25, then the opponent's Flipendo.
        assert_eq!(duel.player().combatant().health(), 105 - 12);
    }

    #[test]
    fn harmless_duel_ends_in_stalemate_loss() {
        let mut player = player_with(House::Hufflepuff, &["lumos"]);
        let mirror = scripted_npc("Student Duelist", 100, 100, &["lumos"]);
        let mut rng = StdRng::seed_from_u64(7);

        let mut duel = Duel::new(&mut player, mirror, DuelRules::default()).unwrap();
        let report = duel.player_turn(0, &mut rng).unwrap();

        assert_eq!(report.status, DuelStatus::PlayerLost);
        assert!(report.events.contains(&DuelEvent::Stalemate));
        assert!(
            report
                .events
                .contains(&DuelEvent::Defeat { house_points: -10 })
        );
        assert_eq!(player.house_points(), -10);
    }

    #[test]
    fn stunned_player_against_spent_opponent_is_a_stalemate() {
        let mut player = player_with(House::Gryffindor, &["flipendo"]);
        let stunner = scripted_npc("Dark Wizard", 120, 25, &["stupefy"]);
        let mut rng = StdRng::seed_from_u64(8);

        let mut duel = Duel::new(&mut player, stunner, DuelRules::default()).unwrap();
        let report = duel.player_turn(0, &mut rng).unwrap();

        assert!(report.events.contains(&DuelEvent::Stalemate));
        assert_eq!(report.status, DuelStatus::PlayerLost);
        assert!(player.combatant().status_effects().is_empty());
    }

    #[test]
    fn forfeit_ends_the_duel_once() {
        let mut player = player_with(House::Slytherin, &["lumos"]);
        let dummy = scripted_npc("Training Dummy", 80, 80, &[]);
        let mut rng = StdRng::seed_from_u64(9);

        let mut duel = Duel::new(&mut player, dummy, DuelRules::default()).unwrap();
        let report = duel.forfeit().unwrap();
        assert_eq!(report.events[0], DuelEvent::Forfeit);
        assert_eq!(report.status, DuelStatus::PlayerLost);

        assert_eq!(duel.forfeit().unwrap_err(), DuelError::Finished);
        assert_eq!(duel.player_turn(0, &mut rng).unwrap_err(), DuelError::Finished);
        assert_eq!(player.house_points(), -10);
    }

    /// Plays the given choices in order, then forfeits.
    struct Scripted {
        choices: Vec<TurnChoice>,
        reports: Vec<TurnReport>,
    }

    impl DuelInput for Scripted {
        fn choose(&mut self, _player: &Player, _opponent: &Npc) -> TurnChoice {
            if self.choices.is_empty() {
                TurnChoice::Forfeit
            } else {
                self.choices.remove(0)
            }
        }

        fn observe(&mut self, report: &TurnReport) {
            self.reports.push(report.clone());
        }
    }

    #[test]
    fn invalid_choice_mid_duel_forfeits_and_clears_effects() {
        let mut player = player_with(House::Gryffindor, &["flipendo"]);
        let stunner = scripted_npc("Dark Wizard", 120, 100, &["stupefy"]);
        let mut rng = StdRng::seed_from_u64(12);
        let mut input = Scripted {
            choices: vec![TurnChoice::Cast(0), TurnChoice::Cast(99)],
            reports: Vec::new(),
        };

        let duel = Duel::new(&mut player, stunner, DuelRules::default()).unwrap();
        let err = run_duel(duel, &mut input, &mut rng).unwrap_err();

        assert_eq!(err, DuelError::SpellIndexOutOfRange { index: 99, known: 1 });
        assert_eq!(input.reports.len(), 2);
        assert_eq!(input.reports[0].status, DuelStatus::Ongoing);
        let last = &input.reports[1];
        assert_eq!(last.status, DuelStatus::PlayerLost);
        assert_eq!(last.events[0], DuelEvent::Forfeit);

        assert!(player.combatant().status_effects().is_empty());
        assert_eq!(player.house_points(), -10);
        assert_eq!(player.combatant().mana(), 100);

        // The next duel starts unstunned.
        let dummy = scripted_npc("Training Dummy", 80, 80, &[]);
        let mut duel = Duel::new(&mut player, dummy, DuelRules::default()).unwrap();
        let report = duel.player_turn(0, &mut rng).unwrap();
        assert_eq!(
            report.events[0],
            DuelEvent::SpellCast {
                caster: Side::Player,
                spell: "Flipendo".to_string()
            }
        );
    }

    #[test]
    fn invalid_index_changes_nothing() {
        let mut player = player_with(House::Gryffindor, &["lumos"]);
        let dummy = scripted_npc("Training Dummy", 80, 80, &[]);
        let mut rng = StdRng::seed_from_u64(10);

        let mut duel = Duel::new(&mut player, dummy, DuelRules::default()).unwrap();
        let err = duel.player_turn(3, &mut rng).unwrap_err();
        assert_eq!(err, DuelError::SpellIndexOutOfRange { index: 3, known: 1 });
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(duel.round(), 0);
        assert_eq!(duel.player().combatant().mana(), 100);
    }

    #[test]
    fn cannot_duel_without_spells_or_health() {
        let mut novice = Player::new("Novice", House::Gryffindor);
        let dummy = scripted_npc("Training Dummy", 80, 80, &[]);
        assert_eq!(
            Duel::new(&mut novice, dummy.clone(), DuelRules::default()).unwrap_err(),
            DuelError::NoKnownSpells
        );

        let mut fallen = player_with(House::Gryffindor, &["lumos"]);
        fallen.combatant_mut().take_damage(500);
        assert_eq!(
            Duel::new(&mut fallen, dummy, DuelRules::default()).unwrap_err(),
            DuelError::PlayerDown
        );
    }

    #[test]
    fn random_duels_always_terminate_with_one_result() {
        let catalog = SpellCatalog::standard();
        let roster = crate::state::NpcRoster::standard();

        for seed in 0..60 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut player = Player::new("Test Wizard", House::Gryffindor);
            for spell in catalog.iter() {
                player.learn_spell(spell.clone());
            }
            let template = roster.get(seed as usize % roster.len()).unwrap();
            let npc = template.spawn(&catalog, &mut rng);
            let mut input = Aggressive {
                reports: Vec::new(),
            };

            let duel = Duel::new(&mut player, npc, DuelRules::default()).unwrap();
            let outcome = run_duel(duel, &mut input, &mut rng).unwrap();

            assert!(outcome.status.is_terminal());
            let expected = if outcome.player_won() { 20 } else { -10 };
            assert_eq!(outcome.house_points, expected);
            assert_eq!(player.house_points(), expected);

            let terminal_reports = input
                .reports
                .iter()
                .filter(|r| r.status.is_terminal())
                .count();
            assert_eq!(terminal_reports, 1);
        }
    }
}
