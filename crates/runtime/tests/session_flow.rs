//! End-to-end session tests: classes, exploration, duels, save and load.

use game_core::{
    ClassOutcome, DuelInput, DuelStatus, House, Npc, Player, TurnChoice, TurnReport,
};
use runtime::{
    FilePlayerRepository, InMemoryPlayerRepo, PlayerRepository, RuntimeError, Session,
};
use tempfile::TempDir;

/// Casts the strongest affordable damaging spell, else forfeits.
struct StrongestSpell {
    rounds: usize,
}

impl DuelInput for StrongestSpell {
    fn choose(&mut self, player: &Player, _opponent: &Npc) -> TurnChoice {
        let c = player.combatant();
        c.known_spells()
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_damaging() && s.is_castable_with(c.mana()))
            .max_by_key(|(_, s)| s.damage)
            .map(|(i, _)| TurnChoice::Cast(i))
            .unwrap_or(TurnChoice::Forfeit)
    }

    fn observe(&mut self, _report: &TurnReport) {
        self.rounds += 1;
    }
}

fn trained_session(seed: u64) -> Session {
    let mut session = Session::builder()
        .seed(seed)
        .new_game("Harry", House::Gryffindor)
        .unwrap();
    while let ClassOutcome::Learned { .. } = session.attend_class() {}
    session
}

#[test]
fn classes_teach_the_whole_catalog() {
    let session = trained_session(1);
    let player = session.player();

    assert_eq!(
        player.combatant().known_spells().len(),
        session.catalog().len()
    );
    assert_eq!(player.knowledge(), 50);
    assert_eq!(player.house_points(), 25);
}

#[test]
fn duel_applies_exactly_one_result() {
    for seed in 0..20 {
        let mut session = trained_session(seed);
        let points_before = session.player().house_points();
        let mut input = StrongestSpell { rounds: 0 };

        let opponent = seed as usize % session.opponents().len();
        let outcome = session.duel(opponent, &mut input).unwrap();

        assert!(outcome.status.is_terminal());
        // A forfeit is reported without counting as a round.
        assert!(input.rounds >= outcome.rounds as usize);
        let delta = session.player().house_points() - points_before;
        match outcome.status {
            DuelStatus::PlayerWon => assert_eq!(delta, 20),
            DuelStatus::PlayerLost => assert_eq!(delta, -10),
            DuelStatus::Ongoing => unreachable!(),
        }
        assert!(session.player().combatant().status_effects().is_empty());
    }
}

#[test]
fn opponents_are_fresh_for_every_duel() {
    let mut session = trained_session(7);
    let mut input = StrongestSpell { rounds: 0 };

    let first = session.duel(0, &mut input).unwrap();
    assert_eq!(first.opponent, "Training Dummy");
    assert_eq!(first.rounds, 4);

    // Four Stupefy casts take a fresh dummy from 80 to 0. A leaked, already
    // defeated dummy would fall in the first round.
    while session.player().combatant().mana() < 100 {
        session.explore().unwrap();
    }
    let second = session.duel(0, &mut input).unwrap();
    assert!(second.player_won());
    assert_eq!(second.rounds, 4);
}

#[test]
fn unknown_opponent_is_rejected() {
    let mut session = trained_session(2);
    let mut input = StrongestSpell { rounds: 0 };

    let err = session.duel(17, &mut input).unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::NoSuchOpponent {
            index: 17,
            available: 3
        }
    ));
}

#[test]
fn explore_stays_within_configured_range() {
    let mut session = trained_session(3);
    for _ in 0..20 {
        let outcome = session.explore().unwrap();
        assert!((5..=15).contains(&outcome.mana_rolled));
    }
}

#[test]
fn save_and_load_through_files() {
    let dir = TempDir::new().unwrap();
    let repo = FilePlayerRepository::new(dir.path()).unwrap();

    let mut session = trained_session(4);
    session.explore().unwrap();
    session.practice_cast(0).unwrap();
    session.save(&repo, "hogwarts").unwrap();

    let loaded = Session::builder().seed(5).load(&repo, "hogwarts").unwrap();
    assert_eq!(loaded.player(), session.player());
    assert_eq!(repo.list().unwrap(), ["hogwarts"]);
}

#[test]
fn loading_an_empty_slot_fails() {
    let repo = InMemoryPlayerRepo::new();
    let err = Session::builder().load(&repo, "empty").unwrap_err();
    assert!(matches!(err, RuntimeError::SaveNotFound { .. }));
}

#[test]
fn corrupted_house_is_fatal_on_load() {
    let repo = InMemoryPlayerRepo::new();
    let mut record = trained_session(6).record();
    record.house = "Durmstrang".to_string();
    repo.save("bad", &record).unwrap();

    let err = Session::builder().load(&repo, "bad").unwrap_err();
    assert!(matches!(err, RuntimeError::Record(_)));
    assert_eq!(err.severity(), game_core::ErrorSeverity::Fatal);
}
