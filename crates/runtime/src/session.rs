//! Game session: one player, the loaded content and the session RNG.
//!
//! Every menu activity is a method here. Each one delegates the rules to
//! `game-core`, logs the state transition, and returns the structured
//! outcome for the client to render.

use std::path::PathBuf;

use game_content::{ContentBundle, ContentFactory};
use game_core::{
    ClassOutcome, Duel, DuelInput, DuelOutcome, ExploreOutcome, GameConfig, House, NpcRoster,
    Player, PlayerRecord, PracticeReport, SpellCatalog, run_duel,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::{Result, RuntimeError};
use crate::repository::PlayerRepository;

/// A running game.
#[derive(Debug)]
pub struct Session {
    player: Player,
    content: ContentBundle,
    rng: StdRng,
}

impl Session {
    /// Create a new session builder.
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Starts a new game with the configured inventory and starting spell.
    pub fn new_game(
        name: impl Into<String>,
        house: House,
        content: ContentBundle,
        rng: StdRng,
    ) -> Result<Self> {
        let config = &content.config;
        let starting_spell = content
            .catalog
            .require(&config.starting_spell)
            .map_err(RuntimeError::StartingSpell)?
            .clone();

        let mut player =
            Player::new(name, house).with_inventory(config.starting_inventory.iter().cloned());
        player.learn_spell(starting_spell);

        tracing::info!("New game: {} sorted into {}", player.name(), house);

        Ok(Self {
            player,
            content,
            rng,
        })
    }

    /// Resumes a game from a persisted record.
    ///
    /// Spells the catalog no longer knows are dropped with a warning.
    pub fn resume(record: PlayerRecord, content: ContentBundle, rng: StdRng) -> Result<Self> {
        let restored = record.into_player(&content.catalog)?;
        for name in &restored.skipped_spells {
            tracing::warn!("Skipping unknown spell '{}' in saved player", name);
        }

        tracing::info!("Resumed game for {}", restored.player.name());

        Ok(Self {
            player: restored.player,
            content,
            rng,
        })
    }

    /// Loads a slot from a repository and resumes it.
    pub fn load(
        repo: &dyn PlayerRepository,
        slot: &str,
        content: ContentBundle,
        rng: StdRng,
    ) -> Result<Self> {
        let save = repo.load(slot)?.ok_or_else(|| RuntimeError::SaveNotFound {
            slot: slot.to_string(),
        })?;
        tracing::debug!("Save '{}' written at {}", slot, save.saved_at);
        Self::resume(save.player, content, rng)
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn content(&self) -> &ContentBundle {
        &self.content
    }

    pub fn config(&self) -> &GameConfig {
        &self.content.config
    }

    pub fn catalog(&self) -> &SpellCatalog {
        &self.content.catalog
    }

    /// Opponents available for a duel.
    pub fn opponents(&self) -> &NpcRoster {
        &self.content.roster
    }

    pub fn attend_class(&mut self) -> ClassOutcome {
        let outcome = game_core::attend_class(
            &mut self.player,
            &self.content.catalog,
            &self.content.config.progression,
            &mut self.rng,
        );

        match &outcome {
            ClassOutcome::Learned { spell, .. } => {
                tracing::info!("{} learned {}", self.player.name(), spell);
            }
            ClassOutcome::AllSpellsKnown => {
                tracing::debug!("{} already knows every spell", self.player.name());
            }
        }

        outcome
    }

    pub fn explore(&mut self) -> Result<ExploreOutcome> {
        let outcome = game_core::explore(
            &mut self.player,
            &self.content.events,
            &self.content.config.progression,
            &mut self.rng,
        )?;

        tracing::debug!(
            "Explore: '{}' ({:+} points, +{} mana)",
            outcome.event.description,
            outcome.event.points,
            outcome.mana_restored
        );

        Ok(outcome)
    }

    /// Casts the player's `index`-th known spell outside of combat.
    pub fn practice_cast(&mut self, index: usize) -> Result<PracticeReport> {
        let report =
            game_core::practice_cast(&mut self.player, index, &self.content.config.duel)?;
        tracing::debug!("Practice cast {}: {:?}", report.spell, report.outcome);
        Ok(report)
    }

    /// Spawns a fresh copy of the `opponent_index`-th opponent and duels it
    /// to completion.
    pub fn duel<I>(&mut self, opponent_index: usize, input: &mut I) -> Result<DuelOutcome>
    where
        I: DuelInput + ?Sized,
    {
        let roster = &self.content.roster;
        let template = roster
            .get(opponent_index)
            .ok_or(RuntimeError::NoSuchOpponent {
                index: opponent_index,
                available: roster.len(),
            })?;
        let opponent = template.spawn(&self.content.catalog, &mut self.rng);

        tracing::info!(
            "Duel started: {} vs {} ({})",
            self.player.name(),
            opponent.name(),
            opponent.difficulty()
        );

        let duel = Duel::new(&mut self.player, opponent, self.content.config.duel)?;
        let outcome = run_duel(duel, input, &mut self.rng)?;

        tracing::info!(
            "Duel finished against {} after {} rounds: {:?} ({:+} points)",
            outcome.opponent,
            outcome.rounds,
            outcome.status,
            outcome.house_points
        );

        Ok(outcome)
    }

    /// Snapshot of the player for persistence.
    pub fn record(&self) -> PlayerRecord {
        PlayerRecord::from_player(&self.player)
    }

    pub fn save(&self, repo: &dyn PlayerRepository, slot: &str) -> Result<()> {
        repo.save(slot, &self.record())?;
        tracing::info!("Saved {} to slot '{}'", self.player.name(), slot);
        Ok(())
    }
}

/// Builder for [`Session`].
///
/// Content defaults to the built-in bundle and the RNG to OS entropy.
#[derive(Debug, Default)]
pub struct SessionBuilder {
    content: Option<ContentBundle>,
    content_dir: Option<PathBuf>,
    seed: Option<u64>,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use already loaded content.
    #[must_use]
    pub fn content(mut self, content: ContentBundle) -> Self {
        self.content = Some(content);
        self
    }

    /// Load content from a data directory when building.
    #[must_use]
    pub fn content_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.content_dir = Some(dir.into());
        self
    }

    /// Seed the session RNG for reproducible runs.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Resolves the content and RNG without creating a player.
    pub fn prepare(self) -> Result<(ContentBundle, StdRng)> {
        let content = match (self.content, self.content_dir) {
            (Some(content), _) => content,
            (None, Some(dir)) => {
                let bundle = ContentFactory::new(&dir)
                    .load_bundle()
                    .map_err(|e| RuntimeError::Content(format!("{e:#}")))?;
                tracing::info!("Loaded content from {}", dir.display());
                bundle
            }
            (None, None) => ContentBundle::standard(),
        };

        let rng = match self.seed {
            Some(seed) => {
                tracing::debug!("Using RNG seed {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };

        Ok((content, rng))
    }

    pub fn new_game(self, name: impl Into<String>, house: House) -> Result<Session> {
        let (content, rng) = self.prepare()?;
        Session::new_game(name, house, content, rng)
    }

    pub fn resume(self, record: PlayerRecord) -> Result<Session> {
        let (content, rng) = self.prepare()?;
        Session::resume(record, content, rng)
    }

    pub fn load(self, repo: &dyn PlayerRepository, slot: &str) -> Result<Session> {
        let (content, rng) = self.prepare()?;
        Session::load(repo, slot, content, rng)
    }
}
