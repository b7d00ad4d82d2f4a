//! Data-driven content definitions and loaders.
//!
//! This crate houses the default game content and provides loaders for RON/TOML data files:
//! - Spell catalog (data-driven via RON)
//! - NPC roster (data-driven via RON)
//! - Exploration events (data-driven via RON)
//! - Sorting hat quiz (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! All loaders use game-core types directly with serde for RON/TOML deserialization.

pub mod bundle;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use bundle::ContentBundle;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, EventLoader, LoadResult, NpcLoader, QuizLoader, SpellLoader,
};
