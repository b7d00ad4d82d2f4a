//! Runtime orchestration for a single-player game session.
//!
//! This crate wires together game content, the player's state, the session
//! RNG and save-file repositories into one [`Session`] API. Clients drive the
//! session from a menu loop and render the structured results it returns.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the session and its builder
//! - [`repository`] provides save-file adapters reused by other crates
//! - [`error`] is the error type surfaced by every session operation
pub mod error;
pub mod repository;
pub mod session;

pub use error::{Result, RuntimeError};
pub use repository::{
    FilePlayerRepository, InMemoryPlayerRepo, PlayerRepository, RepositoryError, SaveFile,
};
pub use session::{Session, SessionBuilder};
