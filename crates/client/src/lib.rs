//! Console presentation adapter for the Hogwarts RPG.
//!
//! The runtime and core never print. This crate turns their structured
//! results into text and turns typed input into validated choices.
//!
//! - [`config`]: environment configuration
//! - [`logging`]: file logging setup
//! - [`console`]: line-based prompts over any reader/writer pair
//! - [`render`]: text for every structured result
//! - [`app`]: the menu loop
pub mod app;
pub mod config;
pub mod console;
pub mod logging;
pub mod render;

pub use app::App;
pub use config::ClientConfig;
pub use console::Console;
