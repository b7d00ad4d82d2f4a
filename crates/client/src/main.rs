//! Hogwarts RPG client binary.
//!
//! Composition root: reads configuration from the environment, installs
//! file logging, then hands stdin/stdout to the console [`App`].
//!
//! # Examples
//!
//! ```bash
//! # Reproducible run with content from a custom directory
//! HOGWARTS_SEED=7 HOGWARTS_DATA_DIR=./my-data cargo run -p hogwarts-client
//! ```

use std::io;

use anyhow::Result;
use hogwarts_client::{App, ClientConfig, Console, logging};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _guard = logging::setup_logging(&config)?;

    tracing::info!("Starting Hogwarts client");
    tracing::info!("Save directory: {}", config.save_dir.display());

    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout());
    App::new(console, config)?.run()
}
