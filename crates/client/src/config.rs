//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Configuration required to bootstrap a session and the console.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Content directory; built-in content when unset.
    pub data_dir: Option<PathBuf>,
    pub save_dir: PathBuf,
    pub save_slot: String,
    pub log_dir: PathBuf,
    pub session_id: String,
    /// Fixed RNG seed for reproducible runs.
    pub seed: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            save_dir: default_save_dir(),
            save_slot: "default".to_string(),
            log_dir: default_log_dir(),
            session_id: format!("session_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S")),
            seed: None,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `HOGWARTS_DATA_DIR` - Content directory (default: built-in content)
    /// - `HOGWARTS_SAVE_DIR` - Directory for save files (default: platform-specific)
    /// - `HOGWARTS_SAVE_SLOT` - Save slot name (default: `default`)
    /// - `HOGWARTS_LOG_DIR` - Directory for log files (default: platform-specific)
    /// - `HOGWARTS_SESSION_ID` - Log subdirectory name (default: timestamp)
    /// - `HOGWARTS_SEED` - RNG seed (default: OS entropy)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.data_dir = env::var("HOGWARTS_DATA_DIR").ok().map(PathBuf::from);

        if let Ok(dir) = env::var("HOGWARTS_SAVE_DIR") {
            config.save_dir = PathBuf::from(dir);
        }

        if let Ok(slot) = env::var("HOGWARTS_SAVE_SLOT")
            && !slot.trim().is_empty()
        {
            config.save_slot = slot.trim().to_string();
        }

        if let Ok(dir) = env::var("HOGWARTS_LOG_DIR") {
            config.log_dir = PathBuf::from(dir);
        }

        if let Ok(id) = env::var("HOGWARTS_SESSION_ID") {
            config.session_id = id;
        }

        config.seed = read_env::<u64>("HOGWARTS_SEED");

        config
    }
}

/// Platform data directory, e.g. `~/.local/share/hogwarts/saves` on Linux.
fn default_save_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "hogwarts")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
        .join("saves")
}

/// Platform cache directory, e.g. `~/.cache/hogwarts/logs` on Linux.
fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "hogwarts")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/hogwarts"))
        .join("logs")
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
