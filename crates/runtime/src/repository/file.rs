//! File-based PlayerRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use game_core::PlayerRecord;

use super::{PlayerRepository, RepositoryError, Result, SaveFile, validate_slot};

/// File-based implementation of PlayerRepository.
///
/// # File Format
///
/// Each slot is stored as `save_{slot}.json`, a pretty-printed [`SaveFile`].
/// Writes go to a temp file first and are atomically renamed into place, so
/// a crash never leaves a half-written save.
pub struct FilePlayerRepository {
    base_dir: PathBuf,
}

impl FilePlayerRepository {
    /// Create a new file-based repository, creating the directory if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    /// Get the path to a save file.
    fn save_path(&self, slot: &str) -> PathBuf {
        self.base_dir.join(format!("save_{}.json", slot))
    }
}

impl PlayerRepository for FilePlayerRepository {
    fn save(&self, slot: &str, record: &PlayerRecord) -> Result<()> {
        validate_slot(slot)?;
        let path = self.save_path(slot);
        let temp_path = path.with_extension("json.tmp");

        // Write to temp file
        let json = serde_json::to_string_pretty(&SaveFile::new(record.clone()))
            .map_err(|e| RepositoryError::Json(e.to_string()))?;
        fs::write(&temp_path, json).map_err(RepositoryError::Io)?;

        // Atomic rename
        fs::rename(&temp_path, &path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved player '{}' to {}", record.name, path.display());

        Ok(())
    }

    fn load(&self, slot: &str) -> Result<Option<SaveFile>> {
        validate_slot(slot)?;
        let path = self.save_path(slot);

        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&path).map_err(RepositoryError::Io)?;
        let save: SaveFile =
            serde_json::from_str(&json).map_err(|e| RepositoryError::Json(e.to_string()))?;

        if save.version != SaveFile::CURRENT_VERSION {
            return Err(RepositoryError::UnsupportedVersion {
                found: save.version,
                expected: SaveFile::CURRENT_VERSION,
            });
        }

        tracing::debug!("Loaded save '{}' from {}", slot, path.display());

        Ok(Some(save))
    }

    fn exists(&self, slot: &str) -> bool {
        validate_slot(slot).is_ok() && self.save_path(slot).exists()
    }

    fn delete(&self, slot: &str) -> Result<()> {
        validate_slot(slot)?;
        let path = self.save_path(slot);

        if path.exists() {
            fs::remove_file(&path).map_err(RepositoryError::Io)?;
            tracing::info!("Deleted save: {}", path.display());
        }

        Ok(())
    }

    fn list(&self) -> Result<Vec<String>> {
        let mut slots = Vec::new();

        let entries = fs::read_dir(&self.base_dir).map_err(RepositoryError::Io)?;

        for entry in entries {
            let entry = entry.map_err(RepositoryError::Io)?;
            let path = entry.path();

            if let Some(filename) = path.file_name().and_then(|s| s.to_str())
                && let Some(slot) = filename
                    .strip_prefix("save_")
                    .and_then(|s| s.strip_suffix(".json"))
            {
                slots.push(slot.to_string());
            }
        }

        slots.sort();
        Ok(slots)
    }
}
