//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys keep their defaults, so an empty file yields
    /// [`GameConfig::default`].
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        let range = &config.progression;
        anyhow::ensure!(
            range.explore_mana_min <= range.explore_mana_max,
            "explore_mana_min ({}) exceeds explore_mana_max ({})",
            range.explore_mana_min,
            range.explore_mana_max
        );

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_is_default() {
        assert_eq!(ConfigLoader::parse("").unwrap(), GameConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = ConfigLoader::parse(
            r#"
            starting_spell = "protego"

            [duel]
            victory_points = 50
            "#,
        )
        .unwrap();

        assert_eq!(config.starting_spell, "protego");
        assert_eq!(config.duel.victory_points, 50);
        assert_eq!(config.duel.defeat_points, -10);
        assert_eq!(config.progression.class_knowledge, 10);
        assert_eq!(config.starting_inventory, ["Wand", "Textbooks"]);
    }

    #[test]
    fn inverted_mana_range_is_rejected() {
        let err = ConfigLoader::parse(
            r#"
            [progression]
            explore_mana_min = 20
            explore_mana_max = 10
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("explore_mana_min"));
    }
}
