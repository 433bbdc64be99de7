use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::Path;

use crate::game::{DEFAULT_BOT_DELAY_MS, Difficulty};

const MAX_BOT_DELAY_MS: u64 = 10_000;

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub difficulty: Difficulty,
    #[serde(default = "default_bot_delay_ms")]
    pub bot_delay_ms: u64,
}

fn default_bot_delay_ms() -> u64 {
    DEFAULT_BOT_DELAY_MS
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            bot_delay_ms: DEFAULT_BOT_DELAY_MS,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.bot_delay_ms > MAX_BOT_DELAY_MS {
            return Err(format!(
                "bot_delay_ms must not exceed {}",
                MAX_BOT_DELAY_MS
            ));
        }
        Ok(())
    }
}

// A missing file yields the default config; any other read failure is an
// error.
pub fn load_config(path: &Path) -> Result<GameConfig, String> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(GameConfig::default()),
        Err(err) => return Err(format!("Failed to read config file: {}", err)),
    };

    let config: GameConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("Failed to deserialize config: {}", e))?;

    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;

    Ok(config)
}

pub fn save_config(path: &Path, config: &GameConfig) -> Result<(), String> {
    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;

    let content = serde_yaml_ng::to_string(config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;

    std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("tictactoe_{}_{}.yaml", name, std::process::id()))
    }

    #[test]
    fn test_missing_file_yields_default() {
        let path = temp_config_path("missing");
        let config = load_config(&path).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let path = temp_config_path("round_trip");
        let config = GameConfig {
            difficulty: Difficulty::Hard,
            bot_delay_ms: 250,
        };

        save_config(&path, &config).unwrap();
        let loaded = load_config(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_difficulty_serializes_as_lowercase() {
        let config = GameConfig {
            difficulty: Difficulty::Medium,
            bot_delay_ms: 500,
        };
        let yaml = serde_yaml_ng::to_string(&config).unwrap();
        assert!(yaml.contains("difficulty: medium"));
    }

    #[test]
    fn test_out_of_range_delay_is_rejected() {
        let config = GameConfig {
            difficulty: Difficulty::Easy,
            bot_delay_ms: MAX_BOT_DELAY_MS + 1,
        };
        assert!(config.validate().is_err());

        let path = temp_config_path("invalid");
        assert!(save_config(&path, &config).is_err());
    }

    #[test]
    fn test_delay_defaults_when_absent() {
        let config: GameConfig = serde_yaml_ng::from_str("difficulty: hard\n").unwrap();
        assert_eq!(config.bot_delay_ms, DEFAULT_BOT_DELAY_MS);
        assert_eq!(config.difficulty, Difficulty::Hard);
    }
}
