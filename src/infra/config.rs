//! Конфиг консоли: тайминги, режим колоды, угол двери, seed.
//!
//! Все поля необязательны - отсутствующие берутся из `ConsoleConfig::standard()`.
//!
//! ```json
//! { "timing": { "dealer_step_ms": 700 }, "draw_scope": "SharedDeck", "rng_seed": 7 }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::{DrawScope, EngineConfig};
use crate::time_ctrl::TimingRules;

/// Угол полностью открытой двери (градусы сервопривода).
pub const DOOR_OPEN_ANGLE: u8 = 95;

/// Ошибки загрузки конфига.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Не удалось прочитать конфиг {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Битый JSON конфига: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Недопустимое значение в конфиге: {0}")]
    Invalid(&'static str),
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ConsoleConfig {
    pub timing: TimingRules,
    pub draw_scope: DrawScope,
    pub door_open_angle: u8,
    /// `None` - системный RNG, иначе детерминированный с этим seed.
    pub rng_seed: Option<u64>,
}

impl ConsoleConfig {
    /// Настройки прошивки консоли.
    pub fn standard() -> Self {
        Self {
            timing: TimingRules::standard(),
            draw_scope: DrawScope::PerHand,
            door_open_angle: DOOR_OPEN_ANGLE,
            rng_seed: None,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timing.climate_poll_ms == 0 {
            return Err(ConfigError::Invalid("timing.climate_poll_ms должен быть > 0"));
        }
        if self.door_open_angle > 180 {
            return Err(ConfigError::Invalid("door_open_angle должен быть в 0..=180"));
        }
        Ok(())
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig::new(&self.timing, self.draw_scope)
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::standard()
    }
}
