//! Инфраструктурный слой вокруг движка:
//! - RNG-реализации для движка;
//! - загрузка конфига консоли.

pub mod config;
pub mod rng;

pub use config::{ConfigError, ConsoleConfig, DOOR_OPEN_ANGLE};
pub use rng::*;
