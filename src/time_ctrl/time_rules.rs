// src/time_ctrl/time_rules.rs
//! Конфигурация тайминга консоли.
//!
//! Здесь описываем только "правила", без состояния.

use serde::{Deserialize, Serialize};

/// Профиль тайминга.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum TimeProfile {
    /// Прошивка консоли: дилер раз в 700 мс, климат раз в 5 с, дребезг 50 мс.
    Standard,
    /// Ускоренный профиль для симулятора и демонстраций.
    Fast,
}

/// Интервалы (в миллисекундах) для всех периодических подсистем.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TimingRules {
    /// Пауза между шагами анимации дилера.
    pub dealer_step_ms: u32,
    /// Период опроса датчика температуры/влажности.
    pub climate_poll_ms: u32,
    /// Интервал стабильности для антидребезга кнопок.
    pub debounce_ms: u32,
}

impl TimingRules {
    /// Строгий конструктор.
    pub const fn new(dealer_step_ms: u32, climate_poll_ms: u32, debounce_ms: u32) -> Self {
        Self {
            dealer_step_ms,
            climate_poll_ms,
            debounce_ms,
        }
    }

    pub const fn standard() -> Self {
        Self::new(700, 5_000, 50)
    }

    pub const fn fast() -> Self {
        Self::new(100, 1_000, 10)
    }

    /// Получить правила по профилю.
    pub const fn from_profile(profile: TimeProfile) -> Self {
        match profile {
            TimeProfile::Standard => Self::standard(),
            TimeProfile::Fast => Self::fast(),
        }
    }
}

impl Default for TimingRules {
    fn default() -> Self {
        Self::standard()
    }
}
