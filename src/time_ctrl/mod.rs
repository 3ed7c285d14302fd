// src/time_ctrl/mod.rs
//! Контроль времени консоли.
//!
//! Здесь собираем:
//! - правила (`TimingRules`);
//! - монотонные часы с безопасной арифметикой переполнения (`MonotonicClock`);
//! - таймер шагов дилера (`DealerTimer`);
//! - периодический гейт для датчиков (`PeriodicTimer`).

pub mod clock;
pub mod dealer_timer;
pub mod periodic;
pub mod time_rules;

pub use clock::{elapsed_ms, interval_elapsed, ManualClock, MonotonicClock, SystemClock};
pub use dealer_timer::{DealerTimer, StepState};
pub use periodic::PeriodicTimer;
pub use time_rules::{TimeProfile, TimingRules};
