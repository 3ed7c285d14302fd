// src/time_ctrl/periodic.rs
//! Периодический "гейт" для опроса датчиков.

use serde::{Deserialize, Serialize};

use super::clock::interval_elapsed;

/// Срабатывает не чаще, чем раз в `period_ms`.
///
/// Как и в прошивке, отсчёт идёт от нуля: первое срабатывание - когда часы
/// дойдут до `period_ms`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PeriodicTimer {
    pub period_ms: u32,
    pub last_fired_ms: u32,
}

impl PeriodicTimer {
    pub fn new(period_ms: u32) -> Self {
        Self {
            period_ms,
            last_fired_ms: 0,
        }
    }

    pub fn is_due(&self, now_ms: u32) -> bool {
        interval_elapsed(now_ms, self.last_fired_ms, self.period_ms)
    }

    /// Если период прошёл - запоминаем момент и возвращаем `true`.
    pub fn fire_if_due(&mut self, now_ms: u32) -> bool {
        if !self.is_due(now_ms) {
            return false;
        }
        self.last_fired_ms = now_ms;
        true
    }
}
