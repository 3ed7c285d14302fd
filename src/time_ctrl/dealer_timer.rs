// src/time_ctrl/dealer_timer.rs
//! Таймер анимации хода дилера.

use serde::{Deserialize, Serialize};

use super::clock::{elapsed_ms, interval_elapsed};

/// Результат опроса таймера.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum StepState {
    /// Интервал ещё не прошёл - ничего не делаем.
    Waiting { remaining_ms: u32 },
    /// Пора делать следующий шаг дилера.
    Due,
}

/// Состояние планировщика дилера: время последнего действия и шаг.
///
/// Живёт только пока дилер добирает карты. Сам по себе ничего не тянет:
/// движок опрашивает `poll` на каждом тике и после шага вызывает `mark_step`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DealerTimer {
    pub last_action_ms: u32,
    pub step_ms: u32,
}

impl DealerTimer {
    /// Запустить таймер в момент `now_ms`. Первый шаг - через `step_ms`.
    pub fn start(now_ms: u32, step_ms: u32) -> Self {
        Self {
            last_action_ms: now_ms,
            step_ms,
        }
    }

    pub fn poll(&self, now_ms: u32) -> StepState {
        if interval_elapsed(now_ms, self.last_action_ms, self.step_ms) {
            StepState::Due
        } else {
            StepState::Waiting {
                remaining_ms: self.step_ms - elapsed_ms(now_ms, self.last_action_ms),
            }
        }
    }

    /// Зафиксировать, что шаг выполнен в момент `now_ms`.
    pub fn mark_step(&mut self, now_ms: u32) {
        self.last_action_ms = now_ms;
    }
}
