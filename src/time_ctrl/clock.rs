// src/time_ctrl/clock.rs
//! Монотонные часы в миллисекундах (аналог `millis()` микроконтроллера).
//!
//! Время - `u32` и переполняется примерно раз в 49.7 суток. Все сравнения
//! интервалов идут через `elapsed_ms` (беззнаковая разность с переносом),
//! поэтому переполнение ничего не ломает.

use std::cell::Cell;
use std::time::Instant;

/// Источник текущего времени.
pub trait MonotonicClock {
    fn now_ms(&self) -> u32;
}

/// Сколько миллисекунд прошло от `since` до `now` с учётом переполнения.
pub fn elapsed_ms(now: u32, since: u32) -> u32 {
    now.wrapping_sub(since)
}

/// Прошло ли не меньше `interval_ms` от `since` до `now`.
pub fn interval_elapsed(now: u32, since: u32, interval_ms: u32) -> bool {
    elapsed_ms(now, since) >= interval_ms
}

/// Часы хоста: отсчёт от момента создания.
#[derive(Clone, Debug)]
pub struct SystemClock {
    started: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock for SystemClock {
    fn now_ms(&self) -> u32 {
        // Усечение до u32 - то же переполнение, что и у железного счётчика.
        self.started.elapsed().as_millis() as u32
    }
}

/// Ручные часы для симулятора и тестов.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Cell<u32>,
}

impl ManualClock {
    pub fn starting_at(now_ms: u32) -> Self {
        Self {
            now: Cell::new(now_ms),
        }
    }

    pub fn set(&self, now_ms: u32) {
        self.now.set(now_ms);
    }

    /// Сдвинуть время вперёд (с переносом через u32::MAX).
    pub fn advance(&self, delta_ms: u32) {
        self.now.set(self.now.get().wrapping_add(delta_ms));
    }
}

impl MonotonicClock for ManualClock {
    fn now_ms(&self) -> u32 {
        self.now.get()
    }
}

impl<C: MonotonicClock + ?Sized> MonotonicClock for &C {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}
