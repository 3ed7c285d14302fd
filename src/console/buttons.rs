//! Антидребезг кнопок.

use crate::time_ctrl::interval_elapsed;

/// Антидребезг по интервалу стабильности.
///
/// Стабильный уровень меняется только после того, как сырой уровень
/// продержался `interval_ms` без изменений. Флаги фронтов живут ровно
/// один вызов `update`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Debouncer {
    interval_ms: u32,
    stable_level: bool,
    raw_level: bool,
    raw_changed_ms: u32,
    fell: bool,
    rose: bool,
}

impl Debouncer {
    /// `initial_level` - уровень отпущенной кнопки (для подтяжки к питанию - `true`).
    pub fn new(interval_ms: u32, initial_level: bool) -> Self {
        Self {
            interval_ms,
            stable_level: initial_level,
            raw_level: initial_level,
            raw_changed_ms: 0,
            fell: false,
            rose: false,
        }
    }

    /// Подать очередное сырое чтение. Возвращает `true`, если стабильный
    /// уровень поменялся.
    pub fn update(&mut self, level: bool, now_ms: u32) -> bool {
        self.fell = false;
        self.rose = false;

        if level != self.raw_level {
            self.raw_level = level;
            self.raw_changed_ms = now_ms;
            return false;
        }

        if level == self.stable_level || !interval_elapsed(now_ms, self.raw_changed_ms, self.interval_ms) {
            return false;
        }

        self.stable_level = level;
        if level {
            self.rose = true;
        } else {
            self.fell = true;
        }
        true
    }

    /// Стабильный уровень упал (кнопку нажали).
    pub fn fell(&self) -> bool {
        self.fell
    }

    /// Стабильный уровень поднялся (кнопку отпустили).
    pub fn rose(&self) -> bool {
        self.rose
    }

    pub fn level(&self) -> bool {
        self.stable_level
    }
}
