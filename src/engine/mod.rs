//! Игровой движок блэкджека.
//!
//! Высокоуровневый объект: `GameEngine`
//! Основные операции:
//!   - `hit` – игрок берёт карту
//!   - `stand` – игрок останавливается, запускается анимация дилера
//!   - `reset` – новая раздача
//!   - `tick` – один шаг главного цикла (добор дилера по таймеру)

pub mod actions;
pub mod display;
pub mod draw;
pub mod errors;
pub mod game_loop;
pub mod round_history;

pub use actions::PlayerAction;
pub use display::{format_score, Banner, StatusText, TableDisplay};
pub use draw::{draw_unique, DrawScope, MAX_DRAW_ATTEMPTS};
pub use errors::EngineError;
pub use game_loop::{EngineConfig, GameEngine, TickResult};
pub use round_history::{RoundEvent, RoundEventKind, RoundHistory};

/// RNG интерфейс для engine.
/// Реализации - в infra: обёртки над `rand` и скриптовый `ScriptedRng`.
pub trait RandomSource {
    /// Равномерно выбрать число из `0..upper`.
    fn pick_index(&mut self, upper: u8) -> u8;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn pick_index(&mut self, upper: u8) -> u8 {
        (**self).pick_index(upper)
    }
}
