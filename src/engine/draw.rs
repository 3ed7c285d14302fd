//! Выбор случайной карты без повторов.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::domain::{CardIndex, Hand, Seat, DECK_SIZE};
use crate::engine::errors::EngineError;
use crate::engine::RandomSource;

/// Верхняя граница попыток rejection sampling.
///
/// В игре одновременно не больше 20 карт из 52, так что каждая попытка
/// успешна с вероятностью не меньше 32/52. Граница нужна только для
/// вырожденного RNG; после неё берём первую свободную карту по порядку.
pub const MAX_DRAW_ATTEMPTS: u32 = 1024;

/// Против чего проверяются повторы при вытягивании.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum DrawScope {
    /// Только против своей руки: одна и та же карта может оказаться
    /// одновременно у игрока и у дилера (поведение прошивки консоли).
    #[default]
    PerHand,
    /// Против обеих рук: одна общая колода.
    SharedDeck,
}

/// Выбрать индекс карты, которого нет в `own` (и в `other` для `SharedDeck`).
pub fn draw_unique<R: RandomSource>(
    rng: &mut R,
    seat: Seat,
    own: &Hand,
    other: &Hand,
    scope: DrawScope,
) -> Result<CardIndex, EngineError> {
    let taken = |index: CardIndex| {
        own.contains(index) || (scope == DrawScope::SharedDeck && other.contains(index))
    };

    for _ in 0..MAX_DRAW_ATTEMPTS {
        let index = rng.pick_index(DECK_SIZE);
        if index < DECK_SIZE && !taken(index) {
            return Ok(index);
        }
    }

    warn!("RNG не дал свободную карту за {MAX_DRAW_ATTEMPTS} попыток, берём первую свободную");
    (0..DECK_SIZE)
        .find(|&i| !taken(i))
        .ok_or(EngineError::DeckExhausted(seat))
}
