use thiserror::Error;

use crate::domain::{DeckError, HandError, RoundState, Seat};

/// Ошибки игрового движка.
///
/// Ни одна из них не фатальна: отклонённое действие не меняет состояние,
/// а консоль просто пишет его в лог и продолжает цикл.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Рука {0:?} заполнена, карта не добавлена")]
    HandFull(Seat),

    #[error("Действие игрока недоступно в состоянии {0:?}")]
    NotAwaitingPlayer(RoundState),

    #[error("Нет свободных карт для руки {0:?}")]
    DeckExhausted(Seat),

    #[error(transparent)]
    Hand(#[from] HandError),

    #[error(transparent)]
    Deck(#[from] DeckError),
}
