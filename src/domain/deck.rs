use thiserror::Error;

use crate::domain::card::{Card, Rank, Suit};
use crate::domain::CardIndex;

/// Размер колоды.
pub const DECK_SIZE: u8 = 52;

/// Ошибки модели колоды.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("Индекс карты {0} вне колоды (0..52)")]
    OutOfRange(CardIndex),
}

/// Колода - статическая таблица из 52 карт.
///
/// Порядок индексов: пики A..K (0..12), червы A..K (13..25),
/// бубны A..K (26..38), трефы A..K (39..51). В рантайме не меняется;
/// "вытягивание" карты - это выбор индекса, а не изъятие из колоды.
pub struct Deck;

impl Deck {
    /// Карта по индексу.
    pub fn value_of(index: CardIndex) -> Result<Card, DeckError> {
        if index >= DECK_SIZE {
            return Err(DeckError::OutOfRange(index));
        }
        let suit = Suit::ALL[(index / 13) as usize];
        let rank = Rank::ALL[(index % 13) as usize];
        Ok(Card::new(rank, suit))
    }

    /// Обратное отображение: индекс карты в колоде.
    pub fn index_of(card: Card) -> CardIndex {
        let suit_idx = Suit::ALL
            .iter()
            .position(|s| *s == card.suit)
            .unwrap_or_default() as u8;
        suit_idx * 13 + (card.rank as u8 - 1)
    }

    /// Все карты колоды в порядке индексов.
    pub fn cards() -> impl Iterator<Item = Card> {
        (0..DECK_SIZE).filter_map(|i| Self::value_of(i).ok())
    }
}
