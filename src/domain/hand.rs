use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::card::Card;
use crate::domain::deck::{Deck, DeckError};
use crate::domain::CardIndex;

/// Сколько карт помещается в одну руку (ограничение экрана).
pub const HAND_LIMIT: usize = 10;

/// Ошибки добавления карты в руку.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum HandError {
    #[error("Рука заполнена ({HAND_LIMIT} карт)")]
    Full,

    #[error("Карта {0} уже есть в руке")]
    Duplicate(CardIndex),

    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Рука: упорядоченная, только-на-добавление последовательность индексов карт.
///
/// Инварианты:
/// - не больше `HAND_LIMIT` карт;
/// - без повторов внутри руки;
/// - все индексы валидны для `Deck`.
///
/// В serde рука выглядит как массив индексов; при чтении каждый индекс
/// проходит через `push`, так что инварианты держатся и здесь.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CardIndex>", into = "Vec<CardIndex>")]
pub struct Hand {
    indices: heapless::Vec<CardIndex, HAND_LIMIT>,
}

impl Hand {
    pub fn new() -> Self {
        Self {
            indices: heapless::Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.indices.is_full()
    }

    pub fn contains(&self, index: CardIndex) -> bool {
        self.indices.contains(&index)
    }

    /// Индексы карт в порядке вытягивания.
    pub fn indices(&self) -> &[CardIndex] {
        &self.indices
    }

    /// Карты руки в порядке вытягивания.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.indices.iter().filter_map(|&i| Deck::value_of(i).ok())
    }

    /// Добавить карту в конец руки.
    pub fn push(&mut self, index: CardIndex) -> Result<(), HandError> {
        Deck::value_of(index)?;
        if self.contains(index) {
            return Err(HandError::Duplicate(index));
        }
        self.indices.push(index).map_err(|_| HandError::Full)
    }

    pub fn clear(&mut self) {
        self.indices.clear();
    }
}

impl TryFrom<Vec<CardIndex>> for Hand {
    type Error = HandError;

    fn try_from(indices: Vec<CardIndex>) -> Result<Self, Self::Error> {
        let mut hand = Hand::new();
        for index in indices {
            hand.push(index)?;
        }
        Ok(hand)
    }
}

impl From<Hand> for Vec<CardIndex> {
    fn from(hand: Hand) -> Self {
        hand.indices.to_vec()
    }
}
