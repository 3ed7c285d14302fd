use crate::domain::card::Card;
use crate::domain::deck::{Deck, DeckError};
use crate::domain::hand::Hand;
use crate::domain::CardIndex;

/// Граница перебора.
pub const BLACKJACK: u32 = 21;

/// Сколько очков "снимает" пересчёт туза из 11 в 1.
const SOFT_ACE_DELTA: u32 = 10;

/// Сумма очков по правилам блэкджека.
///
/// Тузы сначала считаются как 11. Пока сумма больше 21 и есть туз,
/// посчитанный как 11, - пересчитываем его в 1. Пустая рука = 0.
pub fn evaluate<I>(cards: I) -> u32
where
    I: IntoIterator<Item = Card>,
{
    let (total, _) = total_and_soft_aces(cards);
    total
}

/// То же, что `evaluate`, но по индексам колоды.
pub fn evaluate_indices(indices: &[CardIndex]) -> Result<u32, DeckError> {
    let mut cards = Vec::with_capacity(indices.len());
    for &i in indices {
        cards.push(Deck::value_of(i)?);
    }
    Ok(evaluate(cards))
}

/// Очки руки.
pub fn hand_total(hand: &Hand) -> u32 {
    evaluate(hand.cards())
}

/// Мягкая рука: хотя бы один туз всё ещё считается как 11.
pub fn is_soft<I>(cards: I) -> bool
where
    I: IntoIterator<Item = Card>,
{
    let (_, soft_aces) = total_and_soft_aces(cards);
    soft_aces > 0
}

/// Перебор.
pub fn is_bust(total: u32) -> bool {
    total > BLACKJACK
}

fn total_and_soft_aces<I>(cards: I) -> (u32, u32)
where
    I: IntoIterator<Item = Card>,
{
    let mut total = 0u32;
    let mut aces_as_eleven = 0u32;

    for card in cards {
        if card.rank.is_ace() {
            aces_as_eleven += 1;
        }
        total += u32::from(card.points());
    }

    while total > BLACKJACK && aces_as_eleven > 0 {
        total -= SOFT_ACE_DELTA;
        aces_as_eleven -= 1;
    }

    (total, aces_as_eleven)
}
