//! Доменная модель блэкджека: карты, колода, руки, состояние раунда.

pub mod card;
pub mod deck;
pub mod hand;
pub mod round;

/// Индекс карты в колоде (0..52).
pub type CardIndex = u8;

// Реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use deck::*;
pub use hand::*;
pub use round::*;
