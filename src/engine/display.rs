//! Порт основного дисплея: что движок просит нарисовать.
//!
//! Реализации (OLED-драйвер, текстовый рендерер, запись кадров в тестах)
//! живут снаружи движка.

use serde::{Deserialize, Serialize};

use crate::domain::{Card, Outcome, Seat};

/// Короткие статусные строки.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum StatusText {
    Stand,
    DealerStands,
    DealerBust,
    Tie,
}

impl StatusText {
    pub const fn text(self) -> &'static str {
        match self {
            StatusText::Stand => "STAND!",
            StatusText::DealerStands => "Dealer stands",
            StatusText::DealerBust => "Dealer bust",
            StatusText::Tie => "Tie",
        }
    }
}

/// Полноэкранные картинки.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Banner {
    Win,
    Lose,
    Bust,
}

/// Строка счёта: `P: 18  |  D: 20`.
pub fn format_score(player_total: u32, dealer_total: u32) -> String {
    format!("P: {player_total}  |  D: {dealer_total}")
}

/// Основной (игровой) дисплей.
pub trait TableDisplay {
    /// Очистить экран целиком.
    fn clear(&mut self);

    /// Перерисовать строку счёта.
    fn show_score(&mut self, player_total: u32, dealer_total: u32);

    /// Перерисовать карты руки в сетке.
    fn show_hand(&mut self, seat: Seat, cards: &[Card]);

    fn show_status(&mut self, status: StatusText);

    fn show_banner(&mut self, banner: Banner);

    /// Показать результат раунда. Для ничьей картинки нет - только статус.
    fn show_outcome(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.show_banner(Banner::Win),
            Outcome::Lose => self.show_banner(Banner::Lose),
            Outcome::Tie => self.show_status(StatusText::Tie),
        }
    }
}

impl<D: TableDisplay + ?Sized> TableDisplay for &mut D {
    fn clear(&mut self) {
        (**self).clear()
    }

    fn show_score(&mut self, player_total: u32, dealer_total: u32) {
        (**self).show_score(player_total, dealer_total)
    }

    fn show_hand(&mut self, seat: Seat, cards: &[Card]) {
        (**self).show_hand(seat, cards)
    }

    fn show_status(&mut self, status: StatusText) {
        (**self).show_status(status)
    }

    fn show_banner(&mut self, banner: Banner) {
        (**self).show_banner(banner)
    }

    fn show_outcome(&mut self, outcome: Outcome) {
        (**self).show_outcome(outcome)
    }
}
