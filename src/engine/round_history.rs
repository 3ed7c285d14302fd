use serde::{Deserialize, Serialize};

use crate::domain::{CardIndex, Outcome, Seat};

/// Тип события в раунде.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundEventKind {
    /// Карта ушла в руку.
    CardDrawn {
        seat: Seat,
        card: CardIndex,
        at_ms: u32,
    },

    /// У игрока перебор (раунд ещё не закрыт - ждём stand).
    PlayerBusted { total: u32 },

    /// Игрок остановился, ход переходит к дилеру.
    PlayerStood { total: u32, at_ms: u32 },

    /// Дилер остановился на 17..=21.
    DealerStood { total: u32, at_ms: u32 },

    /// У дилера перебор.
    DealerBusted { total: u32, at_ms: u32 },

    /// Раунд закрыт.
    RoundResolved {
        player_total: u32,
        dealer_total: u32,
        outcome: Outcome,
    },
}

/// Событие раунда с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundEvent {
    pub index: u32,
    pub kind: RoundEventKind,
}

/// История текущего раунда. Очищается при reset.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundHistory {
    pub events: Vec<RoundEvent>,
}

impl RoundHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: RoundEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(RoundEvent { index: idx, kind });
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Моменты, когда дилер брал карты, по порядку.
    pub fn dealer_draw_times(&self) -> Vec<u32> {
        self.events
            .iter()
            .filter_map(|e| match e.kind {
                RoundEventKind::CardDrawn {
                    seat: Seat::Dealer,
                    at_ms,
                    ..
                } => Some(at_ms),
                _ => None,
            })
            .collect()
    }
}
