use serde::{Deserialize, Serialize};

use super::evaluator::BLACKJACK;

/// Дилер перестаёт брать карты с этой суммы (включительно).
pub const DEALER_STAND_THRESHOLD: u32 = 17;

/// Что дилер делает при текущей сумме.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum DealerDecision {
    /// Меньше 17 - берём ещё.
    Draw,
    /// 17..=21 - стоим.
    Stand,
    /// Больше 21 - перебор.
    Bust,
}

pub fn dealer_decision(dealer_total: u32) -> DealerDecision {
    if (DEALER_STAND_THRESHOLD..=BLACKJACK).contains(&dealer_total) {
        DealerDecision::Stand
    } else if dealer_total > BLACKJACK {
        DealerDecision::Bust
    } else {
        DealerDecision::Draw
    }
}
