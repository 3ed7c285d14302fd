use crate::domain::round::Outcome;

use super::evaluator::is_bust;

/// Исход раунда по итоговым очкам.
///
/// Перебор игрока проигрывает всегда, даже если дилер тоже перебрал.
pub fn resolve(player_total: u32, dealer_total: u32) -> Outcome {
    if is_bust(player_total) {
        Outcome::Lose
    } else if is_bust(dealer_total) {
        Outcome::Win
    } else if player_total > dealer_total {
        Outcome::Win
    } else if player_total < dealer_total {
        Outcome::Lose
    } else {
        Outcome::Tie
    }
}
