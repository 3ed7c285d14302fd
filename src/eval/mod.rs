//! Подсчёт очков руки и определение исхода раунда.
//!
//! Основные функции:
//!   `evaluate(cards) -> u32`
//!   `dealer_decision(total) -> DealerDecision`
//!   `resolve(player_total, dealer_total) -> Outcome`

pub mod dealer_rule;
pub mod evaluator;
pub mod outcome;

pub use dealer_rule::{dealer_decision, DealerDecision, DEALER_STAND_THRESHOLD};
pub use evaluator::{evaluate, evaluate_indices, hand_total, is_bust, is_soft, BLACKJACK};
pub use outcome::resolve;
