use serde::{Deserialize, Serialize};

use crate::domain::{CardIndex, Outcome, RoundState};

/// DTO одной карты руки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardDto {
    pub index: CardIndex,
    /// Подпись вида `A♠`, `T♥`.
    pub label: String,
}

/// DTO руки: карты + очки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandViewDto {
    pub cards: Vec<CardDto>,
    pub total: u32,
    pub soft: bool,
    pub bust: bool,
}

/// DTO состояния игры для вывода наружу (лог, симулятор, отладка).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameViewDto {
    pub state: RoundState,
    pub player: HandViewDto,
    pub dealer: HandViewDto,
    /// Есть только после окончания раунда.
    pub outcome: Option<Outcome>,
    /// Строка счёта в том виде, как она на экране.
    pub score_line: String,
    /// Сколько мс осталось до следующего шага дилера (если он ходит).
    pub dealer_next_step_in_ms: Option<u32>,
    pub rounds_completed: u32,
}
