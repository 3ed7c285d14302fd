use core::fmt;

use serde::{Deserialize, Serialize};

/// Чья рука.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Seat {
    Player,
    Dealer,
}

/// Фаза раунда.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundState {
    /// Игрок может брать карты или остановиться.
    AwaitingPlayerAction,
    /// Дилер добирает карты по таймеру.
    DealerActing,
    /// Раунд завершён, исход известен. Дальше - только reset.
    RoundOver,
}

/// Исход раунда с точки зрения игрока.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
    Tie,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::Win => "WIN",
            Outcome::Lose => "LOSE",
            Outcome::Tie => "TIE",
        };
        f.write_str(s)
    }
}
