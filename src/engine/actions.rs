use core::fmt;

use serde::{Deserialize, Serialize};

/// Действие игрока (одна кнопка = одно действие).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    Hit,
    Stand,
    Reset,
}

impl fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlayerAction::Hit => "HIT",
            PlayerAction::Stand => "STAND",
            PlayerAction::Reset => "RESET",
        };
        f.write_str(s)
    }
}
