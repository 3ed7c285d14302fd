//! Граница с железом консоли.
//!
//! Каждая подсистема - отдельный маленький трейт; `ConsoleHardware`
//! собирает их вместе для главного цикла.

use serde::{Deserialize, Serialize};

use crate::engine::{PlayerAction, TableDisplay};

/// Физическая кнопка.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ButtonId {
    /// Красная - HIT.
    Red,
    /// Белая - STAND.
    White,
    /// Жёлтая - RESET.
    Yellow,
}

impl ButtonId {
    /// Порядок опроса внутри одного тика.
    pub const ALL: [ButtonId; 3] = [ButtonId::Red, ButtonId::White, ButtonId::Yellow];

    pub const fn action(self) -> PlayerAction {
        match self {
            ButtonId::Red => PlayerAction::Hit,
            ButtonId::White => PlayerAction::Stand,
            ButtonId::Yellow => PlayerAction::Reset,
        }
    }

    pub const fn indicator_color(self) -> IndicatorColor {
        match self {
            ButtonId::Red => IndicatorColor::Red,
            ButtonId::White => IndicatorColor::White,
            ButtonId::Yellow => IndicatorColor::Yellow,
        }
    }
}

/// Цвет RGB-индикатора.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum IndicatorColor {
    Red,
    White,
    Yellow,
    Off,
}

impl IndicatorColor {
    /// Уровни пинов (R, G, B) для светодиода с общим анодом:
    /// `false` (LOW) - канал горит, `true` (HIGH) - погашен.
    pub const fn channel_levels(self) -> [bool; 3] {
        match self {
            IndicatorColor::Red => [false, true, true],
            IndicatorColor::White => [false, false, false],
            IndicatorColor::Yellow => [false, false, true],
            IndicatorColor::Off => [true, true, true],
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            IndicatorColor::Red => "RED",
            IndicatorColor::White => "WHITE",
            IndicatorColor::Yellow => "YELLOW",
            IndicatorColor::Off => "NONE",
        }
    }
}

/// Сырые уровни кнопок. Кнопки активны по низкому уровню:
/// `true` - отпущена, `false` - нажата.
pub trait ButtonPins {
    fn level(&mut self, button: ButtonId) -> bool;
}

pub trait Indicator {
    fn set_color(&mut self, color: IndicatorColor);
}

/// Датчик температуры/влажности. `None` или NaN - невалидное чтение.
pub trait ClimateSensor {
    fn read_temperature(&mut self) -> Option<f32>;
    fn read_humidity(&mut self) -> Option<f32>;
}

/// Второй дисплей (климат).
pub trait ClimateDisplay {
    fn show_climate(&mut self, text: &str);
}

pub trait PresenceSensor {
    fn presence_detected(&mut self) -> bool;
}

/// Сервопривод двери: абсолютный угол в градусах.
pub trait DoorServo {
    fn write_angle(&mut self, degrees: u8);
}

/// Всё железо консоли.
pub trait ConsoleHardware:
    ButtonPins + Indicator + ClimateSensor + ClimateDisplay + PresenceSensor + DoorServo
{
    type Display: TableDisplay;

    fn table_display(&mut self) -> &mut Self::Display;
}
