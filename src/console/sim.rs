//! Симулированное железо консоли: скрипт нажатий, фиксированный климат,
//! окна присутствия и запись всего, что ушло на выходы.

use serde::{Deserialize, Serialize};

use crate::console::hardware::{
    ButtonId, ButtonPins, ClimateDisplay, ClimateSensor, ConsoleHardware, DoorServo, Indicator,
    IndicatorColor, PresenceSensor,
};
use crate::console::text_display::TextTableDisplay;

/// Нажатие кнопки: уровень LOW в интервале `[at_ms, at_ms + hold_ms)`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScriptedPress {
    pub button: ButtonId,
    pub at_ms: u32,
    pub hold_ms: u32,
}

impl ScriptedPress {
    /// Обычное нажатие: 120 мс, с запасом больше интервала антидребезга.
    pub const fn tap(button: ButtonId, at_ms: u32) -> Self {
        Self {
            button,
            at_ms,
            hold_ms: 120,
        }
    }

    fn is_down(&self, now_ms: u32) -> bool {
        now_ms >= self.at_ms && now_ms - self.at_ms < self.hold_ms
    }
}

#[derive(Clone, Debug, Default)]
pub struct SimHardware {
    now_ms: u32,
    presses: Vec<ScriptedPress>,
    /// Интервалы `[from, to)`, когда датчик видит человека.
    presence_windows: Vec<(u32, u32)>,
    temperature: Option<f32>,
    humidity: Option<f32>,

    display: TextTableDisplay,
    indicator_log: Vec<IndicatorColor>,
    servo_angles: Vec<u8>,
    climate_texts: Vec<String>,
}

impl SimHardware {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_presses(mut self, presses: Vec<ScriptedPress>) -> Self {
        self.presses = presses;
        self
    }

    pub fn with_presence(mut self, windows: Vec<(u32, u32)>) -> Self {
        self.presence_windows = windows;
        self
    }

    pub fn with_climate(mut self, temperature: Option<f32>, humidity: Option<f32>) -> Self {
        self.temperature = temperature;
        self.humidity = humidity;
        self
    }

    pub fn set_climate(&mut self, temperature: Option<f32>, humidity: Option<f32>) {
        self.temperature = temperature;
        self.humidity = humidity;
    }

    /// Сдвинуть время симуляции (вызывается перед каждым шагом цикла).
    pub fn advance_to(&mut self, now_ms: u32) {
        self.now_ms = now_ms;
    }

    pub fn display(&self) -> &TextTableDisplay {
        &self.display
    }

    pub fn indicator_log(&self) -> &[IndicatorColor] {
        &self.indicator_log
    }

    pub fn servo_angles(&self) -> &[u8] {
        &self.servo_angles
    }

    pub fn climate_texts(&self) -> &[String] {
        &self.climate_texts
    }

    /// Время, после которого скрипт нажатий уже ничего не сделает.
    pub fn script_end_ms(&self) -> u32 {
        self.presses
            .iter()
            .map(|p| p.at_ms.saturating_add(p.hold_ms))
            .max()
            .unwrap_or(0)
    }
}

impl ButtonPins for SimHardware {
    fn level(&mut self, button: ButtonId) -> bool {
        let pressed = self
            .presses
            .iter()
            .any(|p| p.button == button && p.is_down(self.now_ms));
        !pressed
    }
}

impl Indicator for SimHardware {
    fn set_color(&mut self, color: IndicatorColor) {
        self.indicator_log.push(color);
    }
}

impl ClimateSensor for SimHardware {
    fn read_temperature(&mut self) -> Option<f32> {
        self.temperature
    }

    fn read_humidity(&mut self) -> Option<f32> {
        self.humidity
    }
}

impl ClimateDisplay for SimHardware {
    fn show_climate(&mut self, text: &str) {
        self.climate_texts.push(text.to_string());
    }
}

impl PresenceSensor for SimHardware {
    fn presence_detected(&mut self) -> bool {
        self.presence_windows
            .iter()
            .any(|&(from, to)| self.now_ms >= from && self.now_ms < to)
    }
}

impl DoorServo for SimHardware {
    fn write_angle(&mut self, degrees: u8) {
        self.servo_angles.push(degrees);
    }
}

impl ConsoleHardware for SimHardware {
    type Display = TextTableDisplay;

    fn table_display(&mut self) -> &mut Self::Display {
        &mut self.display
    }
}
