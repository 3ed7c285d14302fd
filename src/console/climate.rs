//! Периодический опрос температуры/влажности и вывод на второй дисплей.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::console::hardware::{ClimateDisplay, ClimateSensor};
use crate::time_ctrl::PeriodicTimer;

/// Какая величина прочиталась с ошибкой.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ClimateQuantity {
    Temperature,
    Humidity,
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SensorError {
    #[error("Невалидное чтение датчика: {0:?}")]
    SensorReadInvalid(ClimateQuantity),
}

/// Одно чтение датчика. Невалидные величины уже заменены нулём.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ClimateReading {
    pub temperature_c: f32,
    pub humidity_pct: f32,
}

/// Строка для второго дисплея.
pub fn format_climate(reading: &ClimateReading) -> String {
    format!(
        "Temp: {:.2}C / Humid: {:.2}%",
        reading.temperature_c, reading.humidity_pct
    )
}

fn checked(value: Option<f32>, quantity: ClimateQuantity) -> Result<f32, SensorError> {
    match value {
        Some(v) if !v.is_nan() => Ok(v),
        _ => Err(SensorError::SensorReadInvalid(quantity)),
    }
}

/// Опрашивает датчик раз в `period_ms`.
#[derive(Clone, Debug)]
pub struct ClimateMonitor {
    timer: PeriodicTimer,
    last: Option<ClimateReading>,
    invalid_reads: u32,
}

impl ClimateMonitor {
    pub fn new(period_ms: u32) -> Self {
        Self {
            timer: PeriodicTimer::new(period_ms),
            last: None,
            invalid_reads: 0,
        }
    }

    pub fn last_reading(&self) -> Option<ClimateReading> {
        self.last
    }

    /// Сколько величин за всё время прочиталось невалидными.
    pub fn invalid_reads(&self) -> u32 {
        self.invalid_reads
    }

    /// Если период прошёл - читаем датчик и обновляем дисплей.
    ///
    /// Отметка времени ставится только в момент опроса, так что невалидное
    /// чтение не приводит к досрочному повтору.
    pub fn poll<H>(&mut self, now_ms: u32, hw: &mut H) -> Option<ClimateReading>
    where
        H: ClimateSensor + ClimateDisplay,
    {
        if !self.timer.fire_if_due(now_ms) {
            return None;
        }

        let temperature_c = self.substitute(checked(hw.read_temperature(), ClimateQuantity::Temperature));
        let humidity_pct = self.substitute(checked(hw.read_humidity(), ClimateQuantity::Humidity));
        let reading = ClimateReading {
            temperature_c,
            humidity_pct,
        };

        info!("Temperature: {temperature_c:.2}°C, Humidity: {humidity_pct:.2}%");
        hw.show_climate(&format_climate(&reading));
        self.last = Some(reading);
        Some(reading)
    }

    fn substitute(&mut self, value: Result<f32, SensorError>) -> f32 {
        value.unwrap_or_else(|err| {
            warn!("{err}, подставляем 0");
            self.invalid_reads += 1;
            0.0
        })
    }
}
