//! Консоль: граница с железом и главный цикл.
//!
//! - `hardware` - трейты подсистем (кнопки, RGB, дисплеи, датчики, серво);
//! - `buttons` - антидребезг;
//! - `climate` - опрос температуры/влажности;
//! - `door` - дверь по датчику присутствия;
//! - `layout` / `text_display` - разметка экрана и текстовый рендерер;
//! - `sim` - симулированное железо;
//! - `driver` - `Console`, одна итерация цикла за вызов.

pub mod buttons;
pub mod climate;
pub mod door;
pub mod driver;
pub mod hardware;
pub mod layout;
pub mod sim;
pub mod text_display;

pub use buttons::Debouncer;
pub use climate::{format_climate, ClimateMonitor, ClimateQuantity, ClimateReading, SensorError};
pub use door::{DoorController, DoorState};
pub use driver::{Console, StepReport};
pub use hardware::*;
pub use sim::{ScriptedPress, SimHardware};
pub use text_display::{DisplayCommand, PlacedCard, TextTableDisplay};
