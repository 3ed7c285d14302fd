//! Дверь на сервоприводе, управляемая датчиком присутствия.

use log::info;
use serde::{Deserialize, Serialize};

use crate::console::hardware::DoorServo;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum DoorState {
    Open,
    Closed,
}

/// Полный проход сервопривода 0 → угол открытия (или обратно) по 1°.
/// Повторная команда в то же состояние ничего не делает.
#[derive(Clone, Debug)]
pub struct DoorController {
    state: DoorState,
    open_angle: u8,
}

impl DoorController {
    pub fn new(open_angle: u8) -> Self {
        Self {
            state: DoorState::Closed,
            open_angle,
        }
    }

    pub fn state(&self) -> DoorState {
        self.state
    }

    /// Присутствие → открыть, отсутствие → закрыть.
    /// Возвращает `true`, если дверь сдвинулась.
    pub fn update<S: DoorServo>(&mut self, presence: bool, servo: &mut S) -> bool {
        let target = if presence { DoorState::Open } else { DoorState::Closed };
        self.move_to(target, servo)
    }

    pub fn move_to<S: DoorServo>(&mut self, target: DoorState, servo: &mut S) -> bool {
        if self.state == target {
            return false;
        }

        match target {
            DoorState::Open => {
                for angle in 0..=self.open_angle {
                    servo.write_angle(angle);
                }
            }
            DoorState::Closed => {
                for angle in (0..=self.open_angle).rev() {
                    servo.write_angle(angle);
                }
            }
        }

        self.state = target;
        info!("Дверь: {target:?}");
        true
    }
}
