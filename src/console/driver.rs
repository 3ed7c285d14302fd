//! Главный цикл консоли.
//!
//! Один вызов `step` = одна итерация цикла прошивки:
//! кнопки → движок (тик дилера) → дверь → климат. Ничего не блокирует.

use log::{debug, info};

use crate::console::buttons::Debouncer;
use crate::console::climate::ClimateMonitor;
use crate::console::door::DoorController;
use crate::console::hardware::{ButtonId, ConsoleHardware, IndicatorColor};
use crate::engine::{GameEngine, PlayerAction, RandomSource, TickResult};
use crate::infra::ConsoleConfig;
use crate::time_ctrl::MonotonicClock;

/// Что произошло за одну итерацию цикла.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Распознанные нажатия, в порядке обработки.
    pub actions: Vec<PlayerAction>,
    pub tick: Option<TickResult>,
    pub door_moved: bool,
    pub climate_polled: bool,
}

pub struct Console<R: RandomSource, H: ConsoleHardware> {
    engine: GameEngine<R>,
    hardware: H,
    buttons: [(ButtonId, Debouncer); 3],
    door: DoorController,
    climate: ClimateMonitor,
}

impl<R: RandomSource, H: ConsoleHardware> Console<R, H> {
    pub fn new(config: &ConsoleConfig, rng: R, mut hardware: H) -> Self {
        // Все каналы в HIGH: индикатор погашен до первого нажатия.
        hardware.set_color(IndicatorColor::Off);

        let debounce = config.timing.debounce_ms;
        let buttons = ButtonId::ALL.map(|b| (b, Debouncer::new(debounce, hardware.level(b))));

        info!("Консоль готова, индикатор выключен");
        Self {
            engine: GameEngine::new(rng, config.engine_config()),
            hardware,
            buttons,
            door: DoorController::new(config.door_open_angle),
            climate: ClimateMonitor::new(config.timing.climate_poll_ms),
        }
    }

    pub fn engine(&self) -> &GameEngine<R> {
        &self.engine
    }

    pub fn hardware(&self) -> &H {
        &self.hardware
    }

    pub fn hardware_mut(&mut self) -> &mut H {
        &mut self.hardware
    }

    pub fn door(&self) -> &DoorController {
        &self.door
    }

    pub fn climate(&self) -> &ClimateMonitor {
        &self.climate
    }

    /// Итерация цикла по текущему времени часов.
    pub fn poll<C: MonotonicClock>(&mut self, clock: &C) -> StepReport {
        self.step(clock.now_ms())
    }

    pub fn step(&mut self, now_ms: u32) -> StepReport {
        let actions = self.handle_buttons(now_ms);
        let tick = self.engine.tick(now_ms, self.hardware.table_display());

        let presence = self.hardware.presence_detected();
        let door_moved = self.door.update(presence, &mut self.hardware);

        let climate_polled = self.climate.poll(now_ms, &mut self.hardware).is_some();

        StepReport {
            actions,
            tick: (tick != TickResult::Idle).then_some(tick),
            door_moved,
            climate_polled,
        }
    }

    /// Обработать кнопки: обновить антидребезг и выполнить действия по нажатиям.
    fn handle_buttons(&mut self, now_ms: u32) -> Vec<PlayerAction> {
        let mut pressed = Vec::new();
        for (button, debouncer) in self.buttons.iter_mut() {
            let level = self.hardware.level(*button);
            debouncer.update(level, now_ms);
            if debouncer.fell() {
                pressed.push(*button);
            }
        }

        let mut actions = Vec::with_capacity(pressed.len());
        for button in pressed {
            let color = button.indicator_color();
            self.hardware.set_color(color);
            info!("LED set to: {}", color.name());

            let action = button.action();
            self.apply(action, now_ms);
            actions.push(action);
        }
        actions
    }

    /// Выполнить действие игрока. Отказ движка не фатален, пишем в лог.
    pub fn apply(&mut self, action: PlayerAction, now_ms: u32) {
        let display = self.hardware.table_display();
        let result = match action {
            PlayerAction::Hit => self.engine.hit(now_ms, display).map(|_| ()),
            PlayerAction::Stand => self.engine.stand(now_ms, display),
            PlayerAction::Reset => {
                self.engine.reset(display);
                Ok(())
            }
        };
        if let Err(err) = result {
            debug!("Действие {action} проигнорировано: {err}");
        }
    }
}
