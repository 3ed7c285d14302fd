//! Тесты консоли: антидребезг, индикатор, дверь, климат, разметка,
//! конфиг и полный прогон главного цикла на симулированном железе.

use blackjack_console::console::layout::{card_slots, label_position, Point, HAND_START_Y};
use blackjack_console::console::{
    format_climate, ButtonId, ClimateDisplay, ClimateMonitor, ClimateReading, ClimateSensor,
    Console, Debouncer, DoorController, DoorServo, DoorState, IndicatorColor, ScriptedPress,
    SimHardware,
};
use blackjack_console::domain::{Outcome, RoundState};
use blackjack_console::engine::{Banner, DrawScope, PlayerAction};
use blackjack_console::infra::{ConfigError, ConsoleConfig, ScriptedRng};

/// Серво, которое запоминает все углы.
#[derive(Default)]
struct RecordingServo {
    angles: Vec<u8>,
}

impl DoorServo for RecordingServo {
    fn write_angle(&mut self, degrees: u8) {
        self.angles.push(degrees);
    }
}

/// Датчик климата с заданными чтениями и второй дисплей.
#[derive(Default)]
struct FakeClimate {
    temperature: Option<f32>,
    humidity: Option<f32>,
    shown: Vec<String>,
}

impl ClimateSensor for FakeClimate {
    fn read_temperature(&mut self) -> Option<f32> {
        self.temperature
    }

    fn read_humidity(&mut self) -> Option<f32> {
        self.humidity
    }
}

impl ClimateDisplay for FakeClimate {
    fn show_climate(&mut self, text: &str) {
        self.shown.push(text.to_string());
    }
}

/// Нажатие распознаётся после интервала стабильности, один раз
#[test]
fn debouncer_reports_single_fall_after_interval() {
    let mut d = Debouncer::new(50, true);

    assert!(!d.update(true, 0));
    assert!(!d.update(false, 100));
    assert!(!d.update(false, 140));
    assert!(d.update(false, 150));
    assert!(d.fell());
    assert!(!d.level());

    // Флаг живёт один вызов.
    assert!(!d.update(false, 160));
    assert!(!d.fell());

    assert!(!d.update(true, 200));
    assert!(d.update(true, 250));
    assert!(d.rose());
    assert!(d.level());
}

/// Дребезг перезапускает интервал
#[test]
fn debouncer_ignores_bounce() {
    let mut d = Debouncer::new(50, true);

    d.update(false, 100);
    d.update(true, 110);
    d.update(false, 120);
    assert!(!d.update(false, 160));
    assert!(d.update(false, 170));
    assert!(d.fell());
}

/// Кнопки, действия и цвета индикатора
#[test]
fn buttons_map_to_actions_and_colors() {
    assert_eq!(ButtonId::Red.action(), PlayerAction::Hit);
    assert_eq!(ButtonId::White.action(), PlayerAction::Stand);
    assert_eq!(ButtonId::Yellow.action(), PlayerAction::Reset);

    assert_eq!(ButtonId::Red.indicator_color(), IndicatorColor::Red);
    assert_eq!(ButtonId::White.indicator_color(), IndicatorColor::White);
    assert_eq!(ButtonId::Yellow.indicator_color(), IndicatorColor::Yellow);

    // Общий анод: LOW = канал горит.
    assert_eq!(IndicatorColor::Red.channel_levels(), [false, true, true]);
    assert_eq!(IndicatorColor::White.channel_levels(), [false, false, false]);
    assert_eq!(IndicatorColor::Yellow.channel_levels(), [false, false, true]);
    assert_eq!(IndicatorColor::Off.channel_levels(), [true, true, true]);
}

/// Дверь делает полный проход и не повторяет команду
#[test]
fn door_sweeps_and_is_idempotent() {
    let mut door = DoorController::new(95);
    let mut servo = RecordingServo::default();
    assert_eq!(door.state(), DoorState::Closed);

    assert!(!door.update(false, &mut servo));
    assert!(servo.angles.is_empty());

    assert!(door.update(true, &mut servo));
    assert_eq!(door.state(), DoorState::Open);
    assert_eq!(servo.angles, (0..=95).collect::<Vec<u8>>());

    assert!(!door.update(true, &mut servo));
    assert_eq!(servo.angles.len(), 96);

    servo.angles.clear();
    assert!(door.update(false, &mut servo));
    assert_eq!(door.state(), DoorState::Closed);
    assert_eq!(servo.angles, (0..=95).rev().collect::<Vec<u8>>());
}

/// Климат опрашивается раз в 5 секунд, первый раз на 5000 мс
#[test]
fn climate_polls_on_period() {
    let mut monitor = ClimateMonitor::new(5_000);
    let mut hw = FakeClimate {
        temperature: Some(22.5),
        humidity: Some(41.0),
        ..Default::default()
    };

    assert_eq!(monitor.poll(0, &mut hw), None);
    assert_eq!(monitor.poll(4_999, &mut hw), None);

    let reading = monitor.poll(5_000, &mut hw).unwrap();
    assert_eq!(
        reading,
        ClimateReading {
            temperature_c: 22.5,
            humidity_pct: 41.0
        }
    );
    assert_eq!(hw.shown, vec!["Temp: 22.50C / Humid: 41.00%".to_string()]);

    assert_eq!(monitor.poll(9_999, &mut hw), None);
    assert!(monitor.poll(10_000, &mut hw).is_some());
    assert_eq!(hw.shown.len(), 2);
}

/// Невалидное чтение заменяется нулём и не сдвигает расписание
#[test]
fn climate_invalid_read_becomes_zero() {
    let mut monitor = ClimateMonitor::new(5_000);
    let mut hw = FakeClimate {
        temperature: None,
        humidity: Some(f32::NAN),
        ..Default::default()
    };

    let reading = monitor.poll(5_000, &mut hw).unwrap();
    assert_eq!(reading, ClimateReading::default());
    assert_eq!(monitor.invalid_reads(), 2);
    assert_eq!(hw.shown, vec!["Temp: 0.00C / Humid: 0.00%".to_string()]);
    assert_eq!(monitor.last_reading(), Some(ClimateReading::default()));

    assert_eq!(monitor.poll(5_001, &mut hw), None);
    assert_eq!(
        format_climate(&ClimateReading {
            temperature_c: -3.456,
            humidity_pct: 99.999
        }),
        "Temp: -3.46C / Humid: 100.00%"
    );
}

/// Сетка карт: три в ряд, потом перенос
#[test]
fn card_slots_wrap_after_three() {
    let slots = card_slots(5, HAND_START_Y);
    assert_eq!(
        slots,
        vec![
            Point::new(5, 20),
            Point::new(40, 20),
            Point::new(75, 20),
            Point::new(5, 36),
            Point::new(40, 36),
        ]
    );
    assert_eq!(label_position(slots[1]), Point::new(58, 20));
    assert!(card_slots(0, HAND_START_Y).is_empty());
}

/// Конфиг: пустой JSON = стандартные настройки, частичный дополняется
#[test]
fn config_defaults_and_partial_json() {
    assert_eq!(ConsoleConfig::from_json_str("{}").unwrap(), ConsoleConfig::standard());

    let config = ConsoleConfig::from_json_str(
        r#"{ "timing": { "dealer_step_ms": 300 }, "draw_scope": "SharedDeck", "rng_seed": 7 }"#,
    )
    .unwrap();
    assert_eq!(config.timing.dealer_step_ms, 300);
    assert_eq!(config.timing.climate_poll_ms, 5_000);
    assert_eq!(config.draw_scope, DrawScope::SharedDeck);
    assert_eq!(config.rng_seed, Some(7));
    assert_eq!(config.door_open_angle, 95);
    assert_eq!(config.engine_config().dealer_step_ms, 300);
}

/// Конфиг: ошибки
#[test]
fn config_rejects_invalid_values() {
    assert!(matches!(
        ConsoleConfig::from_json_str(r#"{ "timing": { "climate_poll_ms": 0 } }"#),
        Err(ConfigError::Invalid(_))
    ));
    assert!(matches!(
        ConsoleConfig::from_json_str(r#"{ "door_open_angle": 200 }"#),
        Err(ConfigError::Invalid(_))
    ));
    assert!(matches!(
        ConsoleConfig::from_json_str("{ not json"),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        ConsoleConfig::load("/definitely/missing/console.json"),
        Err(ConfigError::Io { .. })
    ));
}

/// Полный прогон: hit, hit, stand, лишний stand, дверь, климат
#[test]
fn console_full_round_on_sim_hardware() {
    // Игрок T♠ 8♠ = 18, дилер T♥ + T♠ = 20.
    let rng = ScriptedRng::new(vec![9, 22, 7]);
    let hardware = SimHardware::new()
        .with_presses(vec![
            ScriptedPress::tap(ButtonId::Red, 100),
            ScriptedPress::tap(ButtonId::Red, 400),
            ScriptedPress::tap(ButtonId::White, 700),
            ScriptedPress::tap(ButtonId::White, 1_000),
        ])
        .with_presence(vec![(1_000, 2_000)])
        .with_climate(Some(22.5), Some(41.0));
    let mut console = Console::new(&ConsoleConfig::standard(), rng, hardware);

    let mut actions = Vec::new();
    let mut now = 0;
    while now <= 6_000 {
        console.hardware_mut().advance_to(now);
        let report = console.step(now);
        actions.extend(report.actions);
        now += 10;
    }

    assert_eq!(
        actions,
        vec![
            PlayerAction::Hit,
            PlayerAction::Hit,
            PlayerAction::Stand,
            PlayerAction::Stand
        ]
    );

    let engine = console.engine();
    assert_eq!(engine.state(), RoundState::RoundOver);
    assert_eq!(engine.outcome(), Some(Outcome::Lose));
    assert_eq!(engine.totals(), (18, 20));
    // Stand в 750, шаги дилера в 1450 и 2150.
    assert_eq!(engine.history().dealer_draw_times(), vec![150, 1_450]);

    let hw = console.hardware();
    // Старт с погашенным индикатором; отклонённый второй stand всё равно его зажигает.
    assert_eq!(
        hw.indicator_log(),
        &[
            IndicatorColor::Off,
            IndicatorColor::Red,
            IndicatorColor::Red,
            IndicatorColor::White,
            IndicatorColor::White
        ]
    );
    assert_eq!(hw.display().banner(), Some(Banner::Lose));
    assert_eq!(hw.display().render(), vec!["*** YOU LOST ***".to_string()]);

    assert_eq!(hw.servo_angles().len(), 96 * 2);
    assert_eq!(hw.servo_angles().first(), Some(&0));
    assert_eq!(hw.servo_angles()[95], 95);
    assert_eq!(hw.servo_angles().last(), Some(&0));
    assert_eq!(console.door().state(), DoorState::Closed);

    assert_eq!(hw.climate_texts(), &["Temp: 22.50C / Humid: 41.00%".to_string()]);
    assert_eq!(console.climate().invalid_reads(), 0);
}

/// Reset посреди хода дилера
#[test]
fn console_reset_interrupts_dealer() {
    let rng = ScriptedRng::new(vec![9, 22, 7]);
    let hardware = SimHardware::new().with_presses(vec![
        ScriptedPress::tap(ButtonId::Red, 100),
        ScriptedPress::tap(ButtonId::White, 400),
        ScriptedPress::tap(ButtonId::Yellow, 800),
    ]);
    let mut console = Console::new(&ConsoleConfig::standard(), rng, hardware);

    for now in (0..=3_000).step_by(10) {
        console.hardware_mut().advance_to(now);
        console.step(now);
    }

    let engine = console.engine();
    assert_eq!(engine.state(), RoundState::AwaitingPlayerAction);
    assert!(engine.player_hand().is_empty());
    assert!(engine.dealer_hand().is_empty());
    assert!(engine.dealer_timer().is_none());
    assert!(console.hardware().display().render().is_empty());
    assert_eq!(
        console.hardware().indicator_log().last(),
        Some(&IndicatorColor::Yellow)
    );
}

/// При старте индикатор гаснет, до первого нажатия других цветов нет.
#[test]
fn console_boots_with_indicator_off() {
    let rng = ScriptedRng::new(vec![9, 22, 7]);
    let mut console = Console::new(&ConsoleConfig::standard(), rng, SimHardware::new());

    assert_eq!(console.hardware().indicator_log(), &[IndicatorColor::Off]);

    for now in (0..=1_000).step_by(10) {
        console.hardware_mut().advance_to(now);
        console.step(now);
    }

    assert_eq!(console.hardware().indicator_log(), &[IndicatorColor::Off]);
    assert_eq!(console.engine().state(), RoundState::AwaitingPlayerAction);
}

/// Датчик отвалился между опросами: на втором экране нули, счётчик растёт.
#[test]
fn console_climate_follows_sensor_changes() {
    let rng = ScriptedRng::new(vec![9, 22, 7]);
    let hardware = SimHardware::new().with_climate(Some(22.5), Some(41.0));
    let mut console = Console::new(&ConsoleConfig::standard(), rng, hardware);

    assert!(console.step(5_000).climate_polled);

    console.hardware_mut().set_climate(None, Some(50.0));
    assert!(!console.step(9_990).climate_polled);
    assert!(console.step(10_000).climate_polled);

    assert_eq!(
        console.hardware().climate_texts(),
        &[
            "Temp: 22.50C / Humid: 41.00%".to_string(),
            "Temp: 0.00C / Humid: 50.00%".to_string(),
        ]
    );
    assert_eq!(console.climate().invalid_reads(), 1);
    assert_eq!(
        console.climate().last_reading(),
        Some(ClimateReading {
            temperature_c: 0.0,
            humidity_pct: 50.0,
        })
    );
}
