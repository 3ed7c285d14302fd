//! Тесты тайминга: таймер дилера, периодический гейт, часы с переполнением.

use blackjack_console::console::TextTableDisplay;
use blackjack_console::domain::{Outcome, RoundState};
use blackjack_console::engine::{DrawScope, EngineConfig, GameEngine, TickResult};
use blackjack_console::infra::ScriptedRng;
use blackjack_console::time_ctrl::{
    elapsed_ms, interval_elapsed, DealerTimer, ManualClock, MonotonicClock, PeriodicTimer,
    StepState, SystemClock, TimeProfile, TimingRules,
};

/// Игрок T♠ 8♠ = 18; дилер 6♥, затем T♥ (16) и 2♥ (18).
const DEALER_THREE_STEPS: [u8; 5] = [9, 18, 7, 22, 14];

/// Раздать две карты игроку и встать в момент `stand_at`.
fn engine_after_stand(
    config: EngineConfig,
    stand_at: u32,
    display: &mut TextTableDisplay,
) -> GameEngine<ScriptedRng> {
    let mut engine = GameEngine::new(ScriptedRng::new(DEALER_THREE_STEPS.to_vec()), config);
    engine.hit(stand_at.wrapping_sub(20), display).unwrap();
    engine.hit(stand_at.wrapping_sub(10), display).unwrap();
    engine.stand(stand_at, display).unwrap();
    engine
}

/// Таймер дилера срабатывает ровно через шаг
#[test]
fn dealer_timer_poll_reports_remaining_time() {
    let mut timer = DealerTimer::start(100, 700);

    assert_eq!(timer.poll(100), StepState::Waiting { remaining_ms: 700 });
    assert_eq!(timer.poll(799), StepState::Waiting { remaining_ms: 1 });
    assert_eq!(timer.poll(800), StepState::Due);
    assert_eq!(timer.poll(5_000), StepState::Due);

    timer.mark_step(800);
    assert_eq!(timer.poll(1_000), StepState::Waiting { remaining_ms: 500 });
}

/// Переполнение u32 не ломает интервалы
#[test]
fn dealer_timer_survives_wraparound() {
    let timer = DealerTimer::start(u32::MAX - 100, 700);

    assert_eq!(timer.poll(500), StepState::Waiting { remaining_ms: 99 });
    assert_eq!(timer.poll(599), StepState::Due);

    assert_eq!(elapsed_ms(10, u32::MAX - 9), 20);
    assert!(interval_elapsed(5, u32::MAX, 6));
    assert!(!interval_elapsed(4, u32::MAX, 6));
}

/// Карты дилера никогда не чаще 700 мс
#[test]
fn dealer_draws_follow_fixed_cadence() {
    let mut display = TextTableDisplay::new();
    let mut engine = engine_after_stand(EngineConfig::default(), 1_000, &mut display);

    let mut now = 1_000;
    while engine.state() == RoundState::DealerActing && now < 10_000 {
        now += 10;
        engine.tick(now, &mut display);
    }

    assert_eq!(engine.outcome(), Some(Outcome::Tie));
    // Первая карта дилера пришла с первым hit, остальные по таймеру.
    let times = engine.history().dealer_draw_times();
    assert_eq!(times, vec![980, 1_700, 2_400]);
    assert_eq!(now, 3_100);
}

/// Тики до истечения интервала ничего не меняют
#[test]
fn early_ticks_change_nothing() {
    let mut display = TextTableDisplay::new();
    let mut engine = engine_after_stand(EngineConfig::default(), 0, &mut display);

    let dealer = engine.dealer_hand().clone();
    let events = engine.history().events.len();
    let commands = display.commands().len();

    for now in 1..700 {
        assert!(matches!(
            engine.tick(now, &mut display),
            TickResult::Waiting { .. }
        ));
    }

    assert_eq!(engine.dealer_hand(), &dealer);
    assert_eq!(engine.history().events.len(), events);
    assert_eq!(display.commands().len(), commands);
    assert_eq!(engine.state(), RoundState::DealerActing);
}

/// Ход дилера через переполнение часов
#[test]
fn dealer_turn_across_clock_wrap() {
    let stand_at = u32::MAX - 300;
    let mut display = TextTableDisplay::new();
    let mut engine = engine_after_stand(EngineConfig::default(), stand_at, &mut display);

    let clock = ManualClock::starting_at(stand_at);
    for _ in 0..300 {
        clock.advance(10);
        engine.tick(clock.now_ms(), &mut display);
    }

    assert_eq!(engine.state(), RoundState::RoundOver);
    assert_eq!(engine.outcome(), Some(Outcome::Tie));

    let times = engine.history().dealer_draw_times();
    assert_eq!(times.len(), 3);
    assert_eq!(times[1], stand_at.wrapping_add(700));
    assert_eq!(times[2], stand_at.wrapping_add(1_400));
    assert_eq!(elapsed_ms(times[2], times[1]), 700);
}

/// Шаг дилера берётся из конфига
#[test]
fn dealer_step_follows_timing_profile() {
    let config = EngineConfig::new(&TimingRules::fast(), DrawScope::PerHand);
    let mut display = TextTableDisplay::new();
    let mut engine = engine_after_stand(config, 1_000, &mut display);

    assert!(matches!(
        engine.tick(1_099, &mut display),
        TickResult::Waiting { remaining_ms: 1 }
    ));
    assert!(matches!(
        engine.tick(1_100, &mut display),
        TickResult::DealerDrew(_)
    ));
    assert!(matches!(
        engine.tick(1_200, &mut display),
        TickResult::DealerDrew(_)
    ));
    assert_eq!(
        engine.tick(1_300, &mut display),
        TickResult::RoundOver(Outcome::Tie)
    );
}

/// Периодический гейт датчиков
#[test]
fn periodic_timer_fires_once_per_period() {
    let mut timer = PeriodicTimer::new(5_000);

    assert!(!timer.fire_if_due(0));
    assert!(!timer.fire_if_due(4_999));
    assert!(timer.fire_if_due(5_000));
    assert!(!timer.fire_if_due(5_001));
    assert!(!timer.fire_if_due(9_999));
    assert!(timer.fire_if_due(10_000));
    assert_eq!(timer.last_fired_ms, 10_000);
}

/// Профили тайминга
#[test]
fn timing_profiles() {
    let standard = TimingRules::standard();
    assert_eq!(standard.dealer_step_ms, 700);
    assert_eq!(standard.climate_poll_ms, 5_000);
    assert_eq!(standard.debounce_ms, 50);
    assert_eq!(TimingRules::default(), standard);

    assert!(TimingRules::fast().dealer_step_ms < standard.dealer_step_ms);
    assert_eq!(TimingRules::from_profile(TimeProfile::Fast), TimingRules::fast());
    assert_eq!(TimingRules::from_profile(TimeProfile::Standard), standard);
}

/// Часы хоста стартуют с нуля и не идут назад
#[test]
fn system_clock_is_monotonic() {
    let clock = SystemClock::new();
    let first = clock.now_ms();
    let second = clock.now_ms();

    assert!(first < 1_000);
    assert!(elapsed_ms(second, first) < 1_000);

    let manual = ManualClock::starting_at(u32::MAX);
    manual.advance(1);
    assert_eq!(manual.now_ms(), 0);
    manual.set(42);
    assert_eq!((&manual).now_ms(), 42);
}
