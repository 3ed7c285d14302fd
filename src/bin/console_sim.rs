// src/bin/console_sim.rs
//
// Симулятор консоли: скриптовые нажатия, ручные часы, текстовый экран.
//
//   console_sim [config.json]

use blackjack_console::api::build_game_view;
use blackjack_console::console::{ButtonId, Console, ScriptedPress, SimHardware};
use blackjack_console::engine::TickResult;
use blackjack_console::infra::{ConsoleConfig, ConsoleRng};
use blackjack_console::time_ctrl::{ManualClock, MonotonicClock};

/// Шаг симулированного цикла.
const LOOP_STEP_MS: u32 = 10;
/// Сколько симулировать после последнего нажатия (дилеру нужно время).
const TAIL_MS: u32 = 10_000;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => match ConsoleConfig::load(&path) {
            Ok(c) => c,
            Err(err) => {
                eprintln!("[SIM] {err}");
                std::process::exit(1);
            }
        },
        None => ConsoleConfig::standard(),
    };

    println!("console_sim: стартуем симуляцию консоли…");

    let hardware = SimHardware::new()
        .with_presses(round_script(&config))
        .with_presence(vec![(3_000, 6_500)])
        .with_climate(Some(22.5), Some(41.0));
    let end_ms = hardware.script_end_ms() + TAIL_MS;

    let rng = ConsoleRng::from_seed(config.rng_seed);
    let mut console = Console::new(&config, rng, hardware);
    let clock = ManualClock::starting_at(0);

    let mut last_frame: Vec<String> = Vec::new();
    while clock.now_ms() < end_ms {
        let now = clock.now_ms();
        console.hardware_mut().advance_to(now);
        let report = console.poll(&clock);

        for action in &report.actions {
            println!("[{now:>6} ms] кнопка: {action}");
        }
        if report.door_moved {
            println!("[{now:>6} ms] дверь: {:?}", console.door().state());
        }
        if let Some(TickResult::RoundOver(outcome)) = report.tick {
            println!("[{now:>6} ms] ===== РАУНД ЗАВЕРШЁН: {outcome} =====");
        }
        if report.climate_polled {
            if let Some(text) = console.hardware().climate_texts().last() {
                println!("[{now:>6} ms] климат: {text}");
            }
        }

        let frame = console.hardware().display().render();
        if frame != last_frame {
            println!("[{now:>6} ms] ┌ экран");
            for line in &frame {
                println!("           │ {line}");
            }
            println!("           └");
            last_frame = frame;
        }

        clock.advance(LOOP_STEP_MS);
    }

    let view = build_game_view(console.engine(), clock.now_ms());
    match serde_json::to_string_pretty(&view) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("[SIM] не удалось сериализовать состояние: {err}"),
    }
    println!("[SIM] Завершение симуляции.");
}

/// Два раунда: reset → hit → hit → stand, затем ещё раз с тремя hit.
fn round_script(config: &ConsoleConfig) -> Vec<ScriptedPress> {
    // Дилеру нужно не больше ~10 шагов, даём запас.
    let dealer_turn = config.timing.dealer_step_ms.saturating_mul(12);

    let first_stand = 2_000;
    let second_round = first_stand + dealer_turn;

    vec![
        ScriptedPress::tap(ButtonId::Yellow, 200),
        ScriptedPress::tap(ButtonId::Red, 600),
        ScriptedPress::tap(ButtonId::Red, 1_200),
        ScriptedPress::tap(ButtonId::White, first_stand),
        ScriptedPress::tap(ButtonId::Yellow, second_round),
        ScriptedPress::tap(ButtonId::Red, second_round + 400),
        ScriptedPress::tap(ButtonId::Red, second_round + 800),
        ScriptedPress::tap(ButtonId::Red, second_round + 1_200),
        ScriptedPress::tap(ButtonId::White, second_round + 1_600),
    ]
}
