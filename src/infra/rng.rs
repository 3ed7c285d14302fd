use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engine::RandomSource;

/// RNG хоста поверх `rand::thread_rng`.
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn pick_index(&mut self, upper: u8) -> u8 {
        rand::thread_rng().gen_range(0..upper.max(1))
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Позволяет воспроизводить одни и те же раздачи при одинаковом seed.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn pick_index(&mut self, upper: u8) -> u8 {
        self.inner.gen_range(0..upper.max(1))
    }
}

/// Скриптовый RNG: отдаёт заранее заданные числа по кругу.
///
/// Значения берутся по модулю `upper`. Пустой скрипт всегда даёт 0.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    script: Vec<u8>,
    pos: usize,
}

impl ScriptedRng {
    pub fn new(script: Vec<u8>) -> Self {
        Self { script, pos: 0 }
    }
}

impl RandomSource for ScriptedRng {
    fn pick_index(&mut self, upper: u8) -> u8 {
        if self.script.is_empty() {
            return 0;
        }
        let value = self.script[self.pos % self.script.len()];
        self.pos += 1;
        value % upper.max(1)
    }
}

/// RNG консоли: системный или с фиксированным seed из конфига.
#[derive(Clone, Debug)]
pub enum ConsoleRng {
    System(SystemRng),
    Seeded(DeterministicRng),
}

impl ConsoleRng {
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => ConsoleRng::Seeded(DeterministicRng::from_seed(s)),
            None => ConsoleRng::System(SystemRng),
        }
    }
}

impl RandomSource for ConsoleRng {
    fn pick_index(&mut self, upper: u8) -> u8 {
        match self {
            ConsoleRng::System(r) => r.pick_index(upper),
            ConsoleRng::Seeded(r) => r.pick_index(upper),
        }
    }
}
