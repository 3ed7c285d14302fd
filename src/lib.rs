//! Контроллер блэкджек-консоли.
//!
//! Ядро - игровой движок (`engine::GameEngine`) и неблокирующий планировщик
//! хода дилера (`time_ctrl::DealerTimer`). Вокруг него:
//! - `domain` - карты, колода, руки, состояние раунда;
//! - `eval` - подсчёт очков руки и определение исхода;
//! - `console` - граница с железом (кнопки, RGB, дисплеи, датчики, дверь)
//!   и главный цикл `Console`;
//! - `infra` - RNG и конфиг;
//! - `api` - DTO для отображения состояния наружу.

pub mod api;
pub mod console;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;
pub mod time_ctrl;
