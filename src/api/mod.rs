//! Представление состояния игры наружу.
//!
//! - DTO (dto.rs) - сериализуемые структуры для лога/симулятора;
//! - запросы (queries.rs) - сборка DTO из движка, только чтение.

pub mod dto;
pub mod queries;

pub use dto::*;
pub use queries::*;
