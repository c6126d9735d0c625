pub mod domain;
pub mod shared;

pub use shared::error::{EngineError, EngineResult, ValidationErrors};
