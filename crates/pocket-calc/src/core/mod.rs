//! Calculator core: the engine state machine, arithmetic and display formatting
//!
//! Nothing in here knows about buttons, keys or the DOM. Presentation layers
//! hold a [`CalculatorEngine`] and drive it through its five operations.

pub mod engine;
pub mod format;
mod operations;

pub use engine::{CalculatorEngine, EngineState};
pub use format::{format_display, format_display_with, format_number};
pub use operations::{compute, Operator};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types - exhaustive enum ensures all cases handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,
    /// Result is not a finite number
    #[error("Overflow: result exceeds maximum value")]
    Overflow,
    /// Digit entry outside 0-9
    #[error("Invalid digit: {0}")]
    InvalidDigit(u8),
}
