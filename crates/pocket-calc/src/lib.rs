//! Pocket Calc - keypad calculator engine
//!
//! A button-and-keyboard calculator: digits build up a numeral on the
//! display, each operator evaluates the one before it, and division by zero
//! locks the display on `Error` until it is cleared.
//!
//! The [`core`] module holds the engine and is free of any UI concern. The
//! [`wasm`] module is the presentation glue (keypad dispatch table, mock DOM
//! and, with the `wasm` feature, browser bindings), and [`driver`] runs the
//! same behavioral checks against every presentation layer.
//!
//! # Example
//!
//! ```rust
//! use pocket_calc::prelude::*;
//!
//! let mut engine = CalculatorEngine::new();
//! for action in [
//!     KeypadAction::Digit(5),
//!     KeypadAction::Operator(Operator::Add),
//!     KeypadAction::Digit(3),
//!     KeypadAction::Operator(Operator::Add),
//!     KeypadAction::Digit(2),
//!     KeypadAction::Equals,
//! ] {
//!     action.apply(&mut engine).unwrap();
//! }
//! assert_eq!(engine.display(), "10");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;

/// WASM module - always available for testing
/// (Mock DOM allows testing without actual browser bindings)
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{CalculatorConfig, ConfigError};
    pub use crate::core::{
        compute, format_display, format_display_with, format_number, CalcError, CalcResult,
        CalculatorEngine, EngineState, Operator,
    };
    pub use crate::driver::{CalculatorDriver, EngineDriver};

    pub use crate::wasm::{DomElement, DomEvent, KeypadAction, MockDom, WasmDriver, WasmKeypad};
}
