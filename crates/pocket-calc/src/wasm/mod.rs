//! WASM Frontend for Calculator
//!
//! Presentation glue for the browser: the keypad dispatch table, a mock DOM
//! for exercising it natively, and the wasm-bindgen entry point.

#[cfg(feature = "wasm")]
mod browser;
mod dom;
mod driver;
mod keypad;

#[cfg(feature = "wasm")]
pub use browser::BrowserCalculator;
pub use dom::{DomElement, DomEvent, MockDom, DISPLAY_ID};
pub use driver::{WasmDriver, ERROR_CLASS, PRESS_CLASS};
pub use keypad::{KeypadAction, KeypadButtonDef, MockDomKeypadExt, WasmKeypad};
