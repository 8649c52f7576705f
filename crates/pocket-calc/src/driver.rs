//! Calculator drivers shared by every presentation layer
//!
//! This module implements the core unification principle:
//! **Write the test logic once, run it everywhere.**

use tracing::debug;

use crate::config::CalculatorConfig;
use crate::core::{format_display_with, CalculatorEngine};
use crate::wasm::WasmKeypad;

/// Abstract driver trait for calculator interactions
///
/// Both the headless [`EngineDriver`] and the DOM-backed
/// [`WasmDriver`](crate::wasm::WasmDriver) implement it, so the `verify_*`
/// checks below run against either.
///
/// # Example
///
/// ```rust
/// use pocket_calc::driver::{CalculatorDriver, EngineDriver};
///
/// let mut driver = EngineDriver::new();
/// driver.press_keys(&["1", "2", "*", "3", "Enter"]);
/// assert_eq!(driver.display(), "36");
/// ```
pub trait CalculatorDriver {
    /// Presses a key, named as in `KeyboardEvent.key`
    ///
    /// Returns false if the key is not bound to any action.
    fn press_key(&mut self, key: &str) -> bool;

    /// Gets the formatted display
    fn display(&self) -> String;

    /// Clears the calculator state
    fn clear(&mut self);

    /// Presses several keys in order, returning how many were bound
    fn press_keys(&mut self, keys: &[&str]) -> usize {
        keys.iter().filter(|key| self.press_key(key)).count()
    }
}

/// Driver that feeds keys straight to an engine, without any DOM
#[derive(Debug, Default)]
pub struct EngineDriver {
    engine: CalculatorEngine,
    config: CalculatorConfig,
}

impl EngineDriver {
    /// Creates a driver with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a driver with a custom configuration
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self {
            engine: CalculatorEngine::new(),
            config,
        }
    }

    /// Returns a reference to the engine
    #[must_use]
    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// Returns a mutable reference to the engine
    pub fn engine_mut(&mut self) -> &mut CalculatorEngine {
        &mut self.engine
    }

    /// Returns the active configuration
    #[must_use]
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }
}

impl CalculatorDriver for EngineDriver {
    fn press_key(&mut self, key: &str) -> bool {
        let Some(action) = WasmKeypad::key_to_action(key) else {
            debug!(key, "unbound key");
            return false;
        };
        // Keyboard actions only ever carry digits 0-9.
        action.apply(&mut self.engine).is_ok()
    }

    fn display(&self) -> String {
        format_display_with(self.engine.raw_display(), self.config.group_separator)
    }

    fn clear(&mut self) {
        self.engine.clear();
    }
}

// ===== Shared Behavior Checks =====
// These checks work with ANY CalculatorDriver implementation

/// Verifies digit and decimal entry
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) {
    assert_eq!(driver.display(), "0");

    driver.press_keys(&["0", "0", "7"]);
    assert_eq!(driver.display(), "7");
    driver.clear();

    driver.press_keys(&[".", "5", ".", "2"]);
    assert_eq!(driver.display(), "0.52");
    driver.clear();
}

/// Verifies left-to-right chained evaluation
pub fn verify_chained_operations<D: CalculatorDriver>(driver: &mut D) {
    driver.press_keys(&["5", "+", "3", "+"]);
    assert_eq!(driver.display(), "8");
    driver.press_keys(&["2", "Enter"]);
    assert_eq!(driver.display(), "10");
    driver.clear();

    // No precedence: (2 + 3) * 4
    driver.press_keys(&["2", "+", "3", "*", "4", "="]);
    assert_eq!(driver.display(), "20");
    driver.clear();

    driver.press_keys(&["9", "/", "4", "="]);
    assert_eq!(driver.display(), "2.25");
    driver.clear();
}

/// Verifies the divide-by-zero error state and recovery
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.press_keys(&["7", "/", "0", "="]);
    assert_eq!(driver.display(), "Error");

    driver.press_keys(&["1", ".", "+", "Backspace"]);
    assert_eq!(driver.display(), "Error");

    driver.press_key("Escape");
    assert_eq!(driver.display(), "0");
}

/// Verifies backspace never empties the display
pub fn verify_backspace<D: CalculatorDriver>(driver: &mut D) {
    driver.press_keys(&["1", "2", "3", "Backspace"]);
    assert_eq!(driver.display(), "12");
    driver.press_keys(&["Backspace", "Backspace"]);
    assert_eq!(driver.display(), "0");
    driver.clear();

    driver.press_keys(&["4", "*", "5", "=", "Backspace"]);
    assert_eq!(driver.display(), "0");
    driver.clear();
}

/// Verifies thousands grouping on the display
pub fn verify_formatting<D: CalculatorDriver>(driver: &mut D) {
    driver.press_keys(&["1", "2", "3", "4", "5", "6", "7"]);
    assert_eq!(driver.display(), "1,234,567");
    driver.press_keys(&[".", "8", "9"]);
    assert_eq!(driver.display(), "1,234,567.89");
    driver.clear();
}

/// Runs every shared check
pub fn run_all_checks<D: CalculatorDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_chained_operations(driver);
    verify_division_by_zero(driver);
    verify_backspace(driver);
    verify_formatting(driver);
}
