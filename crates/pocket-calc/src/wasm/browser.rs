//! Browser WASM bindings for Calculator
//!
//! This module provides the actual browser integration using wasm-bindgen.
//! JavaScript forwards `click` and `keydown` events here, renders
//! [`BrowserCalculator::display`] after each one, and owns the timers for
//! press animation and the error flash.

use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::config::CalculatorConfig;
use crate::core::{format_display_with, CalculatorEngine};
use crate::wasm::keypad::{KeypadAction, WasmKeypad};

/// Browser Calculator - the main WASM entry point
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    engine: CalculatorEngine,
    keypad: WasmKeypad,
    config: CalculatorConfig,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Create a new browser calculator
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        Self::with_config(CalculatorConfig::default())
    }

    /// Create a calculator from a JSON configuration
    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: &str) -> Result<BrowserCalculator, JsValue> {
        let config =
            CalculatorConfig::from_json_str(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::with_config(config))
    }

    /// The formatted display
    #[wasm_bindgen(getter)]
    pub fn display(&self) -> String {
        format_display_with(self.engine.raw_display(), self.config.group_separator)
    }

    /// Whether the display shows an error
    #[wasm_bindgen(getter, js_name = isError)]
    pub fn is_error(&self) -> bool {
        self.engine.is_error()
    }

    /// How long the press animation should run, in milliseconds
    #[wasm_bindgen(getter, js_name = pressFeedbackMs)]
    pub fn press_feedback_ms(&self) -> u32 {
        u32::try_from(self.config.press_feedback_ms).unwrap_or(u32::MAX)
    }

    /// Delay before JavaScript should call `clear` while in error
    #[wasm_bindgen(getter, js_name = errorAutoClearMs)]
    pub fn error_auto_clear_ms(&self) -> Option<u32> {
        self.config
            .error_auto_clear_ms
            .map(|ms| u32::try_from(ms).unwrap_or(u32::MAX))
    }

    /// Handle a keypad button click by element ID
    ///
    /// Returns false when the element is not a keypad button.
    #[wasm_bindgen(js_name = handleButton)]
    pub fn handle_button(&mut self, button_id: &str) -> bool {
        match self.keypad.handle_click(button_id) {
            Some(action) => self.handle_action(action),
            None => false,
        }
    }

    /// Handle a keyboard key press
    ///
    /// Returns true when the key was consumed and JavaScript should call
    /// `preventDefault`.
    #[wasm_bindgen(js_name = handleKey)]
    pub fn handle_key(&mut self, key: &str) -> bool {
        match WasmKeypad::key_to_action(key) {
            Some(action) => self.handle_action(action),
            None => false,
        }
    }

    /// Element id of the button bound to a key, for press animation
    #[wasm_bindgen(js_name = buttonForKey)]
    pub fn button_for_key(&self, key: &str) -> Option<String> {
        let action = WasmKeypad::key_to_action(key)?;
        self.keypad
            .find_button_by_action(action)
            .map(|btn| btn.id.clone())
    }

    /// Reset the calculator
    pub fn clear(&mut self) {
        self.engine.clear();
    }
}

impl BrowserCalculator {
    /// Create a calculator with an already validated configuration
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self {
            engine: CalculatorEngine::new(),
            keypad: WasmKeypad::new(),
            config,
        }
    }

    fn handle_action(&mut self, action: KeypadAction) -> bool {
        if let Err(e) = action.apply(&mut self.engine) {
            console::warn_1(&JsValue::from_str(&e.to_string()));
        }
        true
    }
}

impl Default for BrowserCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialize the calculator in the browser
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"Calculator WASM initialized".into());
}
