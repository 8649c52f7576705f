//! WASM Driver - presentation layer over the mock DOM
//!
//! Wires clicks and key presses through the keypad dispatch table, renders
//! the display after every call and plays the transient feedback: the
//! `animate-press` class on pressed buttons and the timed error flash.

use tracing::{debug, warn};

use super::dom::{DomEvent, MockDom, DISPLAY_ID};
use super::keypad::{KeypadAction, WasmKeypad};
use crate::config::CalculatorConfig;
use crate::core::{format_display_with, CalculatorEngine};
use crate::driver::CalculatorDriver;

/// Class applied to a button while its press animation runs
pub const PRESS_CLASS: &str = "animate-press";
/// Class applied to the display while it shows an error
pub const ERROR_CLASS: &str = "error";

#[derive(Debug, Clone, PartialEq, Eq)]
struct PressFeedback {
    element_id: String,
    remaining_ms: u64,
}

/// WASM Driver wrapping one engine and the mock DOM it renders into
#[derive(Debug)]
pub struct WasmDriver {
    engine: CalculatorEngine,
    keypad: WasmKeypad,
    dom: MockDom,
    config: CalculatorConfig,
    pressed: Vec<PressFeedback>,
    error_elapsed_ms: Option<u64>,
}

impl Default for WasmDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmDriver {
    /// Creates a driver with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    /// Creates a driver with a custom configuration
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        let keypad = WasmKeypad::new();
        let dom = MockDom::calculator(&keypad);
        Self {
            engine: CalculatorEngine::new(),
            keypad,
            dom,
            config,
            pressed: Vec::new(),
            error_elapsed_ms: None,
        }
    }

    /// Returns a reference to the engine
    #[must_use]
    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// Returns a reference to the DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Returns the keypad layout
    #[must_use]
    pub fn keypad(&self) -> &WasmKeypad {
        &self.keypad
    }

    /// Returns the active configuration
    #[must_use]
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Simulates clicking an element
    ///
    /// Returns false if the element is not a keypad button.
    pub fn click(&mut self, element_id: &str) -> bool {
        self.dom.dispatch_event(DomEvent::click(element_id));
        match self.keypad.handle_click(element_id) {
            Some(action) => {
                self.run(action);
                true
            }
            None => false,
        }
    }

    /// Simulates a key down on the document
    ///
    /// Returns false if the key is not bound, in which case a browser would
    /// let the default action through.
    pub fn key_down(&mut self, key: &str) -> bool {
        self.dom.dispatch_event(DomEvent::key_down(key));
        match WasmKeypad::key_to_action(key) {
            Some(action) => {
                self.run(action);
                true
            }
            None => false,
        }
    }

    /// Advances presentation time by `ms` milliseconds
    ///
    /// Expires press animations and, when configured, clears the engine once
    /// the error has been shown long enough.
    pub fn advance(&mut self, ms: u64) {
        let dom = &mut self.dom;
        self.pressed.retain_mut(|press| {
            press.remaining_ms = press.remaining_ms.saturating_sub(ms);
            if press.remaining_ms == 0 {
                dom.remove_class(&press.element_id, PRESS_CLASS);
                false
            } else {
                true
            }
        });

        if let Some(elapsed) = self.error_elapsed_ms {
            let elapsed = elapsed.saturating_add(ms);
            self.error_elapsed_ms = Some(elapsed);
            if self
                .config
                .error_auto_clear_ms
                .is_some_and(|limit| elapsed >= limit)
            {
                debug!(elapsed, "error auto-clear");
                self.engine.clear();
                self.render();
            }
        }
    }

    /// Ids of buttons currently showing the press animation
    #[must_use]
    pub fn pressed_buttons(&self) -> Vec<&str> {
        self.pressed
            .iter()
            .map(|p| p.element_id.as_str())
            .collect()
    }

    /// Gets the display element's text
    #[must_use]
    pub fn display_element_text(&self) -> Option<&str> {
        self.dom.get_element_text(DISPLAY_ID)
    }

    fn run(&mut self, action: KeypadAction) {
        if let Err(err) = action.apply(&mut self.engine) {
            warn!(?action, error = %err, "action rejected");
        }
        if let Some(button) = self.keypad.find_button_by_action(action) {
            let id = button.id.clone();
            self.flash(id);
        }
        self.render();
    }

    fn flash(&mut self, element_id: String) {
        if self.config.press_feedback_ms == 0 {
            return;
        }
        self.dom.add_class(&element_id, PRESS_CLASS);
        let remaining_ms = self.config.press_feedback_ms;
        match self.pressed.iter_mut().find(|p| p.element_id == element_id) {
            Some(press) => press.remaining_ms = remaining_ms,
            None => self.pressed.push(PressFeedback {
                element_id,
                remaining_ms,
            }),
        }
    }

    fn render(&mut self) {
        let text = format_display_with(self.engine.raw_display(), self.config.group_separator);
        self.dom.set_element_text(DISPLAY_ID, &text);

        if self.engine.is_error() {
            self.dom.add_class(DISPLAY_ID, ERROR_CLASS);
            self.error_elapsed_ms.get_or_insert(0);
        } else {
            self.dom.remove_class(DISPLAY_ID, ERROR_CLASS);
            self.error_elapsed_ms = None;
        }
    }
}

impl CalculatorDriver for WasmDriver {
    fn press_key(&mut self, key: &str) -> bool {
        self.key_down(key)
    }

    fn display(&self) -> String {
        self.display_element_text().unwrap_or_default().to_string()
    }

    fn clear(&mut self) {
        self.engine.clear();
        self.render();
    }
}
