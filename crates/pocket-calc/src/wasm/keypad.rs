//! Keypad layout and input dispatch
//!
//! Buttons and keyboard keys both resolve to a [`KeypadAction`], and
//! [`KeypadAction::apply`] is the one place where actions reach the engine.

use super::dom::{DomElement, MockDom};
use crate::core::{CalcResult, CalculatorEngine, Operator};

/// Actions that keypad buttons and keys can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeypadAction {
    /// Enter a digit (0-9)
    Digit(u8),
    /// Enter a decimal point
    Decimal,
    /// Apply an arithmetic operator
    Operator(Operator),
    /// Evaluate the pending operation
    Equals,
    /// Reset the calculator
    Clear,
    /// Remove the last character
    Backspace,
}

impl KeypadAction {
    /// Returns the keyboard character that triggers this action, if any
    #[must_use]
    pub fn to_char(&self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(*d), 10),
            Self::Decimal => Some('.'),
            Self::Operator(op) => Some(op.symbol()),
            Self::Equals => Some('='),
            Self::Clear | Self::Backspace => None,
        }
    }

    /// Returns the button label for this action
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.label().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::Backspace => "⌫".to_string(),
        }
    }

    /// Returns the DOM element id of the button for this action
    #[must_use]
    pub fn element_id(&self) -> String {
        match self {
            Self::Digit(d) => format!("btn-{d}"),
            Self::Decimal => "btn-decimal".to_string(),
            Self::Operator(op) => format!("btn-{}", op.name()),
            Self::Equals => "btn-equals".to_string(),
            Self::Clear => "btn-clear".to_string(),
            Self::Backspace => "btn-backspace".to_string(),
        }
    }

    /// CSS class describing the button's role
    #[must_use]
    pub const fn button_class(&self) -> &'static str {
        match self {
            Self::Digit(_) => "number-button",
            Self::Decimal => "decimal-button",
            Self::Operator(_) => "operation-button",
            Self::Equals => "equal-button",
            Self::Clear => "clear-button",
            Self::Backspace => "backspace-button",
        }
    }

    /// Runs this action against the engine
    ///
    /// `Equals` only evaluates when both a pending operator and a first
    /// operand exist; pressing it on a bare entry does nothing.
    pub fn apply(&self, engine: &mut CalculatorEngine) -> CalcResult<()> {
        match *self {
            Self::Digit(d) => engine.input_digit(d)?,
            Self::Decimal => engine.input_decimal(),
            Self::Operator(op) => engine.apply_operator(op),
            Self::Equals => {
                if engine.pending_operator().is_some() && engine.first_operand().is_some() {
                    engine.apply_operator(Operator::Equals);
                }
            }
            Self::Clear => engine.clear(),
            Self::Backspace => engine.backspace(),
        }
        Ok(())
    }
}

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButtonDef {
    /// The action this button performs
    pub action: KeypadAction,
    /// The DOM element ID for this button
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButtonDef {
    /// Creates a new button definition
    #[must_use]
    pub fn new(action: KeypadAction, row: usize, col: usize) -> Self {
        Self {
            id: action.element_id(),
            action,
            row,
            col,
        }
    }
}

/// Keypad layout definition
///
/// ```text
/// [ C ] [ ⌫ ] [ ÷ ] [ × ]
/// [ 7 ] [ 8 ] [ 9 ] [ − ]
/// [ 4 ] [ 5 ] [ 6 ] [ + ]
/// [ 1 ] [ 2 ] [ 3 ] [ = ]
/// [ 0 ] [ . ]
/// ```
#[derive(Debug, Clone)]
pub struct WasmKeypad {
    buttons: Vec<KeypadButtonDef>,
    cols: usize,
    rows: usize,
}

impl Default for WasmKeypad {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmKeypad {
    /// Creates the standard calculator keypad
    #[must_use]
    pub fn new() -> Self {
        use KeypadAction::{Backspace, Clear, Decimal, Digit, Equals};

        let op = KeypadAction::Operator;
        let buttons = vec![
            KeypadButtonDef::new(Clear, 0, 0),
            KeypadButtonDef::new(Backspace, 0, 1),
            KeypadButtonDef::new(op(Operator::Divide), 0, 2),
            KeypadButtonDef::new(op(Operator::Multiply), 0, 3),
            KeypadButtonDef::new(Digit(7), 1, 0),
            KeypadButtonDef::new(Digit(8), 1, 1),
            KeypadButtonDef::new(Digit(9), 1, 2),
            KeypadButtonDef::new(op(Operator::Subtract), 1, 3),
            KeypadButtonDef::new(Digit(4), 2, 0),
            KeypadButtonDef::new(Digit(5), 2, 1),
            KeypadButtonDef::new(Digit(6), 2, 2),
            KeypadButtonDef::new(op(Operator::Add), 2, 3),
            KeypadButtonDef::new(Digit(1), 3, 0),
            KeypadButtonDef::new(Digit(2), 3, 1),
            KeypadButtonDef::new(Digit(3), 3, 2),
            KeypadButtonDef::new(Equals, 3, 3),
            KeypadButtonDef::new(Digit(0), 4, 0),
            KeypadButtonDef::new(Decimal, 4, 1),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButtonDef] {
        &self.buttons
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.row == row && b.col == col)
    }

    /// Finds a button by element ID
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds the button for an action
    #[must_use]
    pub fn find_button_by_action(&self, action: KeypadAction) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.action == action)
    }

    /// Creates DOM elements for all keypad buttons
    #[must_use]
    pub fn create_dom_elements(&self) -> Vec<DomElement> {
        self.buttons
            .iter()
            .map(|btn| {
                DomElement::new("button")
                    .with_id(&btn.id)
                    .with_text(&btn.action.label())
                    .with_class("button")
                    .with_class(btn.action.button_class())
                    .with_attr("data-row", &btn.row.to_string())
                    .with_attr("data-col", &btn.col.to_string())
            })
            .collect()
    }

    /// Creates a keypad container element with all buttons
    #[must_use]
    pub fn create_keypad_element(&self) -> DomElement {
        self.create_dom_elements().into_iter().fold(
            DomElement::new("div").with_id("keypad").with_class("keypad"),
            DomElement::with_child,
        )
    }

    /// Resolves a button click to its action
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<KeypadAction> {
        self.find_button_by_id(element_id).map(|btn| btn.action)
    }

    /// Maps a keyboard key (as in `KeyboardEvent.key`) to an action
    #[must_use]
    pub fn key_to_action(key: &str) -> Option<KeypadAction> {
        match key {
            "Enter" | "=" => Some(KeypadAction::Equals),
            "Escape" | "c" | "C" => Some(KeypadAction::Clear),
            "Backspace" => Some(KeypadAction::Backspace),
            "." => Some(KeypadAction::Decimal),
            _ => {
                let mut chars = key.chars();
                let c = chars.next()?;
                if chars.next().is_some() {
                    return None;
                }
                if let Some(d) = c.to_digit(10) {
                    return Some(KeypadAction::Digit(d as u8));
                }
                match c {
                    '+' | '-' | '*' | '/' => Operator::from_symbol(c).map(KeypadAction::Operator),
                    _ => None,
                }
            }
        }
    }
}

/// Extension trait for MockDom to add the keypad
pub trait MockDomKeypadExt {
    /// Adds the keypad container and registers every button
    fn add_keypad(&mut self, keypad: &WasmKeypad);
}

impl MockDomKeypadExt for MockDom {
    fn add_keypad(&mut self, keypad: &WasmKeypad) {
        self.register_element(keypad.create_keypad_element());
        for btn_elem in keypad.create_dom_elements() {
            self.register_element(btn_elem);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== KeypadAction tests =====

    #[test]
    fn test_keypad_action_digit_to_char() {
        for d in 0..=9 {
            let action = KeypadAction::Digit(d);
            assert_eq!(action.to_char(), char::from_digit(u32::from(d), 10));
        }
    }

    #[test]
    fn test_keypad_action_operator_to_char() {
        for op in Operator::ARITHMETIC {
            assert_eq!(KeypadAction::Operator(op).to_char(), Some(op.symbol()));
        }
    }

    #[test]
    fn test_keypad_action_without_char() {
        assert_eq!(KeypadAction::Clear.to_char(), None);
        assert_eq!(KeypadAction::Backspace.to_char(), None);
    }

    #[test]
    fn test_keypad_action_labels() {
        assert_eq!(KeypadAction::Digit(7).label(), "7");
        assert_eq!(KeypadAction::Operator(Operator::Multiply).label(), "×");
        assert_eq!(KeypadAction::Clear.label(), "C");
        assert_eq!(KeypadAction::Backspace.label(), "⌫");
    }

    #[test]
    fn test_keypad_action_element_ids() {
        assert_eq!(KeypadAction::Digit(3).element_id(), "btn-3");
        assert_eq!(
            KeypadAction::Operator(Operator::Divide).element_id(),
            "btn-divide"
        );
        assert_eq!(KeypadAction::Decimal.element_id(), "btn-decimal");
        assert_eq!(KeypadAction::Equals.element_id(), "btn-equals");
    }

    // ===== Dispatch tests =====

    #[test]
    fn test_apply_digits_and_operators() {
        let mut engine = CalculatorEngine::new();
        for action in [
            KeypadAction::Digit(5),
            KeypadAction::Operator(Operator::Add),
            KeypadAction::Digit(3),
            KeypadAction::Operator(Operator::Add),
            KeypadAction::Digit(2),
            KeypadAction::Equals,
        ] {
            action.apply(&mut engine).unwrap();
        }
        assert_eq!(engine.display(), "10");
    }

    #[test]
    fn test_apply_equals_without_pending_operator_is_ignored() {
        let mut engine = CalculatorEngine::new();
        KeypadAction::Digit(4).apply(&mut engine).unwrap();
        KeypadAction::Equals.apply(&mut engine).unwrap();
        assert_eq!(engine.pending_operator(), None);
        assert!(!engine.is_awaiting_second_operand());
        KeypadAction::Digit(2).apply(&mut engine).unwrap();
        assert_eq!(engine.raw_display(), "42");
    }

    #[test]
    fn test_apply_decimal_backspace_clear() {
        let mut engine = CalculatorEngine::new();
        KeypadAction::Digit(1).apply(&mut engine).unwrap();
        KeypadAction::Decimal.apply(&mut engine).unwrap();
        KeypadAction::Digit(5).apply(&mut engine).unwrap();
        assert_eq!(engine.raw_display(), "1.5");
        KeypadAction::Backspace.apply(&mut engine).unwrap();
        assert_eq!(engine.raw_display(), "1.");
        KeypadAction::Clear.apply(&mut engine).unwrap();
        assert_eq!(engine, CalculatorEngine::new());
    }

    #[test]
    fn test_apply_invalid_digit_errors() {
        let mut engine = CalculatorEngine::new();
        assert!(KeypadAction::Digit(11).apply(&mut engine).is_err());
    }

    // ===== WasmKeypad tests =====

    #[test]
    fn test_keypad_layout() {
        let keypad = WasmKeypad::new();
        assert_eq!(keypad.button_count(), 18);
        assert_eq!(keypad.dimensions(), (5, 4));
    }

    #[test]
    fn test_keypad_get_button_at() {
        let keypad = WasmKeypad::new();
        assert_eq!(
            keypad.get_button_at(0, 0).unwrap().action,
            KeypadAction::Clear
        );
        assert_eq!(
            keypad.get_button_at(1, 0).unwrap().action,
            KeypadAction::Digit(7)
        );
        assert_eq!(
            keypad.get_button_at(3, 3).unwrap().action,
            KeypadAction::Equals
        );
        assert!(keypad.get_button_at(4, 2).is_none());
        assert!(keypad.get_button_at(5, 0).is_none());
    }

    #[test]
    fn test_keypad_find_button_by_id() {
        let keypad = WasmKeypad::new();
        let btn = keypad.find_button_by_id("btn-multiply").unwrap();
        assert_eq!(btn.action, KeypadAction::Operator(Operator::Multiply));
        assert!(keypad.find_button_by_id("btn-nope").is_none());
    }

    #[test]
    fn test_keypad_handle_click() {
        let keypad = WasmKeypad::new();
        assert_eq!(keypad.handle_click("btn-9"), Some(KeypadAction::Digit(9)));
        assert_eq!(keypad.handle_click("display"), None);
    }

    #[test]
    fn test_keypad_dom_elements() {
        let keypad = WasmKeypad::new();
        let elements = keypad.create_dom_elements();
        assert_eq!(elements.len(), 18);
        let seven = elements.iter().find(|e| e.id == "btn-7").unwrap();
        assert_eq!(seven.text_content, "7");
        assert!(seven.has_class("number-button"));
        assert_eq!(seven.get_attr("data-row"), Some("1"));
    }

    #[test]
    fn test_keypad_container_element() {
        let container = WasmKeypad::new().create_keypad_element();
        assert_eq!(container.id, "keypad");
        assert_eq!(container.children.len(), 18);
    }

    // ===== Keyboard mapping tests =====

    #[test]
    fn test_key_to_action_digits() {
        for d in 0..=9u8 {
            let key = d.to_string();
            assert_eq!(
                WasmKeypad::key_to_action(&key),
                Some(KeypadAction::Digit(d))
            );
        }
    }

    #[test]
    fn test_key_to_action_operators() {
        assert_eq!(
            WasmKeypad::key_to_action("+"),
            Some(KeypadAction::Operator(Operator::Add))
        );
        assert_eq!(
            WasmKeypad::key_to_action("-"),
            Some(KeypadAction::Operator(Operator::Subtract))
        );
        assert_eq!(
            WasmKeypad::key_to_action("*"),
            Some(KeypadAction::Operator(Operator::Multiply))
        );
        assert_eq!(
            WasmKeypad::key_to_action("/"),
            Some(KeypadAction::Operator(Operator::Divide))
        );
    }

    #[test]
    fn test_key_to_action_control_keys() {
        assert_eq!(
            WasmKeypad::key_to_action("Enter"),
            Some(KeypadAction::Equals)
        );
        assert_eq!(WasmKeypad::key_to_action("="), Some(KeypadAction::Equals));
        assert_eq!(
            WasmKeypad::key_to_action("Escape"),
            Some(KeypadAction::Clear)
        );
        assert_eq!(WasmKeypad::key_to_action("c"), Some(KeypadAction::Clear));
        assert_eq!(WasmKeypad::key_to_action("C"), Some(KeypadAction::Clear));
        assert_eq!(
            WasmKeypad::key_to_action("Backspace"),
            Some(KeypadAction::Backspace)
        );
        assert_eq!(WasmKeypad::key_to_action("."), Some(KeypadAction::Decimal));
    }

    #[test]
    fn test_key_to_action_unknown() {
        assert_eq!(WasmKeypad::key_to_action("x"), None);
        assert_eq!(WasmKeypad::key_to_action("%"), None);
        assert_eq!(WasmKeypad::key_to_action("12"), None);
        assert_eq!(WasmKeypad::key_to_action("Tab"), None);
        assert_eq!(WasmKeypad::key_to_action(""), None);
        assert_eq!(WasmKeypad::key_to_action("×"), None);
    }

    // ===== MockDom extension =====

    #[test]
    fn test_add_keypad_registers_buttons() {
        let mut dom = MockDom::new();
        dom.add_keypad(&WasmKeypad::new());
        assert!(dom.get_element("keypad").is_some());
        assert!(dom.get_element("btn-0").is_some());
        assert!(dom.get_element("btn-backspace").is_some());
    }
}
