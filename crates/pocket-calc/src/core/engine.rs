//! Calculator engine state machine
//!
//! ```text
//!            digit / decimal                    operator
//!   Ready ───────────────────▶ Ready   Ready ───────────▶ AwaitingSecondOperand
//!   AwaitingSecondOperand ─── digit / decimal ──▶ Ready
//!   any non-error ─── operator hits ÷0 / overflow ──▶ Error
//!   any ─── clear ──▶ Ready
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::format::{format_display, format_number, ERROR_DISPLAY};
use super::operations::{compute, Operator};
use super::{CalcError, CalcResult};

/// Observable state of the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    /// Normal entry
    Ready,
    /// An operator was just chosen; the next digit starts a new numeral
    AwaitingSecondOperand,
    /// Division by zero or overflow; only `clear` leaves this state
    Error,
}

/// Calculator engine owning all numeric and operator state
///
/// # Example
///
/// ```rust
/// use pocket_calc::core::{CalculatorEngine, Operator};
///
/// let mut engine = CalculatorEngine::new();
/// engine.input_digit(5).unwrap();
/// engine.apply_operator(Operator::Add);
/// engine.input_digit(3).unwrap();
/// engine.apply_operator(Operator::Equals);
/// assert_eq!(engine.display(), "8");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorEngine {
    display_value: String,
    first_operand: Option<f64>,
    operator: Option<Operator>,
    awaiting_second_operand: bool,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    /// Creates an engine in its zeroed state
    #[must_use]
    pub fn new() -> Self {
        Self {
            display_value: "0".to_string(),
            first_operand: None,
            operator: None,
            awaiting_second_operand: false,
        }
    }

    /// Formatted display, with thousands separators
    #[must_use]
    pub fn display(&self) -> String {
        format_display(&self.display_value)
    }

    /// Raw display value, exactly as entered or computed
    #[must_use]
    pub fn raw_display(&self) -> &str {
        &self.display_value
    }

    /// Operand captured before the pending operator
    #[must_use]
    pub fn first_operand(&self) -> Option<f64> {
        self.first_operand
    }

    /// Operator waiting for its second operand
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.operator
    }

    /// Whether the next digit starts a fresh numeral
    #[must_use]
    pub fn is_awaiting_second_operand(&self) -> bool {
        self.awaiting_second_operand
    }

    /// Whether the engine is showing the error sentinel
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.display_value == ERROR_DISPLAY
    }

    /// Current state machine state
    #[must_use]
    pub fn state(&self) -> EngineState {
        if self.is_error() {
            EngineState::Error
        } else if self.awaiting_second_operand {
            EngineState::AwaitingSecondOperand
        } else {
            EngineState::Ready
        }
    }

    /// Enters a single digit (0-9)
    ///
    /// A lone `"0"` is replaced rather than prefixed. Ignored in the error
    /// state.
    pub fn input_digit(&mut self, digit: u8) -> CalcResult<()> {
        if digit > 9 {
            return Err(CalcError::InvalidDigit(digit));
        }
        if self.is_error() {
            debug!(digit, "digit ignored in error state");
            return Ok(());
        }

        let c = char::from(b'0' + digit);
        if self.awaiting_second_operand {
            self.display_value = c.to_string();
            self.awaiting_second_operand = false;
        } else if self.display_value == "0" {
            self.display_value = c.to_string();
        } else {
            self.display_value.push(c);
        }
        debug!(digit, display = %self.display_value, "digit entered");
        Ok(())
    }

    /// Enters a decimal point
    ///
    /// Starts `"0."` when awaiting a second operand; otherwise appends `.`
    /// unless the display already has one.
    pub fn input_decimal(&mut self) {
        if self.is_error() {
            debug!("decimal ignored in error state");
            return;
        }

        if self.awaiting_second_operand {
            self.display_value = "0.".to_string();
            self.awaiting_second_operand = false;
        } else if !self.display_value.contains('.') {
            self.display_value.push('.');
        }
        debug!(display = %self.display_value, "decimal entered");
    }

    /// Applies an operator, evaluating the pending one first if there is one
    ///
    /// Each new operator evaluates the previous one, so `5 + 3 +` shows `8`.
    /// [`Operator::Equals`] forces evaluation without starting a new
    /// arithmetic operation. On division by zero the display becomes
    /// `"Error"` and the previous first operand is kept as is.
    pub fn apply_operator(&mut self, op: Operator) {
        if self.is_error() {
            debug!(%op, "operator ignored in error state");
            return;
        }

        let input = match self.pending_numeral() {
            Ok(input) => input,
            Err(err) => {
                info!(display = %self.display_value, error = %err, "entering error state");
                self.display_value = ERROR_DISPLAY.to_string();
                self.awaiting_second_operand = true;
                self.operator = Some(op);
                return;
            }
        };
        match (self.first_operand, self.operator) {
            (None, _) => self.first_operand = Some(input),
            (Some(first), Some(pending)) => match compute(first, input, pending) {
                Ok(result) => {
                    debug!(first, input, %pending, result, "evaluated");
                    self.display_value = format_number(result);
                    self.first_operand = Some(result);
                }
                Err(err) => {
                    info!(first, input, %pending, error = %err, "entering error state");
                    self.display_value = ERROR_DISPLAY.to_string();
                }
            },
            (Some(_), None) => {}
        }

        self.awaiting_second_operand = true;
        self.operator = Some(op);
        debug!(%op, display = %self.display_value, "operator applied");
    }

    /// Removes the last character, or resets to `"0"`
    ///
    /// Resets when only one character is left or when the display holds a
    /// just-computed value. Ignored in the error state.
    pub fn backspace(&mut self) {
        if self.is_error() {
            debug!("backspace ignored in error state");
            return;
        }

        if self.display_value.len() > 1 && !self.awaiting_second_operand {
            self.display_value.pop();
        } else {
            self.display_value = "0".to_string();
        }
        debug!(display = %self.display_value, "backspace");
    }

    /// Resets every field to its default
    pub fn clear(&mut self) {
        *self = Self::new();
        debug!("cleared");
    }

    /// Numeral currently on the display, as a number
    ///
    /// A numeral too long to fit in an `f64` is an overflow.
    fn pending_numeral(&self) -> CalcResult<f64> {
        let value: f64 = self.display_value.parse().unwrap_or_else(|_| {
            warn!(display = %self.display_value, "unparseable display, using 0");
            0.0
        });
        if value.is_finite() {
            Ok(value)
        } else {
            Err(CalcError::Overflow)
        }
    }
}
