//! Operators and the pure arithmetic behind them

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult};

/// Operator selectable on the keypad
///
/// `Equals` never computes anything by itself: it is recorded as the pending
/// operator so the next evaluation passes its second operand straight through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
    /// Evaluate (=)
    Equals,
}

impl Operator {
    /// All arithmetic operators, in keypad order
    pub const ARITHMETIC: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the ASCII symbol, as typed on a keyboard
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Equals => '=',
        }
    }

    /// Returns the glyph shown on the button face
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Equals => "=",
        }
    }

    /// Short name used in element ids and logs
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Equals => "equals",
        }
    }

    /// Parses a keyboard symbol or a button glyph
    #[must_use]
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Subtract),
            '*' | '×' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            '=' => Some(Self::Equals),
            _ => None,
        }
    }

    /// Returns true for [`Operator::Equals`]
    #[must_use]
    pub const fn is_equals(&self) -> bool {
        matches!(self, Self::Equals)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Applies `op` to `a` and `b`
///
/// Division by zero yields [`CalcError::DivisionByZero`]; a result that is no
/// longer finite yields [`CalcError::Overflow`]. `Equals` returns `b`.
pub fn compute(a: f64, b: f64, op: Operator) -> CalcResult<f64> {
    let result = match op {
        Operator::Add => a + b,
        Operator::Subtract => a - b,
        Operator::Multiply => a * b,
        Operator::Divide => {
            if b == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            a / b
        }
        Operator::Equals => b,
    };
    check_finite(result)
}

fn check_finite(result: f64) -> CalcResult<f64> {
    if result.is_finite() {
        Ok(result)
    } else {
        Err(CalcError::Overflow)
    }
}
