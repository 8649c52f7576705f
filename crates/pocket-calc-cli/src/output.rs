//! Output styling

use console::style;

/// Styles the lines the CLI prints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Output {
    /// Whether to use colors
    pub use_color: bool,
}

impl Output {
    /// Create a new output styler
    #[must_use]
    pub const fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    /// A display value, red when it is the error sentinel
    #[must_use]
    pub fn display(&self, text: &str, is_error: bool) -> String {
        if !self.use_color {
            return text.to_string();
        }
        if is_error {
            style(text).red().bold().force_styling(true).to_string()
        } else {
            style(text).bold().force_styling(true).to_string()
        }
    }

    /// One `--trace` line: the key pressed, then the display after it
    #[must_use]
    pub fn trace_step(&self, key: &str, display: &str, is_error: bool) -> String {
        let key = format!("{key:<9}");
        let key = if self.use_color {
            style(key).dim().force_styling(true).to_string()
        } else {
            key
        };
        format!("{key} {}", self.display(display, is_error))
    }

    /// A warning line for stderr
    #[must_use]
    pub fn warning(&self, message: &str) -> String {
        let prefix = if self.use_color {
            style("warning:").yellow().bold().force_styling(true).to_string()
        } else {
            "warning:".to_string()
        };
        format!("{prefix} {message}")
    }
}
