//! Key sessions: `eval` and `repl`
//!
//! A session owns one engine (through an [`EngineDriver`]) and feeds it keys
//! parsed from command-line tokens or stdin lines.

use std::io::{BufRead, Write};

use pocket_calc::driver::{CalculatorDriver, EngineDriver};
use pocket_calc::wasm::WasmKeypad;
use tracing::{debug, info, warn};

use crate::commands::EvalArgs;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::Output;

/// Splits a token into the keys it stands for
///
/// A token that is itself a key (`Enter`, `Escape`, `Backspace`, `7`, `+`) is
/// one key. Anything else is read one character at a time, and every
/// character must be a key.
pub fn expand_token(token: &str) -> CliResult<Vec<String>> {
    if WasmKeypad::key_to_action(token).is_some() {
        return Ok(vec![token.to_string()]);
    }
    if token.is_empty() {
        return Err(CliError::unknown_key(token));
    }
    token
        .chars()
        .map(|c| {
            let key = c.to_string();
            match WasmKeypad::key_to_action(&key) {
                Some(_) => Ok(key),
                None => Err(CliError::unknown_key(token)),
            }
        })
        .collect()
}

/// Expands every token, failing on the first unknown one
pub fn expand_tokens<S: AsRef<str>>(tokens: &[S]) -> CliResult<Vec<String>> {
    let mut keys = Vec::new();
    for token in tokens {
        keys.extend(expand_token(token.as_ref())?);
    }
    Ok(keys)
}

/// One calculator driven by keys
#[derive(Debug)]
pub struct Session {
    driver: EngineDriver,
    output: Output,
    raw: bool,
}

impl Session {
    /// Creates a session from the CLI configuration
    #[must_use]
    pub fn new(config: &CliConfig) -> Self {
        Self {
            driver: EngineDriver::with_config(config.calculator.clone()),
            output: Output::new(config.color.should_color()),
            raw: false,
        }
    }

    /// Show the display without thousands separators
    #[must_use]
    pub const fn with_raw(mut self, raw: bool) -> Self {
        self.raw = raw;
        self
    }

    /// Presses one key
    pub fn press(&mut self, key: &str) -> CliResult<()> {
        if self.driver.press_key(key) {
            debug!(key, display = %self.driver.engine().raw_display(), "key pressed");
            Ok(())
        } else {
            Err(CliError::unknown_key(key))
        }
    }

    /// Current display, formatted unless the session is raw
    #[must_use]
    pub fn display(&self) -> String {
        if self.raw {
            self.driver.engine().raw_display().to_string()
        } else {
            self.driver.display()
        }
    }

    /// Current display, styled for the terminal
    #[must_use]
    pub fn styled_display(&self) -> String {
        self.output.display(&self.display(), self.is_error())
    }

    /// Whether the display shows an error
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.driver.engine().is_error()
    }

    /// The output styler in use
    #[must_use]
    pub const fn output(&self) -> Output {
        self.output
    }
}

/// Runs the `eval` command
///
/// Every token is checked before any key is pressed, so an unknown key
/// produces no output.
pub fn run_eval<W: Write>(config: &CliConfig, args: &EvalArgs, out: &mut W) -> CliResult<()> {
    let keys = expand_tokens(&args.tokens)?;
    info!(keys = keys.len(), "evaluating");

    let mut session = Session::new(config).with_raw(args.raw);
    for key in &keys {
        session.press(key)?;
        if args.trace {
            let line = session
                .output()
                .trace_step(key, &session.display(), session.is_error());
            writeln!(out, "{line}")?;
        }
    }

    if !args.trace {
        writeln!(out, "{}", session.styled_display())?;
    }
    Ok(())
}

/// Runs the `repl` command until `quit`, `exit` or end of input
///
/// Each non-empty line is split on whitespace into tokens. Unknown tokens
/// are reported on `err` and skipped; the display is printed after every
/// line.
pub fn run_repl<R, W, E>(config: &CliConfig, input: R, out: &mut W, err: &mut E) -> CliResult<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut session = Session::new(config);
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if matches!(line, "quit" | "exit") {
            break;
        }

        for token in line.split_whitespace() {
            match expand_token(token) {
                Ok(keys) => {
                    for key in &keys {
                        session.press(key)?;
                    }
                }
                Err(e) => {
                    warn!(token, "skipping unknown key");
                    writeln!(err, "{}", session.output().warning(&e.to_string()))?;
                }
            }
        }
        writeln!(out, "{}", session.styled_display())?;
        out.flush()?;
    }
    Ok(())
}

/// Runs the `config` command
pub fn run_config<W: Write>(config: &CliConfig, out: &mut W) -> CliResult<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(config)?)?;
    Ok(())
}
