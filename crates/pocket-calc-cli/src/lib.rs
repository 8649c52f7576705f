//! Pocket Calc CLI Library
//!
//! Command-line front end for the pocket-calc engine: `eval` presses the
//! given keys and prints the display, `repl` does the same line by line
//! from stdin.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)] // Error types are self-documenting

mod commands;
mod config;
mod error;
pub mod logging;
mod output;
pub mod session;

pub use commands::{Cli, ColorArg, Commands, EvalArgs};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::Output;
