//! Pocket Calc CLI
//!
//! ## Usage
//!
//! ```bash
//! pocket-calc eval 5 + 3 + 2 =        # prints 10
//! pocket-calc eval 1234567 --raw      # prints 1234567
//! pocket-calc eval 9 -- -4=           # prints 5
//! pocket-calc eval --trace 12.5*4 Enter
//! pocket-calc repl                    # one line of keys at a time
//! pocket-calc --config calc.json config
//! ```

use clap::Parser;
use pocket_calc::config::CalculatorConfig;
use pocket_calc_cli::{
    logging::init_logging,
    session::{run_config, run_eval, run_repl},
    Cli, CliConfig, CliResult, ColorChoice, Commands, Verbosity,
};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    let verbosity = Verbosity::from_flags(cli.verbose, cli.quiet);
    init_logging(verbosity);

    let config = build_config(&cli, verbosity)?;
    tracing::debug!(?config, "configuration loaded");

    let mut stdout = io::stdout().lock();
    match cli.command {
        Commands::Eval(args) => run_eval(&config, &args, &mut stdout),
        Commands::Repl => run_repl(
            &config,
            io::stdin().lock(),
            &mut stdout,
            &mut io::stderr().lock(),
        ),
        Commands::Config => run_config(&config, &mut stdout),
    }
}

fn build_config(cli: &Cli, verbosity: Verbosity) -> CliResult<CliConfig> {
    let color: ColorChoice = cli.color.clone().into();
    let calculator = match &cli.config {
        Some(path) => CalculatorConfig::from_path(path)?,
        None => CalculatorConfig::default(),
    };

    Ok(CliConfig::new()
        .with_verbosity(verbosity)
        .with_color(color)
        .with_calculator(calculator))
}
