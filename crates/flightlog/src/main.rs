//! `flightlog` - CLI for the flight log
//!
//! Runs the interactive menu by default and offers a few commands for
//! inspecting configuration.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use flightlog::cli::{Cli, Command, ConfigCommand};
use flightlog::{init_logging, Config, FlightStore, LineConsole, MenuMode, Result, Session};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err.report());
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: &Cli) -> Result<()> {
    // Load configuration, then apply command-line overrides
    let config = Config::load_from(cli.config.clone())?
        .with_overrides(cli.data_file.clone(), cli.mode.map(MenuMode::from))?;

    match cli.selected_command() {
        Command::Menu => handle_menu(&config),
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
    }
}

fn handle_menu(config: &Config) -> Result<()> {
    let store = FlightStore::load(config.data_file())?;
    debug!("Using data file {}", store.path().display());
    let mut session = Session::new(store, config.menu.mode);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = LineConsole::new(stdin.lock(), stdout.lock());

    flightlog::run(&mut session, &mut console)
}

fn handle_config(config: &Config, cmd: &ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if *json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Data file:  {}", config.data_file().display());
                println!();
                println!("[Menu]");
                println!("  Mode:       {}", config.menu.mode);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
    }
    Ok(())
}
