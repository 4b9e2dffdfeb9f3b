//! Command-line interface for flightlog.
//!
//! This module provides the CLI structure for the `flightlog` binary. Running
//! it without a subcommand starts the interactive menu.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{ConfigCommand, ModeArg};

/// flightlog - Keep a small log of flights in a JSON file
///
/// Add flights, list them sorted by destination, and search them by aircraft
/// type from an interactive menu. The log is saved when you choose the exit
/// action.
#[derive(Debug, Parser)]
#[command(name = "flightlog")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Path to the flight data file (overrides configuration)
    #[arg(short = 'f', long, global = true, value_name = "FILE")]
    pub data_file: Option<PathBuf>,

    /// Menu variant (overrides configuration)
    #[arg(short, long, global = true, value_enum)]
    pub mode: Option<ModeArg>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute (defaults to the interactive menu)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the interactive menu
    Menu,

    /// View configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }

    /// The command to run, with the interactive menu as the default.
    #[must_use]
    pub fn selected_command(&self) -> &Command {
        self.command.as_ref().unwrap_or(&Command::Menu)
    }
}
