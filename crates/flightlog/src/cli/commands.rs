//! CLI command definitions.

use clap::{Subcommand, ValueEnum};

use crate::config::MenuMode;

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the default configuration file path
    Path,
}

/// Menu variant argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Four actions, no validation
    Basic,
    /// Five actions, records validated before they are stored
    Validating,
}

impl From<ModeArg> for MenuMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Basic => Self::Basic,
            ModeArg::Validating => Self::Validating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_arg_conversion() {
        assert_eq!(MenuMode::from(ModeArg::Basic), MenuMode::Basic);
        assert_eq!(MenuMode::from(ModeArg::Validating), MenuMode::Validating);
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Show"));
    }
}
