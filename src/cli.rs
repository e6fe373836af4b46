use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "tgram", about = "Decode and check Telegram Bot API payloads")]
pub struct Cli {
    /// Path to config file (default: $TGRAM_CONFIG or ./tgram.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print one line per decoded update
    Inspect {
        /// JSON files to read; stdin when empty
        files: Vec<PathBuf>,
    },
    /// Decode and run envelope checks
    Check {
        /// JSON files to read; stdin when empty
        files: Vec<PathBuf>,
    },
}

impl Command {
    pub fn files(&self) -> &[PathBuf] {
        match self {
            Self::Inspect { files } | Self::Check { files } => files,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Command};

    #[test]
    fn test_parses_inspect_with_files() {
        let cli = Cli::parse_from(["tgram", "inspect", "a.json", "b.json"]);
        assert!(matches!(cli.command, Command::Inspect { .. }));
        assert_eq!(cli.command.files().len(), 2);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_parses_check_with_global_config() {
        let cli = Cli::parse_from(["tgram", "check", "--config", "custom.toml"]);
        assert!(matches!(cli.command, Command::Check { .. }));
        assert!(cli.command.files().is_empty());
        assert_eq!(
            cli.config.as_deref().map(|p| p.to_string_lossy().to_string()),
            Some("custom.toml".to_owned())
        );
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["tgram"]).is_err());
    }
}
