//! Command-line and environment configuration for the terminal binary.

use std::fs::File;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::core::{ConfigError, GameConfig};
use crate::types::{DEFAULT_BOARD_SIZE, DEFAULT_TICK_MS};

#[derive(Debug, Clone, Parser)]
#[command(name = "tui-snake")]
#[command(version, about = "Snake in the terminal")]
pub struct Cli {
    /// Side length of the square board, wall ring included
    #[arg(long, env = "SNAKE_BOARD_SIZE", default_value_t = DEFAULT_BOARD_SIZE as i64, allow_negative_numbers = true)]
    pub board_size: i64,

    /// Milliseconds between ticks
    #[arg(long, env = "SNAKE_TICK_MS", default_value_t = DEFAULT_TICK_MS as i64, allow_negative_numbers = true)]
    pub tick_ms: i64,

    /// Seed for pill placement (random when omitted)
    #[arg(long, env = "SNAKE_SEED")]
    pub seed: Option<u64>,

    /// Write logs to this file; stdout is owned by the game
    #[arg(long, env = "SNAKE_LOG")]
    pub log_file: Option<PathBuf>,

    /// Log level used with --log-file
    #[arg(long, env = "SNAKE_LOG_LEVEL", default_value_t = LevelFilter::Info, value_parser = parse_level)]
    pub log_level: LevelFilter,
}

impl Cli {
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        GameConfig::new(self.board_size, self.tick_ms)
    }

    /// Install the file logger when `--log-file` is set.
    pub fn init_logging(&self) -> Result<()> {
        let Some(path) = &self.log_file else {
            return Ok(());
        };
        let file = File::create(path)
            .with_context(|| format!("cannot create log file {}", path.display()))?;
        WriteLogger::init(self.log_level, Config::default(), file)
            .map_err(|err| anyhow!("cannot install logger: {err}"))
    }
}

fn parse_level(s: &str) -> Result<LevelFilter, String> {
    s.parse()
        .map_err(|_| format!("unknown log level {s:?} (off, error, warn, info, debug, trace)"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["tui-snake"]).unwrap();
        let config = cli.game_config().unwrap();
        assert_eq!(config.board_size(), DEFAULT_BOARD_SIZE);
        assert_eq!(config.tick_interval_ms(), DEFAULT_TICK_MS);
        assert_eq!(cli.seed, None);
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_negative_values_reach_validation() {
        let cli = Cli::try_parse_from(["tui-snake", "--tick-ms", "-1"]).unwrap();
        assert!(matches!(
            cli.game_config(),
            Err(ConfigError::NegativeTickInterval(-1))
        ));

        let cli = Cli::try_parse_from(["tui-snake", "--board-size", "2"]).unwrap();
        assert!(matches!(cli.game_config(), Err(ConfigError::BoardTooSmall(2))));
    }

    #[test]
    fn test_explicit_flags() {
        let cli = Cli::try_parse_from([
            "tui-snake",
            "--board-size",
            "20",
            "--tick-ms",
            "0",
            "--seed",
            "7",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.game_config().unwrap().board_size(), 20);
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_unknown_log_level_is_rejected() {
        assert!(Cli::try_parse_from(["tui-snake", "--log-level", "loud"]).is_err());
    }
}
