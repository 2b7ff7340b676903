//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::consts::{DEFAULT_BASE_URL, DEFAULT_INPUT_DIR, DEFAULT_TOKEN_FILE, DEFAULT_YEAR};

use super::commands::{Commands, FetchArgs};

#[derive(Parser)]
#[command(name = "aoc-inputs")]
#[command(about = "Download Advent of Code puzzle inputs", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Enable debug output (show request details)
    #[arg(long, global = true)]
    pub(crate) debug: bool,
}

/// Fetch options after merging CLI, config and defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FetchSettings {
    pub(crate) year: u16,
    pub(crate) day: Option<u8>,
    pub(crate) token_file: PathBuf,
    pub(crate) input_dir: PathBuf,
    pub(crate) base_url: String,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.debug && config.debug {
            self.debug = true;
        }
        self
    }
}

impl FetchArgs {
    pub(crate) fn resolve(self, config: &Config) -> FetchSettings {
        FetchSettings {
            year: self.year.or(config.year).unwrap_or(DEFAULT_YEAR),
            day: self.day,
            token_file: self
                .token_file
                .or_else(|| config.token_file.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_TOKEN_FILE)),
            input_dir: self
                .input_dir
                .or_else(|| config.input_dir.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_DIR)),
            base_url: self
                .base_url
                .or_else(|| config.base_url.clone())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_config() {
        let settings = FetchArgs::default().resolve(&Config::default());
        assert_eq!(
            settings,
            FetchSettings {
                year: 2024,
                day: None,
                token_file: PathBuf::from("api_key.txt"),
                input_dir: PathBuf::from("input"),
                base_url: "https://adventofcode.com".to_string(),
            }
        );
    }

    #[test]
    fn config_fills_unset_args() {
        let config = Config {
            year: Some(2022),
            input_dir: Some(PathBuf::from("puzzles")),
            ..Config::default()
        };
        let args = FetchArgs {
            year: Some(2023),
            ..FetchArgs::default()
        };

        let settings = args.resolve(&config);
        assert_eq!(settings.year, 2023);
        assert_eq!(settings.input_dir, PathBuf::from("puzzles"));
        assert_eq!(settings.token_file, PathBuf::from("api_key.txt"));
    }

    #[test]
    fn config_enables_debug() {
        let cli = Cli::parse_from(["aoc-inputs"]);
        let config = Config {
            debug: true,
            ..Config::default()
        };
        assert!(cli.with_config(&config).debug);
    }

    #[test]
    fn parses_fetch_flags() {
        let cli = Cli::parse_from([
            "aoc-inputs",
            "fetch",
            "-y",
            "2021",
            "-d",
            "5",
            "--base-url",
            "http://127.0.0.1:1",
        ]);
        let Some(Commands::Fetch(args)) = cli.command else {
            panic!("expected fetch command");
        };
        assert_eq!(args.year, Some(2021));
        assert_eq!(args.day, Some(5));
        assert_eq!(args.base_url.as_deref(), Some("http://127.0.0.1:1"));
    }

    #[test]
    fn parses_tile() {
        let cli = Cli::parse_from(["aoc-inputs", "tile", "ab", "3"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Tile { ref text, size: 3 }) if text == "ab"
        ));
    }
}
