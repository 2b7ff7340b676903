//! CLI subcommand definitions

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Main CLI commands
#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Download puzzle inputs (default)
    Fetch(FetchArgs),
    /// Tile a text into a square grid
    Tile {
        /// Characters to repeat across the grid
        text: String,
        /// Width and height of the grid
        size: usize,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub(crate) struct FetchArgs {
    /// Puzzle year (default 2024)
    #[arg(short, long)]
    pub(crate) year: Option<u16>,

    /// Fetch only this day (1-25)
    #[arg(short, long)]
    pub(crate) day: Option<u8>,

    /// File holding the session cookie (default ./api_key.txt)
    #[arg(short, long, value_name = "PATH")]
    pub(crate) token_file: Option<PathBuf>,

    /// Directory receiving day_NN.txt files (default ./input)
    #[arg(short = 'o', long, value_name = "DIR")]
    pub(crate) input_dir: Option<PathBuf>,

    /// Upstream host (default https://adventofcode.com)
    #[arg(long, value_name = "URL")]
    pub(crate) base_url: Option<String>,
}
