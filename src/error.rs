use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid day {input} (expected 1-25)")]
    InvalidDay { input: u8 },

    #[error("Tile text must not be empty")]
    EmptyTileText,

    #[error("Failed to read session token: {0}")]
    Prompt(std::io::Error),

    #[error("Failed to save session token to {}: {source}", path.display())]
    SaveToken {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to create input directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    WriteInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write output: {0}")]
    Output(std::io::Error),

    #[error("{0}")]
    Fetch(#[from] FetchError),
}

#[derive(Debug, Error)]
pub(crate) enum FetchError {
    #[error("Day {day}: server responded with HTTP {status}")]
    Status { day: u8, status: u16 },

    #[error("Day {day}: request failed: {source}")]
    Transport { day: u8, source: ureq::Error },

    #[error("Day {day}: failed to read response body: {source}")]
    Body { day: u8, source: ureq::Error },
}
