pub(crate) mod args;
pub(crate) mod commands;

pub(crate) use args::{Cli, FetchSettings};
pub(crate) use commands::{Commands, FetchArgs};
