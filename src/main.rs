mod app;
mod cli;
mod config;
mod consts;
mod error;
mod fetch;
mod session;
mod tile;
mod utils;

use clap::Parser;

use cli::{Cli, Commands};
use config::Config;
use utils::set_debug;

fn main() {
    let cli = Cli::parse();
    let config = Config::load();
    let cli = cli.with_config(&config);
    set_debug(cli.debug);

    let result = match cli.command {
        Some(Commands::Tile { text, size }) => app::handle_tile(&text, size),
        Some(Commands::Fetch(args)) => app::handle_fetch(args, &config).map(|_| ()),
        None => app::handle_fetch(Default::default(), &config).map(|_| ()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
