use std::io;

use crate::cli::{FetchArgs, FetchSettings};
use crate::config::Config;
use crate::error::AppError;
use crate::fetch::{self, Day, FetchSummary, HttpSource};
use crate::session::load_or_prompt;
use crate::tile::print_tile;
use crate::utils::debug_log;

pub(crate) fn handle_fetch(args: FetchArgs, config: &Config) -> Result<FetchSummary, AppError> {
    let settings: FetchSettings = args.resolve(config);
    debug_log!(
        "year {}, token file {}, input dir {}, base url {}",
        settings.year,
        settings.token_file.display(),
        settings.input_dir.display(),
        settings.base_url
    );

    // Validate before prompting so a bad --day never asks for a token.
    let days: Vec<Day> = match settings.day {
        Some(day) => vec![Day::new(day)?],
        None => Day::all().collect(),
    };

    let token = load_or_prompt(
        &settings.token_file,
        &mut io::stdin().lock(),
        &mut io::stderr(),
    )?;
    let source = HttpSource::new(&settings.base_url, settings.year, token);

    fetch::run(&source, days, &settings.input_dir)
}

pub(crate) fn handle_tile(text: &str, size: usize) -> Result<(), AppError> {
    print_tile(&mut io::stdout().lock(), text, size)
}
