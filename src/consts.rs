/// Upstream host serving puzzle inputs
pub(crate) const DEFAULT_BASE_URL: &str = "https://adventofcode.com";

/// Event year fetched when neither CLI nor config names one
pub(crate) const DEFAULT_YEAR: u16 = 2024;

/// Credential file, relative to the working directory
pub(crate) const DEFAULT_TOKEN_FILE: &str = "api_key.txt";

/// Directory receiving `day_NN.txt` files
pub(crate) const DEFAULT_INPUT_DIR: &str = "input";

/// Cookie carrying the session token
pub(crate) const SESSION_COOKIE: &str = "session";

pub(crate) const USER_AGENT: &str = concat!("aoc-inputs/", env!("CARGO_PKG_VERSION"));

/// Number of puzzle days in an event
pub(crate) const LAST_DAY: u8 = 25;
