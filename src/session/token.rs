use std::fmt;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::error::AppError;
use crate::utils::debug_log;

const PROMPT: &str =
    "please insert aoc cookie containing the session key (excluding the 'session=' and ';'): ";

/// Session cookie value, kept verbatim apart from a trailing line ending
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct SessionToken(String);

impl SessionToken {
    pub(crate) fn new(raw: &str) -> Self {
        Self(raw.trim_end_matches(['\r', '\n']).to_string())
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(<redacted>)")
    }
}

/// Load the token from `path`, or prompt for it and persist it there.
///
/// A missing or unreadable file falls back to the prompt. Failing to read
/// the answer (including end of input) or to save it is fatal, and nothing
/// is written in that case.
pub(crate) fn load_or_prompt<R: BufRead, W: Write>(
    path: &Path,
    input: &mut R,
    prompt_out: &mut W,
) -> Result<SessionToken, AppError> {
    match fs::read_to_string(path) {
        Ok(content) => {
            debug_log!("Loaded session token from {}", path.display());
            return Ok(SessionToken::new(&content));
        }
        Err(e) => debug_log!("No session token at {} ({e})", path.display()),
    }

    let token = prompt(input, prompt_out)?;
    save(path, &token)?;
    eprintln!("Saved session token to {}", path.display());
    Ok(token)
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<SessionToken, AppError> {
    write!(out, "{PROMPT}").map_err(AppError::Prompt)?;
    out.flush().map_err(AppError::Prompt)?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(AppError::Prompt)?;
    if read == 0 {
        return Err(AppError::Prompt(io::Error::from(io::ErrorKind::UnexpectedEof)));
    }
    Ok(SessionToken::new(&line))
}

fn save(path: &Path, token: &SessionToken) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| AppError::SaveToken {
            path: path.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, token.as_str()).map_err(|source| AppError::SaveToken {
        path: path.to_path_buf(),
        source,
    })
}
