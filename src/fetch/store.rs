use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::AppError;

/// What happened to a fetched input on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StoreOutcome {
    Written,
    AlreadyExists,
}

pub(crate) fn ensure_input_dir(dir: &Path) -> Result<(), AppError> {
    if dir.as_os_str().is_empty() || dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|source| AppError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    eprintln!("Created directory: {}", dir.display());
    Ok(())
}

/// Create `path` with `contents` unless something already lives there.
///
/// Existence check and creation are a single `create_new` open, so an
/// existing file is never truncated.
pub(crate) fn write_if_absent(path: &Path, contents: &str) -> Result<StoreOutcome, AppError> {
    let write_err = |source: std::io::Error| AppError::WriteInput {
        path: PathBuf::from(path),
        source,
    };

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(StoreOutcome::AlreadyExists),
        Err(e) => return Err(write_err(e)),
    };
    file.write_all(contents.as_bytes()).map_err(write_err)?;
    Ok(StoreOutcome::Written)
}
