//! Finds the `go-cloc` executable for the host OS.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{HarnessError, Result};

const UNIX_BINARY: &str = "go-cloc";
const WINDOWS_BINARY: &str = "go-cloc.exe";

/// Executable name for an OS identifier.
///
/// Accepts both `uname`-style names (`Linux`, `Darwin`, `Windows`) and Rust's
/// `std::env::consts::OS` values, case-insensitively.
pub fn binary_name(os: &str) -> Result<&'static str> {
    match os.to_ascii_lowercase().as_str() {
        "linux" | "darwin" | "macos" => Ok(UNIX_BINARY),
        "windows" => Ok(WINDOWS_BINARY),
        _ => Err(HarnessError::UnsupportedPlatform { os: os.to_string() }),
    }
}

/// Resolve the subject tool on the process `PATH`.
pub fn locate(os: &str) -> Result<PathBuf> {
    let name = binary_name(os)?;
    let path = which::which(name).map_err(|source| HarnessError::BinaryNotFound {
        name: name.to_string(),
        source,
    })?;
    debug!(binary = %path.display(), "located subject tool");
    Ok(path)
}

/// Like [`locate`] but searches an explicit `PATH`-style list.
pub fn locate_in<P, C>(os: &str, paths: P, cwd: C) -> Result<PathBuf>
where
    P: AsRef<OsStr>,
    C: AsRef<Path>,
{
    let name = binary_name(os)?;
    which::which_in(name, Some(paths), cwd).map_err(|source| HarnessError::BinaryNotFound {
        name: name.to_string(),
        source,
    })
}
