use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Infrastructure faults that abort the whole run.
///
/// An unparseable summary line is deliberately absent here: it is an ordinary
/// failed outcome, see [`crate::count::parse_total`].
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("unsupported OS: {os}")]
    UnsupportedPlatform { os: String },

    #[error("{name} not found in PATH")]
    BinaryNotFound {
        name: String,
        #[source]
        source: which::Error,
    },

    #[error("failed to launch {}", path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("i/o error while streaming subject tool output")]
    Io(#[from] io::Error),

    #[error("process exited with code {code}")]
    ChildProcessFailed { code: i32 },
}

impl HarnessError {
    /// Exit status the driver terminates with for this fault.
    pub fn exit_code(&self) -> i32 {
        match self {
            HarnessError::ChildProcessFailed { code } => *code,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, HarnessError>;
