// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepeatError {
    #[error("{0}")]
    Config(String),

    /// The child process was created but could not start the target program
    /// (missing binary, permission denied, ...).
    #[error("unable to execute '{program}': {source}")]
    StartFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// No child process could be created at all.
    #[error("unable to fork: {source}")]
    LaunchFailed {
        #[source]
        source: std::io::Error,
    },

    #[error("unable to wait for pid {pid}: {source}")]
    Wait {
        pid: u32,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RepeatError {
    /// Process exit code to use when this error ends the run.
    ///
    /// A target that could not be started reports the underlying OS error
    /// number (e.g. `2` for "No such file or directory"); everything else
    /// exits with `1`.
    pub fn exit_code(&self) -> i32 {
        match self {
            RepeatError::StartFailed { source, .. } => source
                .raw_os_error()
                .filter(|code| (1..=255).contains(code))
                .unwrap_or(1),
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, RepeatError>;
