//! Error types and exit codes for the essay publisher.

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// Any failure, including usage errors
    pub const ERROR: i32 = 1;
}

/// Everything that can stop an essay from being published.
#[derive(Debug, Error)]
pub enum PublishError {
    /// No Markdown file was given on the command line.
    #[error("no markdown file given")]
    MissingArgument,

    /// The input path does not exist.
    #[error("file '{}' not found", path.display())]
    FileNotFound { path: PathBuf },

    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create directory '{}': {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The directory holding the running executable could not be resolved.
    #[error("cannot locate program directory: {0}")]
    ProgramLocation(#[source] std::io::Error),

    /// The index refresh collaborator failed. Never surfaced by `Publisher`.
    #[error("refresh script '{}' failed: {reason}", script.display())]
    Refresh { script: PathBuf, reason: String },
}

impl PublishError {
    /// Returns the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::MissingArgument
            | Self::FileNotFound { .. }
            | Self::Read { .. }
            | Self::Write { .. }
            | Self::CreateDir { .. }
            | Self::ProgramLocation(_)
            | Self::Refresh { .. } => ExitCode::ERROR,
        }
    }
}
