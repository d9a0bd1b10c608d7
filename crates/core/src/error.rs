use std::io;
use std::path::PathBuf;

/// Exit code used when script generation has to abort.
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Errors that can occur while generating a startup script
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(
        "Unrecognizable file '{file}'. Expected a file with an extension '.zip' or '.tar.gz'"
    )]
    UnsupportedArchive { file: String },

    #[error("Source directory not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("No startup command could be resolved and no default app file was given")]
    NoStartupCommand,

    #[error("Manifest error: {0}")]
    ManifestError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl Error {
    /// Process exit code to report when this error ends the run
    pub fn exit_code(&self) -> i32 {
        FAILURE_EXIT_CODE
    }
}

/// Result type alias for node-startup operations
pub type Result<T> = std::result::Result<T, Error>;
