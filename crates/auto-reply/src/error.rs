use std::path::PathBuf;

/// Crate-wide result type for pool loading and reply delivery.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The pool source does not exist.
    #[error("response pool not found: {}", path.display())]
    PoolNotFound { path: PathBuf },

    #[error("failed to read response pool {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The pool source is not a list of strings.
    #[error("malformed response pool {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("unsupported response pool format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("invalid trigger pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error(transparent)]
    Channel(#[from] spud_channels::Error),
}

impl Error {
    #[must_use]
    pub fn parse(path: impl Into<PathBuf>, source: impl std::fmt::Display) -> Self {
        Self::Parse {
            path: path.into(),
            message: source.to_string(),
        }
    }
}
