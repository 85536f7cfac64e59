use std::path::PathBuf;

/// Crate-wide result type for config operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Message(String),

    /// The config file extension is not one of toml, yaml, yml or json.
    #[error("unsupported config format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// A probability gate outside `[0, 1]` or not finite.
    #[error("probabilities.{key} must be within [0, 1], got {value}")]
    InvalidProbability { key: &'static str, value: f64 },

    #[error("identity.name must not be empty")]
    EmptyName,
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

impl spud_common::FromMessage for Error {
    fn from_message(message: String) -> Self {
        Self::Message(message)
    }
}

spud_common::impl_context!(Error);
