//! Unified error type for all aglog operations.

use crate::level::ParseLevelError;

/// Boxed error returned by user-supplied formatters and sinks.
///
/// Kept as a trait object so the caller of a level method gets the exact error
/// the collaborator produced back through `source()`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Error type for aglog operations.
#[derive(Debug)]
pub enum Error {
    /// A level was out of range or a pseudo-level was used as a threshold.
    InvalidLevel(ParseLevelError),
    /// `create_logger` was called while an instance is already active.
    AlreadyCreated,
    /// `get_logger` was called before `create_logger`.
    NotCreated,
    /// The installed formatter failed.
    Formatter(BoxError),
    /// The resolved sink failed.
    Sink(BoxError),
    /// I/O error.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLevel(e) => write!(f, "invalid log level: {e}"),
            Self::AlreadyCreated => write!(f, "logger already created"),
            Self::NotCreated => write!(f, "logger not created; call create_logger first"),
            Self::Formatter(e) => write!(f, "formatter failed: {e}"),
            Self::Sink(e) => write!(f, "sink failed: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Formatter(e) | Self::Sink(e) => Some(&**e),
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            Self::InvalidLevel(e) => Some(e),
            Self::AlreadyCreated | Self::NotCreated | Self::ConfigDirNotFound => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}

impl From<ParseLevelError> for Error {
    fn from(e: ParseLevelError) -> Self {
        Self::InvalidLevel(e)
    }
}
