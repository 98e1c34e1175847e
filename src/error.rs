//! Error type shared by every rendering operation.
//!
//! Validation failures are reported as [`Error::Configuration`] and always
//! happen before the operation writes anything. Failures of the output sink
//! itself surface as [`Error::Io`].

use std::fmt;
use std::io;

/// Errors raised by report rendering.
#[derive(Debug)]
pub enum Error {
    /// An option or value was rejected: unknown key, bad enum value,
    /// non-positive width, content too large for its width, and so on.
    Configuration(String),
    /// The output sink failed to accept a line.
    Io(io::Error),
}

impl Error {
    /// Build a configuration error from any message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Returns true for [`Error::Configuration`].
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration(message) => write!(f, "configuration error: {message}"),
            Self::Io(err) => write!(f, "output error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Configuration(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Configuration(err.to_string())
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Reject a zero width. `what` names the option in the message.
pub(crate) fn validate_width(width: usize, what: &str) -> Result<usize> {
    if width == 0 {
        return Err(Error::config(format!(
            "{what} must be a positive integer, got 0"
        )));
    }
    Ok(width)
}
