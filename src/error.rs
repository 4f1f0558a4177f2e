// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Errors surfaced by the preference store.
///
/// The resolver itself is infallible: reads fall back to the host locale,
/// and missing overrides are not errors. Only a store commit can fail.
#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Store(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Store(e) => write!(f, "Store Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Store(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
