use std::fmt;

/// Errors raised while setting up a match.
///
/// The tick path itself never fails; everything here is caught when a
/// [`Config`](crate::Config) or arena size is handed to the core.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    InvalidConfiguration {
        field: &'static str,
        reason: String,
    },
    Parse(String),
}

impl Error {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration { field, reason } => {
                write!(f, "invalid configuration: {field} {reason}")
            }
            Self::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
