//! Error taxonomy shared by every helper in this crate
//!
//! All helpers report failure immediately through [Result]; nothing is logged and swallowed,
//! nothing is retried. Callers decide how to recover.
//!
//! # Examples
//!
//! ```rust
//! use roonia_util::guard::throw_if_argument_is_null;
//! use roonia_util::Error;
//!
//! let missing: Option<u32> = None;
//! let err = throw_if_argument_is_null(&missing, "port").unwrap_err();
//! assert!(matches!(err, Error::InvalidArgument { ref name } if name == "port"));
//! assert_eq!(err.to_string(), "invalid argument `port`");
//! ```

use std::io;

use thiserror::Error;

/// Result type defaulting to the crate [Error]
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
/// Failure kinds raised by the helpers in this crate
pub enum Error {
    /// A required value was missing, empty or whitespace-only where that is not permitted
    #[error("invalid argument `{name}`")]
    InvalidArgument {
        /// Name of the offending parameter
        name: String,
    },
    /// A value was unexpectedly missing; raised where an argument-level distinction is not wanted
    #[error("unexpected null reference `{name}`")]
    NullReference {
        /// Name of the missing value
        name: String,
    },
    /// The caller-supplied cancellation signal was observed
    #[error("operation was cancelled")]
    Cancelled,
    /// An operation was called on an absent input it requires
    #[error("precondition violated: `{name}` must not be absent")]
    PreconditionViolation {
        /// Name of the absent input
        name: String,
    },
    /// A resource table could not be read
    #[error("error reading resource table")]
    ResourceIo(#[from] io::Error),
    /// A resource table could not be parsed
    #[error("error parsing resource table")]
    ResourceParse(#[from] toml::de::Error),
}

impl Error {
    /// Creates an [Error::InvalidArgument] for the parameter `name`
    pub fn invalid_argument(name: impl Into<String>) -> Self {
        Self::InvalidArgument { name: name.into() }
    }

    /// Creates an [Error::NullReference] for the value `name`
    pub fn null_reference(name: impl Into<String>) -> Self {
        Self::NullReference { name: name.into() }
    }

    /// Creates an [Error::PreconditionViolation] for the input `name`
    pub fn precondition_violation(name: impl Into<String>) -> Self {
        Self::PreconditionViolation { name: name.into() }
    }

    /// Whether this error stems from an observed cancellation signal
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// The parameter name carried by guard errors, if any
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::InvalidArgument { name }
            | Self::NullReference { name }
            | Self::PreconditionViolation { name } => Some(name),
            _ => None,
        }
    }
}
