use std::fmt;

/// Result type for adlens-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A textual value could not be parsed into a domain enum
    UnknownValue { kind: &'static str, value: String },

    /// A record or draft violates a domain rule
    Invalid(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownValue { kind, value } => write!(f, "Unknown {}: '{}'", kind, value),
            Error::Invalid(msg) => write!(f, "Invalid campaign: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
