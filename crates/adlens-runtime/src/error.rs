use std::fmt;

/// Result type for adlens-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Transport failure (connect, timeout, TLS)
    Http(reqwest::Error),

    /// The endpoint answered with a non-success status
    Status { status: u16, url: String },

    /// The requested campaign does not exist
    NotFound(String),

    /// Response or file body is not a valid campaign payload
    Decode(serde_json::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Fetched data violates a domain rule
    Invalid(adlens_types::Error),

    /// Operation not available for the selected campaign source
    Unsupported(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(err) => write!(f, "Request failed: {}", err),
            Error::Status { status, url } => write!(f, "{} returned HTTP {}", url, status),
            Error::NotFound(id) => write!(f, "Campaign not found: {}", id),
            Error::Decode(err) => write!(f, "Invalid campaign data: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Invalid(err) => write!(f, "{}", err),
            Error::Unsupported(msg) => write!(f, "Unsupported operation: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Http(err) => Some(err),
            Error::Decode(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Invalid(err) => Some(err),
            Error::Status { .. }
            | Error::NotFound(_)
            | Error::Config(_)
            | Error::Unsupported(_) => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<adlens_types::Error> for Error {
    fn from(err: adlens_types::Error) -> Self {
        Error::Invalid(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
