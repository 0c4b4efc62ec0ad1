//! Error types for build expiry configuration.

use thiserror::Error;

/// Result type alias for build expiry operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for build expiry configuration.
#[derive(Error, Debug)]
pub enum Error {
    // Lifecycle errors (10-19)
    #[error("configuration already initialized")]
    AlreadyInitialized,

    #[error("invalid configuration for '{key}' (value {value:?}): {reason}")]
    InvalidConfiguration {
        key: &'static str,
        value: String,
        reason: String,
    },

    // Expiry errors (20-29)
    #[error("build expired on {expiry}")]
    Expired { expiry: String },

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Convenience constructor for a rejected configuration value.
    pub fn invalid(key: &'static str, value: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidConfiguration {
            key,
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Returns the error code for this error type.
    /// Used for detailed error reporting by host applications.
    pub fn code(&self) -> u32 {
        match self {
            Error::AlreadyInitialized => 10,
            Error::InvalidConfiguration { .. } => 11,
            Error::Expired { .. } => 20,
            Error::Io(_) => 60,
            Error::Json(_) => 61,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_grouped_by_category() {
        assert_eq!(Error::AlreadyInitialized.code(), 10);
        assert_eq!(Error::invalid("expiry", "x", "bad").code(), 11);
        assert_eq!(
            Error::Expired {
                expiry: "Jul 1, 2012".into()
            }
            .code(),
            20
        );
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert_eq!(Error::from(io).code(), 60);
    }

    #[test]
    fn invalid_configuration_message_names_key_and_value() {
        let err = Error::invalid("build_type", "Jenkins", "not a known build type");
        let msg = err.to_string();
        assert!(msg.contains("build_type"));
        assert!(msg.contains("\"Jenkins\""));
        assert!(msg.contains("not a known build type"));
    }
}
