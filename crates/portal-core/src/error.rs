//! Error types for the portal.

use thiserror::Error;

use crate::registration::FieldError;

/// A shared error type for the portal crates.
///
/// Every failure a view can run into is one of these variants. None of them
/// is fatal: the view boundary turns each into a visible message via
/// [`PortalError::user_message`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PortalError {
    /// The submitted email/password pair does not match any account.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The account directory could not be fetched or decoded.
    #[error("Account directory unavailable: {message}")]
    DirectoryUnavailable { message: String },

    /// Guard denial: no identity, or an incomplete one.
    #[error("Unauthorized")]
    Unauthorized,

    /// A content or reaction fetch failed.
    #[error("Failed to fetch {resource}: {message}")]
    FetchFailed {
        resource: &'static str,
        message: String,
    },

    /// The current identity may not perform the operation.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// One or more form fields failed validation.
    #[error("Validation failed ({} field errors)", .0.len())]
    Validation(Vec<FieldError>),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PortalError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a DirectoryUnavailable error
    pub fn directory_unavailable(message: impl Into<String>) -> Self {
        Self::DirectoryUnavailable {
            message: message.into(),
        }
    }

    /// Creates a FetchFailed error for the named resource
    pub fn fetch_failed(resource: &'static str, message: impl Into<String>) -> Self {
        Self::FetchFailed {
            resource,
            message: message.into(),
        }
    }

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    pub fn is_invalid_credentials(&self) -> bool {
        matches!(self, Self::InvalidCredentials)
    }

    pub fn is_directory_unavailable(&self) -> bool {
        matches!(self, Self::DirectoryUnavailable { .. })
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    pub fn is_fetch_failed(&self) -> bool {
        matches!(self, Self::FetchFailed { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true when retrying the same action may succeed.
    ///
    /// Credential and validation failures need corrected input instead.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::DirectoryUnavailable { .. } | Self::FetchFailed { .. } | Self::Io { .. }
        )
    }

    /// Human-readable text rendered in place of the failed view content.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidCredentials => "Invalid credentials. Email must match a user and password must be the corresponding username.".to_string(),
            Self::DirectoryUnavailable { .. } => "Login failed. Please try again.".to_string(),
            Self::Unauthorized => "Unauthorized".to_string(),
            Self::FetchFailed { resource, .. } => {
                format!("Could not load {}. Showing an empty list.", resource)
            }
            Self::Forbidden(action) => format!("You are not allowed to {}.", action),
            Self::NotFound { entity_type, id } => format!("{} {} was not found.", entity_type, id),
            Self::Validation(errors) => errors
                .iter()
                .map(|e| format!("{}: {}", e.field, e.message))
                .collect::<Vec<_>>()
                .join("\n"),
            other => other.to_string(),
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for PortalError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for PortalError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for PortalError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for PortalError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, PortalError>`.
pub type Result<T> = std::result::Result<T, PortalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_unavailable_is_distinct_from_invalid_credentials() {
        let err = PortalError::directory_unavailable("connection refused");
        assert!(err.is_directory_unavailable());
        assert!(!err.is_invalid_credentials());
        assert!(err.is_retryable());
        assert!(!PortalError::InvalidCredentials.is_retryable());
        assert_ne!(err.user_message(), PortalError::InvalidCredentials.user_message());
    }

    #[test]
    fn test_fetch_failed_message_names_resource() {
        let err = PortalError::fetch_failed("posts", "timeout");
        assert!(err.is_fetch_failed());
        assert_eq!(err.user_message(), "Could not load posts. Showing an empty list.");
        assert_eq!(err.to_string(), "Failed to fetch posts: timeout");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: PortalError = io.into();
        assert!(matches!(err, PortalError::Io { .. }));
    }

    #[test]
    fn test_validation_message_joins_fields() {
        let err = PortalError::Validation(vec![
            FieldError::new("email", "Email cannot be empty"),
            FieldError::new("phone", "Phone number is required"),
        ]);
        assert_eq!(
            err.user_message(),
            "email: Email cannot be empty\nphone: Phone number is required"
        );
    }
}
