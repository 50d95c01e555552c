use std::path::PathBuf;

use thiserror::Error;

use super::service_account::DEFAULT_SERVICE_ACCOUNT_FILE;

/// Library-wide error type for lifetracker-admin operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Revoke was combined with a grant flag.
    #[error(
        "You cannot provide and revoke roles simultaneously. Either use revoke or role commands."
    )]
    ConflictingRoleFlags,

    /// User identifier is empty or too long.
    #[error("Invalid user UID '{0}': must be a non-empty string with at most 128 characters")]
    InvalidUid(String),

    /// No credential file at the expected location.
    #[error(
        "No service account file found at {}. Please provide one in the current directory named {}.",
        .path.display(),
        DEFAULT_SERVICE_ACCOUNT_FILE
    )]
    ServiceAccountNotFound { path: PathBuf },

    /// Credential file exists but cannot be used.
    #[error("Invalid service account file {}: {details}", .path.display())]
    InvalidServiceAccount { path: PathBuf, details: String },

    /// Access token could not be obtained for the service account.
    #[error("Failed to obtain access token: {0}")]
    Credential(String),

    /// The identity platform rejected the request.
    #[error("{message}")]
    Identity { code: String, message: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
