use std::fmt;

use super::AppError;

const MAX_UID_LEN: usize = 128;

/// A validated identity-platform user identifier.
///
/// Guarantees:
/// - Non-empty
/// - At most 128 characters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserUid(String);

impl UserUid {
    /// Validate and create a new instance.
    pub fn new(uid: &str) -> Result<Self, AppError> {
        if uid.is_empty() || uid.chars().count() > MAX_UID_LEN {
            return Err(AppError::InvalidUid(uid.to_string()));
        }
        Ok(Self(uid.to_string()))
    }

    /// Return the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for UserUid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
