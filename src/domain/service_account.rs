//! Service-account credential as issued by the identity platform console.

use std::fmt;

use serde::Deserialize;

/// Credential file looked up in the working directory when no path is given.
pub const DEFAULT_SERVICE_ACCOUNT_FILE: &str = "fbadmin.private.json";

const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// Parsed service-account key file.
#[derive(Clone, Deserialize)]
pub struct ServiceAccount {
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub private_key: String,
    #[serde(default)]
    pub client_email: String,
    #[serde(default)]
    pub private_key_id: Option<String>,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

impl fmt::Debug for ServiceAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccount")
            .field("project_id", &self.project_id)
            .field("client_email", &self.client_email)
            .field("private_key_id", &self.private_key_id)
            .field("token_uri", &self.token_uri)
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}

impl ServiceAccount {
    /// Check the fields the platform requires, returning the first missing one.
    pub fn missing_field(&self) -> Option<&'static str> {
        [
            ("project_id", &self.project_id),
            ("private_key", &self.private_key),
            ("client_email", &self.client_email),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
    }
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}
