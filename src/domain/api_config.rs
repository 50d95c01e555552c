use url::Url;

use super::AppError;

/// Environment variable pointing the tool at a local Auth emulator (`host:port`).
pub const AUTH_EMULATOR_HOST_ENV: &str = "FIREBASE_AUTH_EMULATOR_HOST";

/// How requests to the identity platform are authorized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BearerMode {
    /// Exchange a signed service-account assertion for an OAuth2 access token.
    ServiceAccount,
    /// Local emulator; accepts the fixed `owner` token.
    Emulator,
}

/// Identity Toolkit endpoint configuration.
#[derive(Debug, Clone)]
pub struct IdentityApiConfig {
    /// Base URL ending in `/v1/`.
    pub api_base: Url,
    pub bearer: BearerMode,
}

impl Default for IdentityApiConfig {
    fn default() -> Self {
        Self { api_base: default_api_base(), bearer: BearerMode::ServiceAccount }
    }
}

impl IdentityApiConfig {
    /// Configuration for an emulator listening on `host` (`host:port`).
    pub fn emulator(host: &str) -> Result<Self, AppError> {
        let api_base = Url::parse(&format!("http://{}/identitytoolkit.googleapis.com/v1/", host))
            .map_err(|e| {
                AppError::config_error(format!(
                    "Invalid {} '{}': {}",
                    AUTH_EMULATOR_HOST_ENV, host, e
                ))
            })?;
        Ok(Self { api_base, bearer: BearerMode::Emulator })
    }

    /// Build from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        match std::env::var(AUTH_EMULATOR_HOST_ENV) {
            Ok(host) if !host.trim().is_empty() => Self::emulator(host.trim()),
            _ => Ok(Self::default()),
        }
    }

    /// Endpoint for `accounts:update` within a project.
    pub fn update_account_url(&self, project_id: &str) -> Result<Url, AppError> {
        self.api_base.join(&format!("projects/{}/accounts:update", project_id)).map_err(|e| {
            AppError::config_error(format!("Invalid project id '{}': {}", project_id, e))
        })
    }
}

fn default_api_base() -> Url {
    Url::parse("https://identitytoolkit.googleapis.com/v1/").expect("static URL is valid")
}
