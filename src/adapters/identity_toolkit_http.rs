//! Identity Toolkit client implementation using reqwest.

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::access_token::fetch_access_token;
use super::service_account_file::ServiceAccountCredential;
use crate::domain::{AppError, BearerMode, IdentityApiConfig, RoleRecord, UserUid};
use crate::ports::IdentityClient;

const EMULATOR_BEARER_TOKEN: &str = "owner";

/// Authenticated session with the identity platform.
#[derive(Debug, Clone)]
pub struct HttpIdentityClient {
    credential: ServiceAccountCredential,
    config: IdentityApiConfig,
    client: Client,
}

impl HttpIdentityClient {
    /// Create a session for `credential` against the configured endpoint.
    pub fn new(
        credential: ServiceAccountCredential,
        config: IdentityApiConfig,
    ) -> Result<Self, AppError> {
        let client = Client::builder()
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { credential, config, client })
    }

    fn bearer_token(&self) -> Result<String, AppError> {
        match self.config.bearer {
            BearerMode::Emulator => Ok(EMULATOR_BEARER_TOKEN.to_string()),
            BearerMode::ServiceAccount => fetch_access_token(&self.client, &self.credential),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateAccountRequest<'a> {
    local_id: &'a str,
    custom_attributes: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateAccountResponse {
    #[serde(default)]
    local_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
}

impl IdentityClient for HttpIdentityClient {
    fn set_custom_user_claims(&self, uid: &UserUid, roles: &RoleRecord) -> Result<(), AppError> {
        let url = self.config.update_account_url(self.credential.project_id())?;
        let request =
            UpdateAccountRequest { local_id: uid.as_str(), custom_attributes: roles.to_claims_json()? };
        let token = self.bearer_token()?;

        debug!(%url, uid = %uid, "updating custom claims");
        let response = self
            .client
            .post(url)
            .bearer_auth(token)
            .json(&request)
            .send()
            .map_err(|e| AppError::Identity {
                code: "NETWORK_ERROR".to_string(),
                message: format!("Failed to reach the identity platform: {}", e),
            })?;

        let status = response.status();
        debug!(status = status.as_u16(), "accounts:update responded");

        if status.is_success() {
            let body: UpdateAccountResponse = response.json().map_err(|e| AppError::Identity {
                code: "INTERNAL_ERROR".to_string(),
                message: format!("Failed to parse response: {}", e),
            })?;

            return match body.local_id {
                Some(id) if !id.is_empty() => Ok(()),
                _ => Err(AppError::Identity {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "INTERNAL ASSERT FAILED: Unable to set custom user claims".to_string(),
                }),
            };
        }

        let text = response.text().unwrap_or_default();
        Err(match serde_json::from_str::<ApiErrorResponse>(&text) {
            Ok(api_error) if !api_error.error.message.is_empty() => {
                map_server_error(&api_error.error.message)
            }
            _ => AppError::Identity {
                code: format!("HTTP_{}", status.as_u16()),
                message: format!("Identity platform request failed ({}): {}", status.as_u16(), text),
            },
        })
    }
}

/// Translate a server error message of the form `CODE` or `CODE : detail`.
fn map_server_error(raw: &str) -> AppError {
    let (code, detail) = match raw.split_once(':') {
        Some((code, detail)) => (code.trim(), Some(detail.trim()).filter(|d| !d.is_empty())),
        None => (raw.trim(), None),
    };

    let known = match code {
        "USER_NOT_FOUND" => {
            Some("There is no user record corresponding to the provided identifier.")
        }
        "INVALID_LOCAL_ID" | "INVALID_UID" => {
            Some("The uid must be a non-empty string with at most 128 characters.")
        }
        "PERMISSION_DENIED" | "INSUFFICIENT_PERMISSION" => Some(
            "The service account does not have the required permissions to update users.",
        ),
        "CLAIMS_TOO_LARGE" => Some("Developer claims maximum payload size exceeded."),
        "FORBIDDEN_CLAIM" => Some("The specified developer claim is reserved and cannot be used."),
        "PROJECT_NOT_FOUND" => {
            Some("No Firebase project was found for the provided credential.")
        }
        _ => None,
    };

    let message = match (known, detail) {
        (Some(text), Some(detail)) => format!("{} ({})", text, detail),
        (Some(text), None) => text.to_string(),
        (None, _) => raw.to_string(),
    };

    AppError::Identity { code: code.to_string(), message }
}
