//! OAuth2 access tokens for a service account (JWT bearer grant).

use jsonwebtoken::{Algorithm, Header};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::service_account_file::ServiceAccountCredential;
use crate::domain::AppError;

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const TOKEN_LIFETIME_SECS: i64 = 3600;

const SCOPES: [&str; 5] = [
    "https://www.googleapis.com/auth/cloud-platform",
    "https://www.googleapis.com/auth/firebase.database",
    "https://www.googleapis.com/auth/firebase.messaging",
    "https://www.googleapis.com/auth/identitytoolkit",
    "https://www.googleapis.com/auth/userinfo.email",
];

#[derive(Debug, Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: String,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct TokenErrorResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
}

/// Sign the assertion JWT for `credential`, valid from `issued_at` for one hour.
pub(crate) fn sign_assertion(
    credential: &ServiceAccountCredential,
    issued_at: i64,
) -> Result<String, AppError> {
    let account = credential.account();
    let mut header = Header::new(Algorithm::RS256);
    header.kid = account.private_key_id.clone();

    let claims = AssertionClaims {
        iss: &account.client_email,
        scope: SCOPES.join(" "),
        aud: &account.token_uri,
        iat: issued_at,
        exp: issued_at + TOKEN_LIFETIME_SECS,
    };

    jsonwebtoken::encode(&header, &claims, credential.signing_key())
        .map_err(|e| AppError::Credential(format!("failed to sign assertion: {}", e)))
}

/// Exchange a signed assertion for an access token at the account's `token_uri`.
pub fn fetch_access_token(
    client: &Client,
    credential: &ServiceAccountCredential,
) -> Result<String, AppError> {
    let token_uri = &credential.account().token_uri;
    let assertion = sign_assertion(credential, chrono::Utc::now().timestamp())?;

    debug!(token_uri = %token_uri, "requesting access token");
    let response = client
        .post(token_uri)
        .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
        .send()
        .map_err(|e| AppError::Credential(format!("token request failed: {}", e)))?;

    let status = response.status();
    if status.is_success() {
        let token: TokenResponse = response
            .json()
            .map_err(|e| AppError::Credential(format!("failed to parse token response: {}", e)))?;
        return Ok(token.access_token);
    }

    let body = response.text().unwrap_or_default();
    let details = serde_json::from_str::<TokenErrorResponse>(&body)
        .ok()
        .and_then(|err| err.error_description.or(err.error))
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
    Err(AppError::Credential(details))
}
