//! Service-account credential loading from the filesystem.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use jsonwebtoken::EncodingKey;

use crate::domain::{AppError, ServiceAccount};

/// A service account whose private key has been parsed and is ready to sign.
#[derive(Clone)]
pub struct ServiceAccountCredential {
    account: ServiceAccount,
    signing_key: EncodingKey,
}

impl fmt::Debug for ServiceAccountCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccountCredential")
            .field("account", &self.account)
            .field("signing_key", &"[REDACTED]")
            .finish()
    }
}

impl ServiceAccountCredential {
    /// Read, parse, and validate a service-account key file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => {
                AppError::ServiceAccountNotFound { path: path.to_path_buf() }
            }
            _ => invalid(path, format!("cannot read file: {}", e)),
        })?;

        let account: ServiceAccount = serde_json::from_str(&content)
            .map_err(|e| invalid(path, format!("not a valid JSON service account: {}", e)))?;

        Self::from_account(account).map_err(|details| invalid(path, details))
    }

    fn from_account(account: ServiceAccount) -> Result<Self, String> {
        if let Some(field) = account.missing_field() {
            return Err(format!("must contain a string \"{}\" property", field));
        }

        let signing_key = EncodingKey::from_rsa_pem(account.private_key.as_bytes())
            .map_err(|e| format!("failed to parse private key: {}", e))?;

        Ok(Self { account, signing_key })
    }

    pub fn account(&self) -> &ServiceAccount {
        &self.account
    }

    pub fn project_id(&self) -> &str {
        &self.account.project_id
    }

    pub(crate) fn signing_key(&self) -> &EncodingKey {
        &self.signing_key
    }
}

fn invalid(path: &Path, details: String) -> AppError {
    AppError::InvalidServiceAccount { path: PathBuf::from(path), details }
}
