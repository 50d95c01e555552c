use std::sync::{Arc, Mutex};

use crate::domain::{AppError, RoleRecord, UserUid};
use crate::ports::IdentityClient;

#[derive(Clone, Default)]
pub struct FakeIdentityClient {
    pub updates: Arc<Mutex<Vec<(String, RoleRecord)>>>,
    pub failure: Option<String>,
}

impl FakeIdentityClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self { failure: Some(message.into()), ..Self::default() }
    }

    pub fn get_updates(&self) -> Vec<(String, RoleRecord)> {
        self.updates.lock().unwrap().clone()
    }
}

impl IdentityClient for FakeIdentityClient {
    fn set_custom_user_claims(&self, uid: &UserUid, roles: &RoleRecord) -> Result<(), AppError> {
        self.updates.lock().unwrap().push((uid.to_string(), *roles));
        match &self.failure {
            Some(message) => {
                Err(AppError::Identity { code: "FAKE".to_string(), message: message.clone() })
            }
            None => Ok(()),
        }
    }
}
