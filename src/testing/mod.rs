mod fake_identity_client;

pub use fake_identity_client::FakeIdentityClient;

use crate::adapters::ServiceAccountCredential;

pub const TEST_PROJECT_ID: &str = "demo-lifetracker";
pub const TEST_CLIENT_EMAIL: &str =
    "firebase-adminsdk-test@demo-lifetracker.iam.gserviceaccount.com";

const SERVICE_ACCOUNT_FIXTURE: &str = include_str!("../../tests/fixtures/service_account.json");

/// Fixture service-account JSON with `token_uri` replaced.
pub fn test_service_account_json(token_uri: &str) -> String {
    let mut value: serde_json::Value = serde_json::from_str(SERVICE_ACCOUNT_FIXTURE).unwrap();
    value["token_uri"] = serde_json::Value::String(token_uri.to_string());
    serde_json::to_string_pretty(&value).unwrap()
}

/// Parsed fixture credential whose token exchange goes to `token_uri`.
pub fn test_credential(token_uri: &str) -> ServiceAccountCredential {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fbadmin.private.json");
    std::fs::write(&path, test_service_account_json(token_uri)).unwrap();
    ServiceAccountCredential::load(&path).unwrap()
}
