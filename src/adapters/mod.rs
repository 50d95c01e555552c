pub mod access_token;
pub mod identity_toolkit_http;
pub mod service_account_file;

pub use identity_toolkit_http::HttpIdentityClient;
pub use service_account_file::ServiceAccountCredential;
