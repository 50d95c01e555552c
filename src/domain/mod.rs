pub mod api_config;
pub mod error;
pub mod role_record;
pub mod service_account;
pub mod user_uid;

pub use api_config::{AUTH_EMULATOR_HOST_ENV, BearerMode, IdentityApiConfig};
pub use error::AppError;
pub use role_record::{RoleFlags, RoleRecord};
pub use service_account::{DEFAULT_SERVICE_ACCOUNT_FILE, ServiceAccount};
pub use user_uid::UserUid;
