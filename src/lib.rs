//! lifetracker-admin: grant or revoke Lifetracker roles through Firebase custom claims.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod logger;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::path::PathBuf;

use owo_colors::OwoColorize;
use tracing::debug;

use adapters::{HttpIdentityClient, ServiceAccountCredential};
use app::{AppContext, commands::set_roles as set_roles_command};

pub use domain::{
    AppError, DEFAULT_SERVICE_ACCOUNT_FILE, IdentityApiConfig, RoleFlags, RoleRecord, UserUid,
};

/// Options for a single role assignment.
#[derive(Debug, Clone)]
pub struct SetRolesOptions {
    /// Target account identifier.
    pub user_uid: String,
    /// Service-account key file.
    pub service_account: PathBuf,
    /// Requested role flags.
    pub flags: RoleFlags,
    /// Identity platform endpoint.
    pub api: IdentityApiConfig,
}

/// Assign or revoke roles for one user, reporting progress on the console.
///
/// Flags and the user identifier are validated before the credential file is read,
/// and the credential is loaded before any network request is made.
pub fn set_roles(options: SetRolesOptions) -> Result<RoleRecord, AppError> {
    options.flags.validate()?;
    let uid = UserUid::new(&options.user_uid)?;

    debug!(path = %options.service_account.display(), "loading service account");
    let credential = ServiceAccountCredential::load(&options.service_account)?;
    debug!(project_id = credential.project_id(), "service account loaded");

    let client = HttpIdentityClient::new(credential, options.api)?;
    let ctx = AppContext::new(client);

    let progress = options.flags.progress_text();
    println!("{}", progress.cyan());

    match set_roles_command::execute(&ctx, &uid, options.flags) {
        Ok(roles) => {
            println!("{}", format!("✔ {} Done!", progress).green());
            println!("{} {}", uid, roles);
            Ok(roles)
        }
        Err(e) => {
            eprintln!("{}", format!("✖ {}", progress).red());
            Err(e)
        }
    }
}
