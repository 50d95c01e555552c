//! Assign or revoke roles on a single account.

use tracing::debug;

use crate::app::AppContext;
use crate::domain::{AppError, RoleFlags, RoleRecord, UserUid};
use crate::ports::IdentityClient;

/// Resolve `flags` and write the result as the full custom-claims object of `uid`.
///
/// Conflicting flags are rejected before the identity platform is contacted.
pub fn execute<C: IdentityClient>(
    ctx: &AppContext<C>,
    uid: &UserUid,
    flags: RoleFlags,
) -> Result<RoleRecord, AppError> {
    flags.validate()?;
    let roles = flags.resolve();

    debug!(uid = %uid, %roles, "resolved roles");
    ctx.identity().set_custom_user_claims(uid, &roles)?;
    Ok(roles)
}
