//! Identity platform port definition.

use crate::domain::{AppError, RoleRecord, UserUid};

/// Port for identity platform account mutations.
pub trait IdentityClient {
    /// Replace the custom claims on `uid` with `roles`.
    ///
    /// Claims not represented in `roles` are erased.
    fn set_custom_user_claims(&self, uid: &UserUid, roles: &RoleRecord) -> Result<(), AppError>;
}
