//! Role flags and the custom-claims record they resolve to.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::AppError;

/// Role flags as given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoleFlags {
    pub observer: bool,
    pub content_manager: bool,
    pub revoke: bool,
}

impl RoleFlags {
    /// Reject revoke combined with any grant flag.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.revoke && (self.observer || self.content_manager) {
            return Err(AppError::ConflictingRoleFlags);
        }
        Ok(())
    }

    /// Resolve the flags into the claims record sent to the identity platform.
    ///
    /// Content manager implies observer. Revoke is applied last and wins.
    pub fn resolve(&self) -> RoleRecord {
        let mut roles = RoleRecord::default();

        if self.observer {
            roles.observer = true;
        }

        if self.content_manager {
            roles.observer = true;
            roles.content_manager = true;
        }

        if self.revoke {
            roles = RoleRecord::default();
        }

        roles
    }

    /// Progress text shown while the claims update is in flight.
    pub fn progress_text(&self) -> String {
        if self.revoke {
            return "Revoking roles...".to_string();
        }

        let mut granted = Vec::new();
        if self.observer || self.content_manager {
            granted.push("observer");
        }
        if self.content_manager {
            granted.push("& content manager");
        }

        if granted.is_empty() {
            "Setting roles...".to_string()
        } else {
            format!("Setting roles {}...", granted.join(" "))
        }
    }
}

/// Custom claims written onto the target account.
///
/// Invariant: `content_manager` implies `observer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleRecord {
    pub observer: bool,
    pub content_manager: bool,
}

impl RoleRecord {
    /// Serialize as the JSON string the identity platform stores as custom attributes.
    pub fn to_claims_json(&self) -> Result<String, AppError> {
        serde_json::to_string(self)
            .map_err(|e| AppError::config_error(format!("Failed to serialize claims: {}", e)))
    }
}

impl fmt::Display for RoleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "observer={} contentManager={}", self.observer, self.content_manager)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn flags(observer: bool, content_manager: bool, revoke: bool) -> RoleFlags {
        RoleFlags { observer, content_manager, revoke }
    }

    #[test]
    fn no_flags_resolve_to_no_roles() {
        let roles = flags(false, false, false).resolve();
        assert_eq!(roles, RoleRecord { observer: false, content_manager: false });
    }

    #[test]
    fn observer_alone() {
        let roles = flags(true, false, false).resolve();
        assert_eq!(roles, RoleRecord { observer: true, content_manager: false });
    }

    #[test]
    fn content_manager_escalates_to_observer() {
        let roles = flags(false, true, false).resolve();
        assert_eq!(roles, RoleRecord { observer: true, content_manager: true });
    }

    #[test]
    fn revoke_alone_clears_roles() {
        let roles = flags(false, false, true).resolve();
        assert_eq!(roles, RoleRecord::default());
    }

    #[test]
    fn revoke_with_observer_is_rejected() {
        assert!(matches!(flags(true, false, true).validate(), Err(AppError::ConflictingRoleFlags)));
    }

    #[test]
    fn revoke_with_content_manager_is_rejected() {
        assert!(matches!(flags(false, true, true).validate(), Err(AppError::ConflictingRoleFlags)));
    }

    #[test]
    fn grant_flags_together_are_accepted() {
        assert!(flags(true, true, false).validate().is_ok());
    }

    #[test]
    fn claims_json_uses_camel_case() {
        let json = RoleRecord { observer: true, content_manager: true }.to_claims_json().unwrap();
        assert_eq!(json, r#"{"observer":true,"contentManager":true}"#);
    }

    #[test]
    fn progress_text_matches_flags() {
        assert_eq!(flags(false, false, true).progress_text(), "Revoking roles...");
        assert_eq!(flags(true, false, false).progress_text(), "Setting roles observer...");
        assert_eq!(
            flags(false, true, false).progress_text(),
            "Setting roles observer & content manager..."
        );
        assert_eq!(flags(false, false, false).progress_text(), "Setting roles...");
    }

    proptest! {
        #[test]
        fn resolve_is_deterministic(o in any::<bool>(), c in any::<bool>(), r in any::<bool>()) {
            let f = flags(o, c, r);
            prop_assert_eq!(f.resolve(), f.resolve());
        }

        #[test]
        fn content_manager_implies_observer(o in any::<bool>(), c in any::<bool>(), r in any::<bool>()) {
            let roles = flags(o, c, r).resolve();
            prop_assert!(!roles.content_manager || roles.observer);
        }

        #[test]
        fn revoke_always_wins(o in any::<bool>(), c in any::<bool>()) {
            prop_assert_eq!(flags(o, c, true).resolve(), RoleRecord::default());
        }

        #[test]
        fn conflicts_detected_iff_revoke_and_grant(o in any::<bool>(), c in any::<bool>(), r in any::<bool>()) {
            let rejected = flags(o, c, r).validate().is_err();
            prop_assert_eq!(rejected, r && (o || c));
        }
    }
}
