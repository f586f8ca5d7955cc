//! Feature permission gate
//!
//! Maps a (derived user state, feature id) pair to an allow/deny decision
//! plus a human-readable reason on denial. The gate is configured once with
//! an immutable [`AccessConfig`] and holds no other state.
//!
//! Feature ids outside both configured lists default to allowed for any
//! signed-in state. That fail-open behaviour is intentional, matches the
//! platform as shipped, and is pinned by tests; tightening it is a policy
//! change, not a refactor.

use folio_domain::constants::OWNER_EDIT_PREFIX;
use folio_domain::{AccessConfig, UserState};
use serde::{Deserialize, Serialize};

/// Outcome of a gate check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureDecision {
    pub feature_id: String,
    pub allowed: bool,
    /// Present only on denial.
    pub reason: Option<String>,
}

impl FeatureDecision {
    fn allow(feature_id: &str) -> Self {
        Self { feature_id: feature_id.to_string(), allowed: true, reason: None }
    }

    fn deny(feature_id: &str, reason: String) -> Self {
        Self { feature_id: feature_id.to_string(), allowed: false, reason: Some(reason) }
    }
}

/// Permission gate over the configured feature lists.
#[derive(Debug, Clone)]
pub struct FeatureGate {
    config: AccessConfig,
}

impl FeatureGate {
    /// Build a gate from an immutable access configuration.
    pub fn new(config: AccessConfig) -> Self {
        Self { config }
    }

    /// Decide whether `state` may use `feature_id`.
    ///
    /// `is_owner` is true when the requester owns the content being acted
    /// on; owners may always use `edit:`-prefixed features regardless of
    /// plan.
    pub fn check(&self, state: UserState, feature_id: &str, is_owner: bool) -> FeatureDecision {
        if is_owner && feature_id.starts_with(OWNER_EDIT_PREFIX) {
            return FeatureDecision::allow(feature_id);
        }

        if self.config.is_pro_feature(feature_id) {
            return if state == UserState::ProUser {
                FeatureDecision::allow(feature_id)
            } else {
                FeatureDecision::deny(feature_id, deny_reason(state))
            };
        }

        if self.config.is_free_feature(feature_id) {
            return if matches!(
                state,
                UserState::FreeUser | UserState::ProUser | UserState::Registered
            ) {
                FeatureDecision::allow(feature_id)
            } else {
                FeatureDecision::deny(feature_id, deny_reason(state))
            };
        }

        // Unknown feature ids: allowed for any signed-in state (fail-open).
        if state == UserState::Visitor {
            FeatureDecision::deny(feature_id, deny_reason(state))
        } else {
            FeatureDecision::allow(feature_id)
        }
    }
}

/// Deny message selected by the viewer state.
fn deny_reason(state: UserState) -> String {
    match state {
        UserState::Visitor | UserState::PublicViewer => {
            "Log in to use this feature".to_string()
        }
        UserState::Registered => "Publish your profile first".to_string(),
        UserState::FreeUser | UserState::ProUser => {
            "This feature is available on the Pro plan".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> FeatureGate {
        FeatureGate::new(AccessConfig::default())
    }

    #[test]
    fn pro_user_is_allowed_every_pro_feature() {
        let gate = gate();
        for feature in AccessConfig::default().pro_features {
            let decision = gate.check(UserState::ProUser, &feature, false);
            assert!(decision.allowed, "{feature} should be allowed for pro_user");
        }
    }

    #[test]
    fn free_user_is_denied_pro_features_with_upsell_reason() {
        let decision = gate().check(UserState::FreeUser, "custom-domain", false);
        assert!(!decision.allowed);
        assert_eq!(decision.reason.as_deref(), Some("This feature is available on the Pro plan"));
    }

    #[test]
    fn registered_user_gets_publish_first_reason() {
        let decision = gate().check(UserState::Registered, "analytics-dashboard", false);
        assert!(!decision.allowed);
        assert_eq!(decision.reason.as_deref(), Some("Publish your profile first"));
    }

    #[test]
    fn free_features_open_to_registered_and_both_plans() {
        let gate = gate();
        for state in [UserState::Registered, UserState::FreeUser, UserState::ProUser] {
            assert!(gate.check(state, "basic-sections", false).allowed);
        }
    }

    #[test]
    fn visitor_is_denied_everything() {
        let gate = gate();
        for feature in ["custom-domain", "basic-seo", "some-unknown-feature"] {
            let decision = gate.check(UserState::Visitor, feature, false);
            assert!(!decision.allowed, "{feature} should be denied for visitors");
            assert_eq!(decision.reason.as_deref(), Some("Log in to use this feature"));
        }
    }

    #[test]
    fn public_viewer_is_denied_pro_features_with_login_reason() {
        let decision = gate().check(UserState::PublicViewer, "recruiter-mode", false);
        assert!(!decision.allowed);
        assert_eq!(decision.reason.as_deref(), Some("Log in to use this feature"));
    }

    // Pins the fail-open default for unknown feature ids. Security-relevant:
    // if this test starts failing, the default-allow policy changed.
    #[test]
    fn unknown_features_default_to_allowed_for_signed_in_states() {
        let gate = gate();
        for state in [
            UserState::Registered,
            UserState::FreeUser,
            UserState::ProUser,
            UserState::PublicViewer,
        ] {
            assert!(gate.check(state, "brand-new-feature", false).allowed);
        }
    }

    #[test]
    fn owner_may_always_edit_own_content() {
        let gate = gate();
        for state in [UserState::Registered, UserState::FreeUser] {
            assert!(gate.check(state, "edit:sections", true).allowed);
        }
        // Non-owners do not get the edit override
        assert!(!gate.check(UserState::Visitor, "edit:sections", false).allowed);
    }
}
