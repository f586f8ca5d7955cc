//! User state engine
//!
//! A finite classifier over four inputs: session presence, session user id,
//! profile owner id, plan tier and published flag. Pure and total; holds no
//! state across calls. The rule order below is fixed and mirrors the
//! authorization semantics everywhere else in the system.

use folio_domain::{PlanTier, Session, UserState};

/// Derive the viewer state for a request.
///
/// Rule order:
/// 1. session present, owner known, ids differ -> `PublicViewer`
/// 2. no session -> `Visitor`
/// 3. session owns the profile in view -> `Registered` while unpublished,
///    otherwise `ProUser`/`FreeUser` by plan
/// 4. no profile in view at all (pure account context) -> `Registered`
pub fn derive_user_state(
    session: Option<&Session>,
    profile_owner_id: Option<&str>,
    plan: Option<PlanTier>,
    published: bool,
) -> UserState {
    if let (Some(session), Some(owner_id)) = (session, profile_owner_id) {
        if session.user_id != owner_id {
            return UserState::PublicViewer;
        }
    }

    let Some(session) = session else {
        return UserState::Visitor;
    };

    match profile_owner_id {
        Some(owner_id) if session.user_id == owner_id => {
            if !published {
                UserState::Registered
            } else if plan == Some(PlanTier::Pro) {
                UserState::ProUser
            } else {
                UserState::FreeUser
            }
        }
        // No profile in view, or an owner id that did not match (unreachable
        // after rule 1); both collapse to the account-context state.
        _ => UserState::Registered,
    }
}
