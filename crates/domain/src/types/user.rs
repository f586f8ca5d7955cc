//! User, session, plan and derived viewer-state types
//!
//! Identity comes from an external provider; core only ever reads whether a
//! session is present and which user id it carries. The plan tier is an
//! opaque billing attribute attached to the user record.

use serde::{Deserialize, Serialize};

/// Account record, synced from the identity provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub username: Option<String>,
    pub image: Option<String>,
    pub plan: PlanTier,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Subscription plan tier, supplied by the billing provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    Free,
    Pro,
}

impl PlanTier {
    pub fn is_pro(self) -> bool {
        matches!(self, Self::Pro)
    }
}

impl Default for PlanTier {
    fn default() -> Self {
        Self::Free
    }
}

impl std::fmt::Display for PlanTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Free => f.write_str("free"),
            Self::Pro => f.write_str("pro"),
        }
    }
}

/// Opaque session token from the identity provider.
///
/// Core never inspects session internals beyond presence and the user id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: String,
}

impl Session {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self { user_id: user_id.into() }
    }
}

/// Derived classification of a request's viewer relative to a profile.
///
/// Computed by the state engine from (session presence, session user id,
/// profile owner id, plan tier, published flag). Holds no other state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserState {
    /// No session; only public profiles are visible.
    Visitor,
    /// Signed in without a profile, or inspecting an own unpublished
    /// profile mid-onboarding.
    Registered,
    /// Owns a published profile on the free plan.
    FreeUser,
    /// Owns a published profile on the pro plan.
    ProUser,
    /// Signed in, viewing a profile owned by someone else.
    PublicViewer,
}

impl UserState {
    /// User-friendly label for the state.
    pub fn label(self) -> &'static str {
        match self {
            Self::Visitor => "Visitor",
            Self::Registered => "Getting Started",
            Self::FreeUser => "Free User",
            Self::ProUser => "Pro User",
            Self::PublicViewer => "Viewer",
        }
    }
}
