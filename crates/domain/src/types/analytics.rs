//! Append-only analytics events
//!
//! Events are never updated or deleted. Recording is fire-and-forget: a
//! failed write must not block or fail the read path that triggered it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One recorded profile event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsEvent {
    pub id: String,
    pub profile_id: String,
    /// Open string; `"view"` and `"click"` are the well-known values.
    pub event_type: String,
    /// Unix epoch seconds.
    pub occurred_at: i64,
    pub referrer: Option<String>,
    pub user_agent: Option<String>,
}

impl AnalyticsEvent {
    /// Create an event with a fresh id.
    pub fn new(
        profile_id: impl Into<String>,
        event_type: impl Into<String>,
        occurred_at: i64,
        meta: ViewMeta,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            profile_id: profile_id.into(),
            event_type: event_type.into(),
            occurred_at,
            referrer: meta.referrer,
            user_agent: meta.user_agent,
        }
    }
}

/// Optional request metadata attached to a recorded view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewMeta {
    pub referrer: Option<String>,
    pub user_agent: Option<String>,
}
