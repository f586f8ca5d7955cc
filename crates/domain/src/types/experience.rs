//! Dedicated experience records (generation-3 work history)
//!
//! Distinct from the `experience` *section* type: these rows live in their
//! own table, are capped at [`crate::constants::MAX_EXPERIENCES_PER_PROFILE`]
//! per profile, and render as an always-appended block after section-driven
//! content.

use serde::{Deserialize, Serialize};

/// One stored work-history entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub profile_id: String,
    pub company: String,
    pub role: String,
    /// Year-month granularity, e.g. `"2023-04"`.
    pub start_date: String,
    /// `None` means "current position".
    pub end_date: Option<String>,
    /// Markdown body; empty string by default.
    pub description: String,
    /// Ordered, deduplicated, no blank entries.
    pub tech_stack: Vec<String>,
    pub location: Option<String>,
    /// Assigned by array position on write; never caller-controlled.
    pub order: i64,
}

/// Caller-supplied experience in a replace-all update.
///
/// `id` and `order` from the caller are not trusted: ids are regenerated and
/// order is reassigned by array position.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceDraft {
    #[serde(default)]
    pub id: Option<String>,
    pub company: String,
    pub role: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub order: i64,
}

impl ExperienceDraft {
    /// Tech stack with blanks discarded and duplicates suppressed,
    /// preserving first-occurrence order.
    pub fn normalized_tech_stack(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for entry in &self.tech_stack {
            let trimmed = entry.trim();
            if trimmed.is_empty() {
                continue;
            }
            if seen.iter().any(|s: &String| s == trimmed) {
                continue;
            }
            seen.push(trimmed.to_string());
        }
        seen
    }
}
