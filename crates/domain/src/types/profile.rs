//! Profile record and its write-side documents
//!
//! One profile per user. The record carries all three schema generations at
//! once: the generation-1 free-text document (`content`), generation-2 typed
//! sections (stored separately, see [`super::section`]), and generation-3
//! profile-level structured fields. Read-time priority between overlapping
//! fields is encoded in one place, the field resolver in `folio-core`.

use serde::{Deserialize, Serialize};

/// The owned, publicly-addressable record representing one user's page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    /// Owning user id (1:1).
    pub user_id: String,
    /// Unique lowercase public key for the `/u/{username}` URL. Immutable
    /// after creation; collisions are rejected case-insensitively at write.
    pub username: String,
    pub published: bool,
    /// Generation-1 free-text MDX document with a frontmatter block.
    pub content: Option<String>,
    // Generation-3 identity fields
    pub display_name: Option<String>,
    pub headline: Option<String>,
    pub location: Option<String>,
    pub profile_photo_url: Option<String>,
    pub accent_color: Option<String>,
    pub layout_style: Option<String>,
    // Social links: always either absent or an absolute URL
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub website_url: Option<String>,
    pub twitter_url: Option<String>,
    // SEO overrides
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub seo_keywords: Option<String>,
    /// Pro-gated cosmetic flag: suppress the branding footer.
    pub remove_branding: bool,
    pub views: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Profile {
    /// Create an unpublished profile shell for a new user.
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        username: impl Into<String>,
        now: i64,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            username: username.into(),
            published: false,
            content: None,
            display_name: None,
            headline: None,
            location: None,
            profile_photo_url: None,
            accent_color: None,
            layout_style: None,
            github_url: None,
            linkedin_url: None,
            website_url: None,
            twitter_url: None,
            seo_title: None,
            seo_description: None,
            seo_keywords: None,
            remove_branding: false,
            views: 0,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Input document for profile creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProfile {
    pub username: String,
    #[serde(default)]
    pub content: Option<String>,
}

/// Partial-update document for a profile.
///
/// Every field is independently omittable. Plain `Option<T>` fields cannot
/// be cleared, only replaced; `Option<Option<T>>` fields distinguish
/// "absent" from "set to null" (double-option serde mapping), and the
/// validator additionally normalizes empty strings to null for URL fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(
        default,
        with = "serde_with::rust::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub profile_photo_url: Option<Option<String>>,
    #[serde(
        default,
        with = "serde_with::rust::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub accent_color: Option<Option<String>>,
    #[serde(
        default,
        with = "serde_with::rust::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub layout_style: Option<Option<String>>,
    #[serde(
        default,
        with = "serde_with::rust::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub github_url: Option<Option<String>>,
    #[serde(
        default,
        with = "serde_with::rust::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub linkedin_url: Option<Option<String>>,
    #[serde(
        default,
        with = "serde_with::rust::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub website_url: Option<Option<String>>,
    #[serde(
        default,
        with = "serde_with::rust::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub twitter_url: Option<Option<String>>,
    #[serde(
        default,
        with = "serde_with::rust::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub seo_title: Option<Option<String>>,
    #[serde(
        default,
        with = "serde_with::rust::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub seo_description: Option<Option<String>>,
    #[serde(
        default,
        with = "serde_with::rust::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub seo_keywords: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remove_branding: Option<bool>,
    /// Full replacement set for dedicated experience records (max 3).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experiences: Option<Vec<super::ExperienceDraft>>,
    /// Full replacement set for typed sections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<super::SectionDraft>>,
}

impl ProfileUpdate {
    /// True when at least one recognized field is present.
    ///
    /// A document with no recognized fields is rejected as a no-op error,
    /// never silently accepted.
    pub fn has_updates(&self) -> bool {
        self.content.is_some()
            || self.published.is_some()
            || self.display_name.is_some()
            || self.headline.is_some()
            || self.location.is_some()
            || self.profile_photo_url.is_some()
            || self.accent_color.is_some()
            || self.layout_style.is_some()
            || self.github_url.is_some()
            || self.linkedin_url.is_some()
            || self.website_url.is_some()
            || self.twitter_url.is_some()
            || self.seo_title.is_some()
            || self.seo_description.is_some()
            || self.seo_keywords.is_some()
            || self.remove_branding.is_some()
            || self.experiences.is_some()
            || self.sections.is_some()
    }
}
