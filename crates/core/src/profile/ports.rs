//! Port interfaces for profile storage
//!
//! These traits define the boundaries between core business logic and
//! infrastructure implementations. The storage collaborator is an external
//! key-value/relational store; core only depends on these shapes.

use async_trait::async_trait;
use folio_domain::{AnalyticsEvent, Experience, Profile, Result, Section, User};

/// Trait for profile persistence and retrieval
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Get profile by ID
    async fn get_by_id(&self, id: &str) -> Result<Option<Profile>>;

    /// Find profile by its unique username.
    ///
    /// Lookup must be case-insensitive; usernames are stored lowercase.
    async fn find_by_username(&self, username: &str) -> Result<Option<Profile>>;

    /// Find profile by its owning user id (1:1)
    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<Profile>>;

    /// Create a new profile.
    ///
    /// Must reject a username that collides case-insensitively with an
    /// existing profile.
    async fn create(&self, profile: Profile) -> Result<()>;

    /// Update an existing profile's scalar fields
    async fn update(&self, profile: Profile) -> Result<()>;

    /// Bump the profile view counter
    async fn increment_views(&self, id: &str) -> Result<()>;
}

/// Trait for section persistence.
///
/// Sections only support replace-all writes: there are no partial or merge
/// updates to individual rows.
#[async_trait]
pub trait SectionRepository: Send + Sync {
    /// All sections for a profile, ordered by ascending `order`
    async fn list_for_profile(&self, profile_id: &str) -> Result<Vec<Section>>;

    /// Atomically delete the existing collection and insert `sections`.
    ///
    /// Implementations must wrap delete and insert in a single storage
    /// transaction so concurrent readers never observe an empty collection
    /// mid-replace.
    async fn replace_for_profile(&self, profile_id: &str, sections: Vec<Section>) -> Result<()>;
}

/// Trait for dedicated experience-record persistence.
///
/// Same replace-all contract as [`SectionRepository`].
#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    /// All experience records for a profile, ordered by ascending `order`
    async fn list_for_profile(&self, profile_id: &str) -> Result<Vec<Experience>>;

    /// Atomically delete the existing set and insert `experiences`
    async fn replace_for_profile(
        &self,
        profile_id: &str,
        experiences: Vec<Experience>,
    ) -> Result<()>;
}

/// Trait for append-only analytics events
#[async_trait]
pub trait AnalyticsRepository: Send + Sync {
    /// Append one event. Events are never updated or deleted.
    async fn record(&self, event: AnalyticsEvent) -> Result<()>;
}

/// Trait for account records synced from the identity provider
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Get user by ID
    async fn get_by_id(&self, id: &str) -> Result<Option<User>>;

    /// Mirror the chosen profile username onto the user record
    async fn set_username(&self, user_id: &str, username: &str) -> Result<()>;
}
