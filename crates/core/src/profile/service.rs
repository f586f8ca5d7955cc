//! Profile service - core business logic
//!
//! The write path (create, partial update with replace-all collections) and
//! the public read path (resolve, render, best-effort analytics) over the
//! storage ports. All authorization checks happen here, before any mutation.

use std::sync::Arc;

use chrono::Utc;
use folio_domain::constants::EVENT_TYPE_VIEW;
use folio_domain::{
    AccessConfig, AnalyticsEvent, Experience, FolioError, NewProfile, Profile, ProfileUpdate,
    Result, Section, Session, SiteConfig, UserState, ViewMeta,
};
use tracing::{info, warn};
use uuid::Uuid;

use super::ports::{
    AnalyticsRepository, ExperienceRepository, ProfileRepository, SectionRepository,
    UserRepository,
};
use super::validation::{validate_update, validate_username};
use crate::access::gate::FeatureGate;
use crate::access::state::derive_user_state;
use crate::render::{render_profile, RenderedProfile};

/// Immutable configuration handed to the service at startup.
#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
    pub site: SiteConfig,
    pub access: AccessConfig,
}

/// A profile with its ordered collections, as returned to editors.
#[derive(Debug, Clone)]
pub struct ProfileBundle {
    pub profile: Profile,
    pub sections: Vec<Section>,
    pub experiences: Vec<Experience>,
}

/// Outcome of a public profile view.
#[derive(Debug, Clone)]
pub struct ProfileView {
    /// Derived state of the requester relative to this profile.
    pub state: UserState,
    pub profile: Profile,
    pub rendered: RenderedProfile,
}

/// Profile use cases over the storage ports.
pub struct ProfileService {
    profiles: Arc<dyn ProfileRepository>,
    sections: Arc<dyn SectionRepository>,
    experiences: Arc<dyn ExperienceRepository>,
    analytics: Arc<dyn AnalyticsRepository>,
    users: Arc<dyn UserRepository>,
    gate: FeatureGate,
    site: SiteConfig,
}

impl ProfileService {
    /// Create a new profile service.
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        sections: Arc<dyn SectionRepository>,
        experiences: Arc<dyn ExperienceRepository>,
        analytics: Arc<dyn AnalyticsRepository>,
        users: Arc<dyn UserRepository>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            profiles,
            sections,
            experiences,
            analytics,
            users,
            gate: FeatureGate::new(config.access),
            site: config.site,
        }
    }

    /// Borrow the configured feature gate.
    pub fn gate(&self) -> &FeatureGate {
        &self.gate
    }

    /// Create the caller's profile.
    ///
    /// One profile per user; the username becomes the immutable public URL
    /// key and is checked for case-insensitive collisions before creation.
    pub async fn create_profile(&self, session: &Session, input: NewProfile) -> Result<Profile> {
        validate_username(&input.username)?;

        if self.profiles.find_by_username(&input.username).await?.is_some() {
            return Err(FolioError::Conflict("Username is already taken".into()));
        }
        if self.profiles.find_by_user_id(&session.user_id).await?.is_some() {
            return Err(FolioError::Conflict("Profile already exists".into()));
        }

        let now = Utc::now().timestamp();
        let mut profile =
            Profile::new(Uuid::new_v4().to_string(), &session.user_id, &input.username, now);
        profile.content = input.content;

        self.profiles.create(profile.clone()).await?;
        self.users.set_username(&session.user_id, &profile.username).await?;

        info!(profile_id = %profile.id, username = %profile.username, "profile created");
        Ok(profile)
    }

    /// Load a profile with its ordered collections (editor read path).
    pub async fn get_profile(&self, profile_id: &str) -> Result<ProfileBundle> {
        let profile = self
            .profiles
            .get_by_id(profile_id)
            .await?
            .ok_or_else(|| FolioError::NotFound("Profile not found".into()))?;
        let sections = self.sections.list_for_profile(profile_id).await?;
        let experiences = self.experiences.list_for_profile(profile_id).await?;
        Ok(ProfileBundle { profile, sections, experiences })
    }

    /// Apply a partial update plus full replacement of sections and/or
    /// experiences.
    ///
    /// Owner-only. Validation (including the experience cap) runs before any
    /// mutation; a request with no recognized field is rejected as a no-op.
    /// Supplied experiences are re-ordered by array position; supplied
    /// sections keep caller order. Each collection replacement is atomic at
    /// the storage layer.
    pub async fn update_profile(
        &self,
        session: &Session,
        profile_id: &str,
        update: ProfileUpdate,
    ) -> Result<ProfileBundle> {
        let mut profile = self
            .profiles
            .get_by_id(profile_id)
            .await?
            .ok_or_else(|| FolioError::NotFound("Profile not found".into()))?;

        if profile.user_id != session.user_id {
            return Err(FolioError::Forbidden("Only the owner may update this profile".into()));
        }

        let update = validate_update(update)?;

        apply_scalar_updates(&mut profile, &update);
        profile.updated_at = Utc::now().timestamp();
        self.profiles.update(profile.clone()).await?;

        if let Some(drafts) = update.experiences {
            let records: Vec<Experience> = drafts
                .iter()
                .enumerate()
                .map(|(index, draft)| Experience {
                    id: Uuid::new_v4().to_string(),
                    profile_id: profile.id.clone(),
                    company: draft.company.clone(),
                    role: draft.role.clone(),
                    start_date: draft.start_date.clone(),
                    end_date: draft.end_date.clone(),
                    description: draft.description.clone(),
                    tech_stack: draft.normalized_tech_stack(),
                    location: draft.location.clone(),
                    // Array position wins; caller-supplied order is untrusted
                    order: index as i64,
                })
                .collect();
            self.experiences.replace_for_profile(&profile.id, records).await?;
        }

        if let Some(drafts) = update.sections {
            let rows: Vec<Section> = drafts
                .into_iter()
                .map(|draft| Section {
                    id: draft.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
                    profile_id: profile.id.clone(),
                    kind: draft.kind,
                    content: draft.content,
                    order: draft.order,
                })
                .collect();
            self.sections.replace_for_profile(&profile.id, rows).await?;
        }

        info!(profile_id = %profile.id, "profile updated");

        let sections = self.sections.list_for_profile(&profile.id).await?;
        let experiences = self.experiences.list_for_profile(&profile.id).await?;
        Ok(ProfileBundle { profile, sections, experiences })
    }

    /// Resolve and render the public page for `username`.
    ///
    /// Unpublished profiles are visible only to their owner, or through an
    /// owner-authorized preview flag; everyone else gets not-found. A `view`
    /// analytics event and the view counter are recorded best-effort and
    /// never fail the read.
    pub async fn view_profile(
        &self,
        username: &str,
        session: Option<&Session>,
        preview: bool,
        meta: ViewMeta,
    ) -> Result<ProfileView> {
        let profile = self
            .profiles
            .find_by_username(username)
            .await?
            .ok_or_else(|| FolioError::NotFound("Profile not found".into()))?;

        let is_owner = session.is_some_and(|s| s.user_id == profile.user_id);
        if !profile.published && !is_owner && !preview {
            // Indistinguishable from a missing profile on purpose
            return Err(FolioError::NotFound("Profile not found".into()));
        }

        let owner_plan = match self.users.get_by_id(&profile.user_id).await? {
            Some(user) => Some(user.plan),
            None => None,
        };

        let viewer_state =
            derive_user_state(session, Some(&profile.user_id), owner_plan, profile.published);
        // The owner's entitlement gates Pro-only sections on the page,
        // independent of who is looking at it.
        let owner_session = Session::new(profile.user_id.clone());
        let owner_state = derive_user_state(
            Some(&owner_session),
            Some(&profile.user_id),
            owner_plan,
            profile.published,
        );

        let sections = self.sections.list_for_profile(&profile.id).await?;
        let experiences = self.experiences.list_for_profile(&profile.id).await?;
        let rendered = render_profile(
            &profile,
            &sections,
            &experiences,
            owner_state,
            &self.gate,
            &self.site,
        );

        if profile.published {
            self.record_view(&profile.id, meta).await;
        }

        Ok(ProfileView { state: viewer_state, profile, rendered })
    }

    /// Best-effort view accounting. Failures are logged and swallowed.
    async fn record_view(&self, profile_id: &str, meta: ViewMeta) {
        let event =
            AnalyticsEvent::new(profile_id, EVENT_TYPE_VIEW, Utc::now().timestamp(), meta);
        if let Err(err) = self.analytics.record(event).await {
            warn!(profile_id, error = %err, "failed to record view event");
        }
        if let Err(err) = self.profiles.increment_views(profile_id).await {
            warn!(profile_id, error = %err, "failed to increment view counter");
        }
    }
}

/// Patch scalar profile fields from a validated update.
fn apply_scalar_updates(profile: &mut Profile, update: &ProfileUpdate) {
    if let Some(content) = &update.content {
        profile.content = Some(content.clone());
    }
    if let Some(published) = update.published {
        profile.published = published;
    }
    if let Some(display_name) = &update.display_name {
        profile.display_name = Some(display_name.clone());
    }
    if let Some(headline) = &update.headline {
        profile.headline = Some(headline.clone());
    }
    if let Some(location) = &update.location {
        profile.location = Some(location.clone());
    }
    if let Some(photo) = &update.profile_photo_url {
        profile.profile_photo_url = photo.clone();
    }
    if let Some(accent) = &update.accent_color {
        profile.accent_color = accent.clone();
    }
    if let Some(layout) = &update.layout_style {
        profile.layout_style = layout.clone();
    }
    if let Some(url) = &update.github_url {
        profile.github_url = url.clone();
    }
    if let Some(url) = &update.linkedin_url {
        profile.linkedin_url = url.clone();
    }
    if let Some(url) = &update.website_url {
        profile.website_url = url.clone();
    }
    if let Some(url) = &update.twitter_url {
        profile.twitter_url = url.clone();
    }
    if let Some(title) = &update.seo_title {
        profile.seo_title = title.clone();
    }
    if let Some(description) = &update.seo_description {
        profile.seo_description = description.clone();
    }
    if let Some(keywords) = &update.seo_keywords {
        profile.seo_keywords = keywords.clone();
    }
    if let Some(remove_branding) = update.remove_branding {
        profile.remove_branding = remove_branding;
    }
}
