//! Mock repository implementations for testing
//!
//! In-memory mocks for all storage ports, enabling deterministic
//! service-level tests without database dependencies.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use folio_core::{
    AnalyticsRepository, ExperienceRepository, ProfileRepository, SectionRepository,
    UserRepository,
};
use folio_domain::{
    AnalyticsEvent, Experience, FolioError, Profile, Result as DomainResult, Section, User,
};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// In-memory mock for `ProfileRepository`.
#[derive(Default)]
pub struct MockProfileRepository {
    profiles: Mutex<HashMap<String, Profile>>,
}

impl MockProfileRepository {
    pub fn with_profile(self, profile: Profile) -> Self {
        lock(&self.profiles).insert(profile.id.clone(), profile);
        self
    }

    /// Snapshot of a stored profile for assertions.
    pub fn stored(&self, id: &str) -> Option<Profile> {
        lock(&self.profiles).get(id).cloned()
    }
}

#[async_trait]
impl ProfileRepository for MockProfileRepository {
    async fn get_by_id(&self, id: &str) -> DomainResult<Option<Profile>> {
        Ok(lock(&self.profiles).get(id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<Profile>> {
        let needle = username.to_lowercase();
        Ok(lock(&self.profiles)
            .values()
            .find(|p| p.username.to_lowercase() == needle)
            .cloned())
    }

    async fn find_by_user_id(&self, user_id: &str) -> DomainResult<Option<Profile>> {
        Ok(lock(&self.profiles).values().find(|p| p.user_id == user_id).cloned())
    }

    async fn create(&self, profile: Profile) -> DomainResult<()> {
        let mut profiles = lock(&self.profiles);
        let needle = profile.username.to_lowercase();
        if profiles.values().any(|p| p.username.to_lowercase() == needle) {
            return Err(FolioError::Conflict("username taken".into()));
        }
        profiles.insert(profile.id.clone(), profile);
        Ok(())
    }

    async fn update(&self, profile: Profile) -> DomainResult<()> {
        lock(&self.profiles).insert(profile.id.clone(), profile);
        Ok(())
    }

    async fn increment_views(&self, id: &str) -> DomainResult<()> {
        let mut profiles = lock(&self.profiles);
        let profile = profiles
            .get_mut(id)
            .ok_or_else(|| FolioError::NotFound("profile".into()))?;
        profile.views += 1;
        Ok(())
    }
}

/// In-memory mock for `SectionRepository`.
#[derive(Default)]
pub struct MockSectionRepository {
    sections: Mutex<HashMap<String, Vec<Section>>>,
}

impl MockSectionRepository {
    pub fn stored(&self, profile_id: &str) -> Vec<Section> {
        lock(&self.sections).get(profile_id).cloned().unwrap_or_default()
    }
}

#[async_trait]
impl SectionRepository for MockSectionRepository {
    async fn list_for_profile(&self, profile_id: &str) -> DomainResult<Vec<Section>> {
        let mut rows = self.stored(profile_id);
        rows.sort_by_key(|s| s.order);
        Ok(rows)
    }

    async fn replace_for_profile(
        &self,
        profile_id: &str,
        sections: Vec<Section>,
    ) -> DomainResult<()> {
        lock(&self.sections).insert(profile_id.to_string(), sections);
        Ok(())
    }
}

/// In-memory mock for `ExperienceRepository`.
#[derive(Default)]
pub struct MockExperienceRepository {
    experiences: Mutex<HashMap<String, Vec<Experience>>>,
}

impl MockExperienceRepository {
    pub fn stored(&self, profile_id: &str) -> Vec<Experience> {
        lock(&self.experiences).get(profile_id).cloned().unwrap_or_default()
    }
}

#[async_trait]
impl ExperienceRepository for MockExperienceRepository {
    async fn list_for_profile(&self, profile_id: &str) -> DomainResult<Vec<Experience>> {
        let mut rows = self.stored(profile_id);
        rows.sort_by_key(|e| e.order);
        Ok(rows)
    }

    async fn replace_for_profile(
        &self,
        profile_id: &str,
        experiences: Vec<Experience>,
    ) -> DomainResult<()> {
        lock(&self.experiences).insert(profile_id.to_string(), experiences);
        Ok(())
    }
}

/// In-memory mock for `AnalyticsRepository`.
///
/// Can be switched into a failing mode to exercise the fire-and-forget
/// contract of the read path.
#[derive(Default)]
pub struct MockAnalyticsRepository {
    events: Mutex<Vec<AnalyticsEvent>>,
    fail_writes: AtomicBool,
}

impl MockAnalyticsRepository {
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn recorded(&self) -> Vec<AnalyticsEvent> {
        lock(&self.events).clone()
    }
}

#[async_trait]
impl AnalyticsRepository for MockAnalyticsRepository {
    async fn record(&self, event: AnalyticsEvent) -> DomainResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(FolioError::Database("analytics store unavailable".into()));
        }
        lock(&self.events).push(event);
        Ok(())
    }
}

/// In-memory mock for `UserRepository`.
#[derive(Default)]
pub struct MockUserRepository {
    users: Mutex<HashMap<String, User>>,
}

impl MockUserRepository {
    pub fn with_user(self, user: User) -> Self {
        lock(&self.users).insert(user.id.clone(), user);
        self
    }

    pub fn stored(&self, id: &str) -> Option<User> {
        lock(&self.users).get(id).cloned()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn get_by_id(&self, id: &str) -> DomainResult<Option<User>> {
        Ok(lock(&self.users).get(id).cloned())
    }

    async fn set_username(&self, user_id: &str, username: &str) -> DomainResult<()> {
        if let Some(user) = lock(&self.users).get_mut(user_id) {
            user.username = Some(username.to_string());
        }
        Ok(())
    }
}

/// Everything a service test needs: the service plus handles to its mocks.
pub struct TestHarness {
    pub service: folio_core::ProfileService,
    pub profiles: Arc<MockProfileRepository>,
    pub sections: Arc<MockSectionRepository>,
    pub experiences: Arc<MockExperienceRepository>,
    pub analytics: Arc<MockAnalyticsRepository>,
    pub users: Arc<MockUserRepository>,
}

/// Build a service over fresh mocks, seeded with the given records.
pub fn harness(profiles: Vec<Profile>, users: Vec<User>) -> TestHarness {
    let mut profile_repo = MockProfileRepository::default();
    for profile in profiles {
        profile_repo = profile_repo.with_profile(profile);
    }
    let mut user_repo = MockUserRepository::default();
    for user in users {
        user_repo = user_repo.with_user(user);
    }

    let profiles = Arc::new(profile_repo);
    let sections = Arc::new(MockSectionRepository::default());
    let experiences = Arc::new(MockExperienceRepository::default());
    let analytics = Arc::new(MockAnalyticsRepository::default());
    let users = Arc::new(user_repo);

    let service = folio_core::ProfileService::new(
        Arc::clone(&profiles) as Arc<dyn ProfileRepository>,
        Arc::clone(&sections) as Arc<dyn SectionRepository>,
        Arc::clone(&experiences) as Arc<dyn ExperienceRepository>,
        Arc::clone(&analytics) as Arc<dyn AnalyticsRepository>,
        Arc::clone(&users) as Arc<dyn UserRepository>,
        folio_core::ServiceConfig::default(),
    );

    TestHarness { service, profiles, sections, experiences, analytics, users }
}
