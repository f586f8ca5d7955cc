//! End-to-end tests running the profile service over real SQLite storage.

use std::sync::Arc;

use folio_core::{
    AnalyticsRepository, ExperienceRepository, ProfileRepository, ProfileService,
    SectionRepository, ServiceConfig, UserRepository,
};
use folio_domain::{
    ExperienceDraft, FolioError, NewProfile, PlanTier, ProfileUpdate, SectionDraft, SectionKind,
    Session, User, UserState, ViewMeta,
};
use folio_infra::{
    DbManager, SqliteAnalyticsRepository, SqliteExperienceRepository, SqliteProfileRepository,
    SqliteSectionRepository, SqliteUserRepository,
};
use serde_json::json;
use tempfile::TempDir;

async fn setup_service() -> (ProfileService, Arc<DbManager>, TempDir) {
    let temp_dir = TempDir::new().expect("create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let manager = DbManager::new(db_path, 5).expect("create db manager");
    manager.run_migrations().expect("run migrations");
    let db = Arc::new(manager);

    let users = SqliteUserRepository::new(Arc::clone(&db));
    users
        .upsert(User {
            id: "u1".into(),
            email: "u1@example.com".into(),
            name: Some("Ana".into()),
            username: None,
            image: None,
            plan: PlanTier::Free,
            created_at: 1_700_000_000,
            updated_at: 1_700_000_000,
        })
        .await
        .expect("seed user");

    let service = ProfileService::new(
        Arc::new(SqliteProfileRepository::new(Arc::clone(&db))) as Arc<dyn ProfileRepository>,
        Arc::new(SqliteSectionRepository::new(Arc::clone(&db))) as Arc<dyn SectionRepository>,
        Arc::new(SqliteExperienceRepository::new(Arc::clone(&db)))
            as Arc<dyn ExperienceRepository>,
        Arc::new(SqliteAnalyticsRepository::new(Arc::clone(&db))) as Arc<dyn AnalyticsRepository>,
        Arc::new(users) as Arc<dyn UserRepository>,
        ServiceConfig::default(),
    );

    (service, db, temp_dir)
}

#[tokio::test(flavor = "multi_thread")]
async fn create_update_publish_and_view() {
    let (service, db, _temp_dir) = setup_service().await;
    let session = Session::new("u1");

    let profile = service
        .create_profile(&session, NewProfile { username: "ana".into(), content: None })
        .await
        .expect("create");

    let update = ProfileUpdate {
        published: Some(true),
        headline: Some("Engineer".into()),
        sections: Some(vec![SectionDraft {
            id: None,
            kind: SectionKind::Hero,
            content: json!({"fullName": "Ana Ruiz", "title": "Engineer"}),
            order: 0,
        }]),
        experiences: Some(vec![ExperienceDraft {
            company: "Acme".into(),
            role: "Engineer".into(),
            start_date: "2022-01".into(),
            ..ExperienceDraft::default()
        }]),
        ..ProfileUpdate::default()
    };
    let bundle = service.update_profile(&session, &profile.id, update).await.expect("update");
    assert!(bundle.profile.published);
    assert_eq!(bundle.sections.len(), 1);
    assert_eq!(bundle.experiences.len(), 1);

    let view =
        service.view_profile("ana", None, false, ViewMeta::default()).await.expect("view");
    assert_eq!(view.state, UserState::Visitor);
    assert_eq!(view.rendered.fields.display_name, "Ana Ruiz");
    assert_eq!(view.rendered.work_history.len(), 1);

    // View accounting landed in real storage
    let conn = db.get_connection().expect("connection");
    let views: i64 = conn
        .query_row("SELECT views FROM profiles WHERE username = 'ana'", [], |row| row.get(0))
        .expect("views");
    assert_eq!(views, 1);
    let events: i64 = conn
        .query_row("SELECT COUNT(*) FROM analytics_events", [], |row| row.get(0))
        .expect("events");
    assert_eq!(events, 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn replace_all_collections_do_not_accumulate_on_disk() {
    let (service, db, _temp_dir) = setup_service().await;
    let session = Session::new("u1");
    let profile = service
        .create_profile(&session, NewProfile { username: "ana".into(), content: None })
        .await
        .expect("create");

    let update = ProfileUpdate {
        sections: Some(vec![SectionDraft {
            id: None,
            kind: SectionKind::About,
            content: json!({"summary": "hello"}),
            order: 0,
        }]),
        experiences: Some(vec![ExperienceDraft {
            company: "Acme".into(),
            role: "Engineer".into(),
            start_date: "2022-01".into(),
            ..ExperienceDraft::default()
        }]),
        ..ProfileUpdate::default()
    };
    service.update_profile(&session, &profile.id, update.clone()).await.expect("first");
    service.update_profile(&session, &profile.id, update).await.expect("second");

    let conn = db.get_connection().expect("connection");
    let sections: i64 = conn
        .query_row("SELECT COUNT(*) FROM profile_sections", [], |row| row.get(0))
        .expect("sections");
    let experiences: i64 = conn
        .query_row("SELECT COUNT(*) FROM profile_experiences", [], |row| row.get(0))
        .expect("experiences");
    assert_eq!(sections, 1);
    assert_eq!(experiences, 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn username_collision_is_rejected_by_the_database_too() {
    let (service, db, _temp_dir) = setup_service().await;

    let users = SqliteUserRepository::new(Arc::clone(&db));
    users
        .upsert(User {
            id: "u2".into(),
            email: "u2@example.com".into(),
            name: None,
            username: None,
            image: None,
            plan: PlanTier::Free,
            created_at: 0,
            updated_at: 0,
        })
        .await
        .expect("seed second user");

    service
        .create_profile(&Session::new("u1"), NewProfile { username: "ana".into(), content: None })
        .await
        .expect("first create");

    let err = service
        .create_profile(&Session::new("u2"), NewProfile { username: "ana".into(), content: None })
        .await
        .expect_err("collision");
    assert!(matches!(err, FolioError::Conflict(_)));
}

#[tokio::test(flavor = "multi_thread")]
async fn unpublished_profile_hidden_from_anonymous_viewers() {
    let (service, _db, _temp_dir) = setup_service().await;
    let session = Session::new("u1");
    service
        .create_profile(&session, NewProfile { username: "ana".into(), content: None })
        .await
        .expect("create");

    let err = service
        .view_profile("ana", None, false, ViewMeta::default())
        .await
        .expect_err("hidden");
    assert!(matches!(err, FolioError::NotFound(_)));

    // Owner still sees the draft
    let view = service
        .view_profile("ana", Some(&session), false, ViewMeta::default())
        .await
        .expect("owner view");
    assert_eq!(view.state, UserState::Registered);
}
