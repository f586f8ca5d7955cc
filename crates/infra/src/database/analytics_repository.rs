//! Analytics event repository implementation using SQLite
//!
//! Append-only: events are inserted and never updated or deleted.

use std::sync::Arc;

use async_trait::async_trait;
use folio_core::AnalyticsRepository as AnalyticsRepositoryPort;
use folio_domain::{AnalyticsEvent, Result as DomainResult};
use rusqlite::params;
use tokio::task;

use super::manager::DbManager;
use crate::errors::{map_join_error, map_sql_error};

/// SQLite-backed implementation of `AnalyticsRepository`
pub struct SqliteAnalyticsRepository {
    db: Arc<DbManager>,
}

impl SqliteAnalyticsRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AnalyticsRepositoryPort for SqliteAnalyticsRepository {
    async fn record(&self, event: AnalyticsEvent) -> DomainResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            conn.execute(
                "INSERT INTO analytics_events (
                    id, profile_id, event_type, occurred_at, referrer, user_agent
                 ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    &event.id,
                    &event.profile_id,
                    &event.event_type,
                    event.occurred_at,
                    &event.referrer,
                    &event.user_agent,
                ],
            )
            .map_err(map_sql_error)?;
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }
}

#[cfg(test)]
mod tests {
    use folio_domain::constants::EVENT_TYPE_VIEW;
    use folio_domain::ViewMeta;
    use tempfile::TempDir;

    use super::*;

    fn setup_test_db() -> (Arc<DbManager>, TempDir) {
        let temp_dir = TempDir::new().expect("create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let manager = DbManager::new(db_path, 5).expect("create db manager");
        manager.run_migrations().expect("run migrations");
        (Arc::new(manager), temp_dir)
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn record_appends_events() {
        let (db, _temp_dir) = setup_test_db();
        let repo = SqliteAnalyticsRepository::new(Arc::clone(&db));

        let meta = ViewMeta {
            referrer: Some("https://news.site".into()),
            user_agent: Some("test-agent".into()),
        };
        repo.record(AnalyticsEvent::new("p1", EVENT_TYPE_VIEW, 1_700_000_000, meta))
            .await
            .expect("record event");
        repo.record(AnalyticsEvent::new("p1", EVENT_TYPE_VIEW, 1_700_000_060, ViewMeta::default()))
            .await
            .expect("record second event");

        let conn = db.get_connection().expect("connection");
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM analytics_events WHERE profile_id = 'p1'",
                [],
                |row| row.get(0),
            )
            .expect("count");
        assert_eq!(count, 2);

        let referrer: Option<String> = conn
            .query_row(
                "SELECT referrer FROM analytics_events ORDER BY occurred_at ASC LIMIT 1",
                [],
                |row| row.get(0),
            )
            .expect("referrer");
        assert_eq!(referrer, Some("https://news.site".into()));
    }
}
