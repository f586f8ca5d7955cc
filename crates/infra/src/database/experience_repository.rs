//! Experience repository implementation using SQLite
//!
//! Same replace-all transaction contract as the section repository. The
//! `tech_stack` column stores a JSON array of strings.

use std::sync::Arc;

use async_trait::async_trait;
use folio_core::ExperienceRepository as ExperienceRepositoryPort;
use folio_domain::{Experience, Result as DomainResult};
use rusqlite::{params, Row};
use tokio::task;

use super::manager::DbManager;
use crate::errors::{map_join_error, map_json_error, map_sql_error};

/// SQLite-backed implementation of `ExperienceRepository`
pub struct SqliteExperienceRepository {
    db: Arc<DbManager>,
}

impl SqliteExperienceRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExperienceRepositoryPort for SqliteExperienceRepository {
    async fn list_for_profile(&self, profile_id: &str) -> DomainResult<Vec<Experience>> {
        let db = Arc::clone(&self.db);
        let profile_id = profile_id.to_string();

        task::spawn_blocking(move || -> DomainResult<Vec<Experience>> {
            let conn = db.get_connection()?;
            let mut stmt = conn
                .prepare(
                    "SELECT id, profile_id, company, role, start_date, end_date, description,
                            tech_stack, location, sort_order
                     FROM profile_experiences
                     WHERE profile_id = ?1
                     ORDER BY sort_order ASC, rowid ASC",
                )
                .map_err(map_sql_error)?;

            let rows = stmt
                .query_map(params![&profile_id], map_experience_row)
                .map_err(map_sql_error)?
                .collect::<rusqlite::Result<Vec<Experience>>>()
                .map_err(map_sql_error)?;
            Ok(rows)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn replace_for_profile(
        &self,
        profile_id: &str,
        experiences: Vec<Experience>,
    ) -> DomainResult<()> {
        let db = Arc::clone(&self.db);
        let profile_id = profile_id.to_string();

        task::spawn_blocking(move || -> DomainResult<()> {
            let mut conn = db.get_connection()?;
            let tx = conn.transaction().map_err(map_sql_error)?;

            tx.execute(
                "DELETE FROM profile_experiences WHERE profile_id = ?1",
                params![&profile_id],
            )
            .map_err(map_sql_error)?;

            for experience in &experiences {
                let tech_stack =
                    serde_json::to_string(&experience.tech_stack).map_err(map_json_error)?;
                tx.execute(
                    "INSERT INTO profile_experiences (
                        id, profile_id, company, role, start_date, end_date, description,
                        tech_stack, location, sort_order
                     ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
                    params![
                        &experience.id,
                        &profile_id,
                        &experience.company,
                        &experience.role,
                        &experience.start_date,
                        &experience.end_date,
                        &experience.description,
                        &tech_stack,
                        &experience.location,
                        experience.order,
                    ],
                )
                .map_err(map_sql_error)?;
            }

            tx.commit().map_err(map_sql_error)?;
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }
}

/// Map a row to an Experience
fn map_experience_row(row: &Row) -> rusqlite::Result<Experience> {
    let tech_stack: String = row.get(7)?;
    let tech_stack = serde_json::from_str(&tech_stack).map_err(|err| {
        rusqlite::Error::FromSqlConversionFailure(7, rusqlite::types::Type::Text, Box::new(err))
    })?;
    Ok(Experience {
        id: row.get(0)?,
        profile_id: row.get(1)?,
        company: row.get(2)?,
        role: row.get(3)?,
        start_date: row.get(4)?,
        end_date: row.get(5)?,
        description: row.get(6)?,
        tech_stack,
        location: row.get(8)?,
        order: row.get(9)?,
    })
}

#[cfg(test)]
mod tests {
    use folio_core::ProfileRepository;
    use folio_domain::Profile;
    use tempfile::TempDir;

    use super::super::profile_repository::SqliteProfileRepository;
    use super::*;

    async fn setup_test_db() -> (Arc<DbManager>, TempDir) {
        let temp_dir = TempDir::new().expect("create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let manager = DbManager::new(db_path, 5).expect("create db manager");
        manager.run_migrations().expect("run migrations");
        let db = Arc::new(manager);

        let profiles = SqliteProfileRepository::new(Arc::clone(&db));
        profiles
            .create(Profile::new("p1", "u1", "ana", 1_700_000_000))
            .await
            .expect("create profile");

        (db, temp_dir)
    }

    fn experience(id: &str, company: &str, order: i64) -> Experience {
        Experience {
            id: id.into(),
            profile_id: "p1".into(),
            company: company.into(),
            role: "Engineer".into(),
            start_date: "2022-01".into(),
            end_date: None,
            description: String::new(),
            tech_stack: vec!["Rust".into(), "SQLite".into()],
            location: Some("Remote".into()),
            order,
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn replace_and_list_round_trips_in_order() {
        let (db, _temp_dir) = setup_test_db().await;
        let repo = SqliteExperienceRepository::new(db);

        repo.replace_for_profile(
            "p1",
            vec![experience("e2", "Beta", 1), experience("e1", "Acme", 0)],
        )
        .await
        .expect("replace");

        let rows = repo.list_for_profile("p1").await.expect("list");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].company, "Acme");
        assert_eq!(rows[1].company, "Beta");
        assert_eq!(rows[0].tech_stack, vec!["Rust", "SQLite"]);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn replace_discards_previous_records() {
        let (db, _temp_dir) = setup_test_db().await;
        let repo = SqliteExperienceRepository::new(db);

        repo.replace_for_profile("p1", vec![experience("e1", "Acme", 0)])
            .await
            .expect("first replace");
        repo.replace_for_profile("p1", vec![experience("e2", "Beta", 0)])
            .await
            .expect("second replace");

        let rows = repo.list_for_profile("p1").await.expect("list");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "e2");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn current_position_keeps_null_end_date() {
        let (db, _temp_dir) = setup_test_db().await;
        let repo = SqliteExperienceRepository::new(db);

        let mut past = experience("e1", "Acme", 0);
        past.end_date = Some("2023-06".into());
        repo.replace_for_profile("p1", vec![past, experience("e2", "Beta", 1)])
            .await
            .expect("replace");

        let rows = repo.list_for_profile("p1").await.expect("list");
        assert_eq!(rows[0].end_date, Some("2023-06".into()));
        assert_eq!(rows[1].end_date, None);
    }
}
