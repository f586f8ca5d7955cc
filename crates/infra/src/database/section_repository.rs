//! Section repository implementation using SQLite
//!
//! Replace-all writes run delete and insert inside one transaction, so a
//! concurrent reader either sees the old collection or the new one, never an
//! empty table mid-replace.

use std::sync::Arc;

use async_trait::async_trait;
use folio_core::SectionRepository as SectionRepositoryPort;
use folio_domain::{Result as DomainResult, Section, SectionKind};
use rusqlite::{params, Row};
use tokio::task;

use super::manager::DbManager;
use crate::errors::{map_join_error, map_json_error, map_sql_error};

/// SQLite-backed implementation of `SectionRepository`
pub struct SqliteSectionRepository {
    db: Arc<DbManager>,
}

impl SqliteSectionRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SectionRepositoryPort for SqliteSectionRepository {
    async fn list_for_profile(&self, profile_id: &str) -> DomainResult<Vec<Section>> {
        let db = Arc::clone(&self.db);
        let profile_id = profile_id.to_string();

        task::spawn_blocking(move || -> DomainResult<Vec<Section>> {
            let conn = db.get_connection()?;
            let mut stmt = conn
                .prepare(
                    "SELECT id, profile_id, type, content, sort_order
                     FROM profile_sections
                     WHERE profile_id = ?1
                     ORDER BY sort_order ASC, rowid ASC",
                )
                .map_err(map_sql_error)?;

            let rows = stmt
                .query_map(params![&profile_id], map_section_row)
                .map_err(map_sql_error)?
                .collect::<rusqlite::Result<Vec<Section>>>()
                .map_err(map_sql_error)?;
            Ok(rows)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn replace_for_profile(
        &self,
        profile_id: &str,
        sections: Vec<Section>,
    ) -> DomainResult<()> {
        let db = Arc::clone(&self.db);
        let profile_id = profile_id.to_string();

        task::spawn_blocking(move || -> DomainResult<()> {
            let mut conn = db.get_connection()?;
            let tx = conn.transaction().map_err(map_sql_error)?;

            tx.execute(
                "DELETE FROM profile_sections WHERE profile_id = ?1",
                params![&profile_id],
            )
            .map_err(map_sql_error)?;

            for section in &sections {
                let content = serde_json::to_string(&section.content).map_err(map_json_error)?;
                tx.execute(
                    "INSERT INTO profile_sections (id, profile_id, type, content, sort_order)
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                    params![
                        &section.id,
                        &profile_id,
                        section.kind.as_str(),
                        &content,
                        section.order,
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

/// Map a row to a Section
fn map_section_row(row: &Row) -> rusqlite::Result<Section> {
    let kind: String = row.get(2)?;
    let content: String = row.get(3)?;
    let content = serde_json::from_str(&content).map_err(|err| {
        rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(err))
    })?;
    Ok(Section {
        id: row.get(0)?,
        profile_id: row.get(1)?,
        kind: SectionKind::from(kind),
        content,
        order: row.get(4)?,
    })
}
