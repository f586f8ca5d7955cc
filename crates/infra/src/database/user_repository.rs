//! User repository implementation using SQLite
//!
//! Account rows are synced from the identity provider; the application only
//! ever reads them and mirrors the chosen profile username back.

use std::sync::Arc;

use async_trait::async_trait;
use folio_core::UserRepository as UserRepositoryPort;
use folio_domain::{PlanTier, Result as DomainResult, User};
use rusqlite::{params, OptionalExtension, Row};
use tokio::task;

use super::manager::DbManager;
use crate::errors::{map_join_error, map_sql_error};

/// SQLite-backed implementation of `UserRepository`
pub struct SqliteUserRepository {
    db: Arc<DbManager>,
}

impl SqliteUserRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }

    /// Upsert an account row from the identity provider sync.
    pub async fn upsert(&self, user: User) -> DomainResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            conn.execute(
                "INSERT INTO users (id, email, name, username, image, plan, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
                 ON CONFLICT(id) DO UPDATE SET
                    email = excluded.email,
                    name = excluded.name,
                    image = excluded.image,
                    plan = excluded.plan,
                    updated_at = excluded.updated_at",
                params![
                    &user.id,
                    &user.email,
                    &user.name,
                    &user.username,
                    &user.image,
                    user.plan.to_string(),
                    user.created_at,
                    user.updated_at,
                ],
            )
            .map_err(map_sql_error)?;
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }
}

#[async_trait]
impl UserRepositoryPort for SqliteUserRepository {
    async fn get_by_id(&self, id: &str) -> DomainResult<Option<User>> {
        let db = Arc::clone(&self.db);
        let id = id.to_string();

        task::spawn_blocking(move || -> DomainResult<Option<User>> {
            let conn = db.get_connection()?;
            conn.query_row(
                "SELECT id, email, name, username, image, plan, created_at, updated_at
                 FROM users WHERE id = ?1",
                params![&id],
                map_user_row,
            )
            .optional()
            .map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn set_username(&self, user_id: &str, username: &str) -> DomainResult<()> {
        let db = Arc::clone(&self.db);
        let user_id = user_id.to_string();
        let username = username.to_string();

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            conn.execute(
                "UPDATE users SET username = ?1 WHERE id = ?2",
                params![&username, &user_id],
            )
            .map_err(map_sql_error)?;
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }
}

/// Map a row to a User
fn map_user_row(row: &Row) -> rusqlite::Result<User> {
    let plan: String = row.get(5)?;
    Ok(User {
        id: row.get(0)?,
        email: row.get(1)?,
        name: row.get(2)?,
        username: row.get(3)?,
        image: row.get(4)?,
        plan: parse_plan(&plan),
        created_at: row.get(6)?,
        updated_at: row.get(7)?,
    })
}

/// Unrecognized plan strings degrade to the free tier.
fn parse_plan(plan: &str) -> PlanTier {
    if plan.eq_ignore_ascii_case("pro") {
        PlanTier::Pro
    } else {
        PlanTier::Free
    }
}
