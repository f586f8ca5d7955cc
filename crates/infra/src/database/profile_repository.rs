//! Profile repository implementation using SQLite
//!
//! The `username` column is declared `UNIQUE COLLATE NOCASE`, so duplicate
//! usernames are rejected case-insensitively by the database itself and the
//! lookup by username needs no lowercasing on either side.

use std::sync::Arc;

use async_trait::async_trait;
use folio_core::ProfileRepository as ProfileRepositoryPort;
use folio_domain::{Profile, Result as DomainResult};
use rusqlite::{params, OptionalExtension, Row};
use tokio::task;

use super::manager::DbManager;
use crate::errors::{map_join_error, map_sql_error};

const PROFILE_COLUMNS: &str = "id, user_id, username, published, content, display_name, headline,
    location, profile_photo_url, accent_color, layout_style, github_url, linkedin_url,
    website_url, twitter_url, seo_title, seo_description, seo_keywords, remove_branding,
    views, created_at, updated_at";

/// SQLite-backed implementation of `ProfileRepository`
pub struct SqliteProfileRepository {
    db: Arc<DbManager>,
}

impl SqliteProfileRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileRepositoryPort for SqliteProfileRepository {
    async fn get_by_id(&self, id: &str) -> DomainResult<Option<Profile>> {
        let db = Arc::clone(&self.db);
        let id = id.to_string();

        task::spawn_blocking(move || -> DomainResult<Option<Profile>> {
            let conn = db.get_connection()?;
            conn.query_row(
                &format!("SELECT {PROFILE_COLUMNS} FROM profiles WHERE id = ?1"),
                params![&id],
                map_profile_row,
            )
            .optional()
            .map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<Profile>> {
        let db = Arc::clone(&self.db);
        let username = username.to_string();

        task::spawn_blocking(move || -> DomainResult<Option<Profile>> {
            let conn = db.get_connection()?;
            conn.query_row(
                &format!("SELECT {PROFILE_COLUMNS} FROM profiles WHERE username = ?1"),
                params![&username],
                map_profile_row,
            )
            .optional()
            .map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn find_by_user_id(&self, user_id: &str) -> DomainResult<Option<Profile>> {
        let db = Arc::clone(&self.db);
        let user_id = user_id.to_string();

        task::spawn_blocking(move || -> DomainResult<Option<Profile>> {
            let conn = db.get_connection()?;
            conn.query_row(
                &format!("SELECT {PROFILE_COLUMNS} FROM profiles WHERE user_id = ?1"),
                params![&user_id],
                map_profile_row,
            )
            .optional()
            .map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn create(&self, profile: Profile) -> DomainResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            conn.execute(
                "INSERT INTO profiles (
                    id, user_id, username, published, content, display_name, headline,
                    location, profile_photo_url, accent_color, layout_style, github_url,
                    linkedin_url, website_url, twitter_url, seo_title, seo_description,
                    seo_keywords, remove_branding, views, created_at, updated_at
                 ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15,
                           ?16, ?17, ?18, ?19, ?20, ?21, ?22)",
                params![
                    &profile.id,
                    &profile.user_id,
                    &profile.username,
                    bool_to_int(profile.published),
                    &profile.content,
                    &profile.display_name,
                    &profile.headline,
                    &profile.location,
                    &profile.profile_photo_url,
                    &profile.accent_color,
                    &profile.layout_style,
                    &profile.github_url,
                    &profile.linkedin_url,
                    &profile.website_url,
                    &profile.twitter_url,
                    &profile.seo_title,
                    &profile.seo_description,
                    &profile.seo_keywords,
                    bool_to_int(profile.remove_branding),
                    profile.views,
                    profile.created_at,
                    profile.updated_at,
                ],
            )
            .map_err(map_sql_error)?;
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }

    async fn update(&self, profile: Profile) -> DomainResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            conn.execute(
                "UPDATE profiles SET
                    published = ?1, content = ?2, display_name = ?3, headline = ?4,
                    location = ?5, profile_photo_url = ?6, accent_color = ?7,
                    layout_style = ?8, github_url = ?9, linkedin_url = ?10,
                    website_url = ?11, twitter_url = ?12, seo_title = ?13,
                    seo_description = ?14, seo_keywords = ?15, remove_branding = ?16,
                    updated_at = ?17
                 WHERE id = ?18",
                params![
                    bool_to_int(profile.published),
                    &profile.content,
                    &profile.display_name,
                    &profile.headline,
                    &profile.location,
                    &profile.profile_photo_url,
                    &profile.accent_color,
                    &profile.layout_style,
                    &profile.github_url,
                    &profile.linkedin_url,
                    &profile.website_url,
                    &profile.twitter_url,
                    &profile.seo_title,
                    &profile.seo_description,
                    &profile.seo_keywords,
                    bool_to_int(profile.remove_branding),
                    profile.updated_at,
                    &profile.id,
                ],
            )
            .map_err(map_sql_error)?;
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }

    async fn increment_views(&self, id: &str) -> DomainResult<()> {
        let db = Arc::clone(&self.db);
        let id = id.to_string();

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            conn.execute("UPDATE profiles SET views = views + 1 WHERE id = ?1", params![&id])
                .map_err(map_sql_error)?;
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }
}

/// Map a row to a Profile
fn map_profile_row(row: &Row) -> rusqlite::Result<Profile> {
    Ok(Profile {
        id: row.get(0)?,
        user_id: row.get(1)?,
        username: row.get(2)?,
        published: int_to_bool(row.get(3)?),
        content: row.get(4)?,
        display_name: row.get(5)?,
        headline: row.get(6)?,
        location: row.get(7)?,
        profile_photo_url: row.get(8)?,
        accent_color: row.get(9)?,
        layout_style: row.get(10)?,
        github_url: row.get(11)?,
        linkedin_url: row.get(12)?,
        website_url: row.get(13)?,
        twitter_url: row.get(14)?,
        seo_title: row.get(15)?,
        seo_description: row.get(16)?,
        seo_keywords: row.get(17)?,
        remove_branding: int_to_bool(row.get(18)?),
        views: row.get(19)?,
        created_at: row.get(20)?,
        updated_at: row.get(21)?,
    })
}

fn bool_to_int(value: bool) -> i64 {
    i64::from(value)
}

fn int_to_bool(value: i64) -> bool {
    value != 0
}
