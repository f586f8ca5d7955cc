//! Conversions from external infrastructure errors into domain errors.

use folio_domain::FolioError;
use rusqlite::Error as SqlError;
use tokio::task::JoinError;

/// Map a rusqlite error onto the domain error surface.
///
/// Unique-constraint violations become [`FolioError::Conflict`] so the write
/// paths can surface duplicate usernames without string-matching SQL output.
pub fn map_sql_error(err: SqlError) -> FolioError {
    use rusqlite::ffi::ErrorCode;

    match err {
        SqlError::SqliteFailure(code, maybe_message) => {
            let message = maybe_message.unwrap_or_default();
            match (code.code, code.extended_code) {
                (ErrorCode::DatabaseBusy, _) => FolioError::Database("database is busy".into()),
                (ErrorCode::DatabaseLocked, _) => {
                    FolioError::Database("database is locked".into())
                }
                // SQLITE_CONSTRAINT_UNIQUE / SQLITE_CONSTRAINT_PRIMARYKEY
                (ErrorCode::ConstraintViolation, 2067 | 1555) => {
                    FolioError::Conflict("unique constraint violation".into())
                }
                (ErrorCode::ConstraintViolation, 787) => {
                    FolioError::Database("foreign key constraint violation".into())
                }
                _ => FolioError::Database(format!(
                    "sqlite failure {:?} (code {}): {message}",
                    code.code, code.extended_code
                )),
            }
        }
        SqlError::QueryReturnedNoRows => FolioError::NotFound("no rows returned by query".into()),
        SqlError::FromSqlConversionFailure(_, _, cause) => {
            FolioError::Database(format!("failed to convert sqlite value: {cause}"))
        }
        SqlError::InvalidColumnType(_, _, ty) => {
            FolioError::Database(format!("invalid column type: {ty}"))
        }
        other => FolioError::Database(format!("sqlite error: {other}")),
    }
}

/// Map a connection pool error onto the domain error surface.
pub fn map_pool_error(err: r2d2::Error) -> FolioError {
    FolioError::Database(format!("connection pool error: {err}"))
}

/// Map a blocking-task join error onto the domain error surface.
pub fn map_join_error(err: JoinError) -> FolioError {
    FolioError::Internal(format!("task join error: {err}"))
}

/// Map a JSON (de)serialization error for a stored column.
pub fn map_json_error(err: serde_json::Error) -> FolioError {
    FolioError::Database(format!("failed to encode or decode stored JSON: {err}"))
}
