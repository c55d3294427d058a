//! SeaORM -> DomainError translation helpers.
//!
//! Adapters convert `sea_orm::DbErr` into `crate::errors::domain::DomainError`
//! here, and higher layers then map `DomainError` to `AppError` via `From`.

use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::trace_ctx;

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

/// Map unique-constraint identifiers to domain-specific conflicts.
///
/// Covers both the Postgres constraint name and the SQLite
/// "table.column" form so tests against either backend agree.
fn map_unique_violation(error_msg: &str) -> Option<(ConflictKind, &'static str)> {
    if error_msg.contains("ux_players_team_jersey")
        || error_msg.contains("players.jersey_number")
    {
        return Some((
            ConflictKind::JerseyNumberTaken,
            "Jersey number already taken within this team",
        ));
    }
    None
}

/// Translate a `DbErr` into a `DomainError` with sanitized detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            return DomainError::not_found(
                NotFoundKind::Other("Record".into()),
                "Record not found",
            );
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %error_msg, "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    if mentions_sqlstate(&error_msg, "23505")
        || error_msg.contains("duplicate key value violates unique constraint")
        || error_msg.contains("UNIQUE constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Unique constraint violation");

        if let Some((kind, detail)) = map_unique_violation(&error_msg) {
            return DomainError::conflict(kind, detail);
        }

        return DomainError::conflict(
            ConflictKind::Other("Unique".into()),
            "Unique constraint violation",
        );
    }

    if mentions_sqlstate(&error_msg, "23503") {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Foreign key constraint violation");
        return DomainError::validation("Foreign key constraint violation");
    }

    if mentions_sqlstate(&error_msg, "23514") || error_msg.contains("CHECK constraint failed") {
        // The goals >= 0 checks surface here when a negative value slips
        // past request validation
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Check constraint violation");
        return DomainError::validation("Check constraint violation");
    }

    if error_msg.contains("timeout")
        || error_msg.contains("pool")
        || error_msg.contains("unavailable")
    {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Database timeout or pool issue");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(trace_id = %trace_id, raw_error = %error_msg, "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}

// Adapter functions return DbErr; the repos layer converts with `?`.
impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        map_db_err(e)
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::DbErr;

    use super::map_db_err;
    use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};

    #[test]
    fn record_not_found_maps_to_not_found() {
        let err = map_db_err(DbErr::RecordNotFound("matches".into()));
        assert!(matches!(
            err,
            DomainError::NotFound(NotFoundKind::Other(_), _)
        ));
    }

    #[test]
    fn jersey_unique_violation_maps_to_conflict() {
        let err = map_db_err(DbErr::Custom(
            "duplicate key value violates unique constraint \"ux_players_team_jersey\"".into(),
        ));
        assert!(matches!(
            err,
            DomainError::Conflict(ConflictKind::JerseyNumberTaken, _)
        ));
    }

    #[test]
    fn sqlite_unique_violation_maps_to_conflict() {
        let err = map_db_err(DbErr::Custom(
            "UNIQUE constraint failed: players.jersey_number".into(),
        ));
        assert!(matches!(
            err,
            DomainError::Conflict(ConflictKind::JerseyNumberTaken, _)
        ));
    }

    #[test]
    fn unknown_unique_violation_is_generic_conflict() {
        let err = map_db_err(DbErr::Custom(
            "duplicate key value violates unique constraint \"something_else\"".into(),
        ));
        assert!(matches!(
            err,
            DomainError::Conflict(ConflictKind::Other(_), _)
        ));
    }

    #[test]
    fn check_violation_maps_to_validation() {
        let err = map_db_err(DbErr::Custom("SQLSTATE(23514) check violated".into()));
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn timeout_maps_to_infra_timeout() {
        let err = map_db_err(DbErr::Custom("connection pool timeout".into()));
        assert!(matches!(
            err,
            DomainError::Infra(InfraErrorKind::Timeout, _)
        ));
    }

    #[test]
    fn unhandled_maps_to_infra_other() {
        let err = map_db_err(DbErr::Custom("boom".into()));
        assert!(matches!(err, DomainError::Infra(InfraErrorKind::Other(_), _)));
    }
}
