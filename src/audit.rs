//! Append-only audit trail for account and project activity.
//!
//! Logging must never fail a request; call sites ignore the result.

use serde::Serialize;
use serde_json::Value;

use crate::db::DbPool;
use crate::errors::AppError;

const RETENTION_DAYS: i64 = 90;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct AuditEntry {
    pub id: i64,
    pub user_id: Option<i64>,
    pub action: String,
    pub target_type: String,
    pub target_id: Option<String>,
    pub details: Option<String>,
    pub created_at: String,
}

/// Record one action, with free-form JSON details.
pub async fn log(
    pool: &DbPool,
    user_id: i64,
    action: &str,
    target_type: &str,
    target_id: i64,
    details: Value,
) -> Result<(), AppError> {
    sqlx::query(
        "INSERT INTO audit_log (user_id, action, target_type, target_id, details, created_at) \
         VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(user_id)
    .bind(action)
    .bind(target_type)
    .bind(target_id.to_string())
    .bind(details.to_string())
    .bind(crate::models::now())
    .execute(pool)
    .await?;
    Ok(())
}

/// The N most recent entries, newest first.
pub async fn find_recent(pool: &DbPool, limit: i64) -> Result<Vec<AuditEntry>, AppError> {
    let entries = sqlx::query_as::<_, AuditEntry>(
        "SELECT id, user_id, action, target_type, target_id, details, created_at \
         FROM audit_log ORDER BY created_at DESC, id DESC LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(entries)
}

/// Drop entries older than the retention window. Runs at startup; a
/// failure is logged and otherwise ignored.
pub async fn cleanup_old_entries(pool: &DbPool) {
    let cutoff = (chrono::Utc::now() - chrono::Duration::days(RETENTION_DAYS))
        .to_rfc3339_opts(chrono::SecondsFormat::Micros, true);
    match sqlx::query("DELETE FROM audit_log WHERE created_at < $1")
        .bind(&cutoff)
        .execute(pool)
        .await
    {
        Ok(result) if result.rows_affected() > 0 => {
            log::info!("Audit cleanup removed {} old entries", result.rows_affected());
        }
        Ok(_) => {}
        Err(e) => log::warn!("Audit cleanup failed: {e}"),
    }
}
