//! Per-slide script content, keyed by (project, slide).
//!
//! A slide counts as saved once a row exists for it. Saving again
//! replaces the content in place, so the saved set never double-counts.

use std::collections::HashSet;

use crate::db::DbPool;
use crate::errors::AppError;
use crate::vsl::slide::SlideId;

/// Upsert the content for one slide and touch the owning project's
/// `updated_at`, atomically. Last write wins.
pub async fn save(
    pool: &DbPool,
    project_id: i64,
    slide: SlideId,
    content: &str,
) -> Result<(), AppError> {
    let now = crate::models::now();
    let mut tx = pool.begin().await?;

    sqlx::query(
        "INSERT INTO slide_contents (project_id, slide_id, content, created_at, updated_at) \
         VALUES ($1, $2, $3, $4, $5) \
         ON CONFLICT (project_id, slide_id) \
         DO UPDATE SET content = excluded.content, updated_at = excluded.updated_at",
    )
    .bind(project_id)
    .bind(slide.to_string())
    .bind(content)
    .bind(&now)
    .bind(&now)
    .execute(&mut *tx)
    .await?;

    sqlx::query("UPDATE projects SET updated_at = $1 WHERE id = $2")
        .bind(&now)
        .bind(project_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(())
}

/// Content for one slide, or None if it was never saved.
pub async fn load(
    pool: &DbPool,
    project_id: i64,
    slide: SlideId,
) -> Result<Option<String>, AppError> {
    let content = sqlx::query_scalar::<_, String>(
        "SELECT content FROM slide_contents WHERE project_id = $1 AND slide_id = $2",
    )
    .bind(project_id)
    .bind(slide.to_string())
    .fetch_optional(pool)
    .await?;
    Ok(content)
}

/// Canonical identifiers of every saved slide, in reading order.
pub async fn saved_slide_ids(pool: &DbPool, project_id: i64) -> Result<Vec<String>, AppError> {
    let ids = sqlx::query_scalar::<_, String>(
        "SELECT slide_id FROM slide_contents WHERE project_id = $1 ORDER BY slide_id",
    )
    .bind(project_id)
    .fetch_all(pool)
    .await?;
    Ok(ids)
}

/// Saved identifiers as a set, for membership checks while rendering.
pub async fn saved_slide_set(
    pool: &DbPool,
    project_id: i64,
) -> Result<HashSet<String>, AppError> {
    Ok(saved_slide_ids(pool, project_id).await?.into_iter().collect())
}

/// Number of distinct saved slides in the project.
pub async fn saved_count(pool: &DbPool, project_id: i64) -> Result<i64, AppError> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM slide_contents WHERE project_id = $1")
            .bind(project_id)
            .fetch_one(pool)
            .await?;
    Ok(count)
}
