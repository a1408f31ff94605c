use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::db::DbPool;
use crate::errors::AppError;
use crate::handlers::progress_ws::{self, ConnectionMap};
use crate::models::{project, slide_content};
use crate::templates_structs::{ApiSlideContentRequest, ApiSlideContentResponse};
use crate::vsl::progress::ProgressSummary;
use crate::vsl::slide::SlideId;

/// GET /api/v1/projects/{id}/slides - Composite keys of every saved
/// slide, in reading order.
pub async fn list_saved(
    pool: web::Data<DbPool>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let user_id = super::session_user(&session)?;
    let project_id = path.into_inner();

    project::find_by_id_for_user(&pool, user_id, project_id)
        .await?
        .ok_or(AppError::NotFound)?;

    let ids = slide_content::saved_slide_ids(&pool, project_id).await?;
    let saved: Vec<String> = ids.iter().map(|id| format!("{project_id}_{id}")).collect();
    Ok(HttpResponse::Ok().json(serde_json::json!({ "saved": saved })))
}

/// GET /api/v1/projects/{id}/slides/{slide_id} - Stored content for one
/// slide. 404 if the slide was never saved; 400 for a bad identifier.
pub async fn read(
    pool: web::Data<DbPool>,
    session: Session,
    path: web::Path<(i64, String)>,
) -> Result<HttpResponse, AppError> {
    let user_id = super::session_user(&session)?;
    let (project_id, raw_slide) = path.into_inner();
    let slide: SlideId = raw_slide.parse()?;

    project::find_by_id_for_user(&pool, user_id, project_id)
        .await?
        .ok_or(AppError::NotFound)?;

    let content = slide_content::load(&pool, project_id, slide)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(HttpResponse::Ok().json(ApiSlideContentResponse {
        project_id,
        slide_id: slide.to_string(),
        content,
    }))
}

/// PUT /api/v1/projects/{id}/slides/{slide_id} - Save content for one
/// slide and answer with the project's new progress summary.
pub async fn save(
    pool: web::Data<DbPool>,
    session: Session,
    path: web::Path<(i64, String)>,
    body: web::Json<ApiSlideContentRequest>,
    conn_map: web::Data<ConnectionMap>,
) -> Result<HttpResponse, AppError> {
    let user_id = super::session_user(&session)?;
    let (project_id, raw_slide) = path.into_inner();
    let slide: SlideId = raw_slide.parse()?;

    project::find_by_id_for_user(&pool, user_id, project_id)
        .await?
        .ok_or(AppError::NotFound)?;

    slide_content::save(&pool, project_id, slide, &body.content).await?;

    let saved = slide_content::saved_count(&pool, project_id).await?;
    let summary = ProgressSummary::from_saved(saved as usize);
    progress_ws::notify_progress(&conn_map, user_id, project_id, summary);

    let details = serde_json::json!({
        "slide_id": slide.to_string(),
        "summary": "Slide content saved via API"
    });
    let _ = crate::audit::log(&pool, user_id, "slide.saved", "project", project_id, details).await;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "slide_id": slide.to_string(),
        "saved_key": slide.saved_key(project_id),
        "progress": summary,
    })))
}

/// GET /api/v1/projects/{id}/progress - Current completion summary.
pub async fn progress(
    pool: web::Data<DbPool>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let user_id = super::session_user(&session)?;
    let project_id = path.into_inner();

    project::find_by_id_for_user(&pool, user_id, project_id)
        .await?
        .ok_or(AppError::NotFound)?;

    let saved = slide_content::saved_count(&pool, project_id).await?;
    Ok(HttpResponse::Ok().json(ProgressSummary::from_saved(saved as usize)))
}
