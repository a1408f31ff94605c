use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::auth::validate;
use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::project;
use crate::templates_structs::{ApiErrorResponse, ApiProjectRequest};

/// GET /api/v1/projects - List the caller's projects with progress,
/// most recently updated first.
pub async fn list(pool: web::Data<DbPool>, session: Session) -> Result<HttpResponse, AppError> {
    let user_id = super::session_user(&session)?;

    let projects = project::find_all_for_user(&pool, user_id).await?;
    Ok(HttpResponse::Ok().json(projects))
}

/// POST /api/v1/projects - Create a project owned by the caller.
pub async fn create(
    pool: web::Data<DbPool>,
    session: Session,
    body: web::Json<ApiProjectRequest>,
) -> Result<HttpResponse, AppError> {
    let user_id = super::session_user(&session)?;

    let mut errors = Vec::new();
    errors.extend(validate::validate_required(&body.name, "Project name", 100));
    if let Some(desc) = &body.description {
        errors.extend(validate::validate_optional(desc, "Description", 500));
    }

    if !errors.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiErrorResponse {
            error: "Validation failed".to_string(),
            details: Some(errors.join("; ")),
        }));
    }

    let created = project::create(&pool, user_id, &body.name, body.description.as_deref()).await?;

    let details = serde_json::json!({
        "name": created.name,
        "summary": "Project created via API"
    });
    let _ = crate::audit::log(&pool, user_id, "project.created", "project", created.id, details).await;

    Ok(HttpResponse::Created().json(created))
}

/// DELETE /api/v1/projects/{id} - Delete a project and all its slide
/// content. 404 whether the project is missing or owned by someone else.
pub async fn delete(
    pool: web::Data<DbPool>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let user_id = super::session_user(&session)?;
    let project_id = path.into_inner();

    if !project::delete_for_user(&pool, user_id, project_id).await? {
        return Err(AppError::NotFound);
    }

    let details = serde_json::json!({ "summary": "Project deleted via API" });
    let _ = crate::audit::log(&pool, user_id, "project.deleted", "project", project_id, details).await;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}
