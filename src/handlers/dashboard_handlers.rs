use actix_session::Session;
use actix_web::{HttpResponse, web};

use super::auth_handlers::CsrfOnly;
use crate::auth::csrf;
use crate::auth::session::get_user_id;
use crate::auth::validate;
use crate::db::DbPool;
use crate::errors::{AppError, render};
use crate::models::project::{self, ProjectForm};
use crate::templates_structs::{DashboardTemplate, PageContext};

/// GET /dashboard - project list with completion bars and a create form.
pub async fn index(pool: web::Data<DbPool>, session: Session) -> Result<HttpResponse, AppError> {
    let user_id = get_user_id(&session)
        .ok_or_else(|| AppError::Session("Not logged in".to_string()))?;

    let ctx = PageContext::build(&session)?;
    let projects = project::find_all_for_user(&pool, user_id).await?;
    render(DashboardTemplate {
        ctx,
        projects,
        errors: vec![],
    })
}

/// POST /projects - create a project, then return to the dashboard.
pub async fn create_project(
    pool: web::Data<DbPool>,
    session: Session,
    form: web::Form<ProjectForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let user_id = get_user_id(&session)
        .ok_or_else(|| AppError::Session("Not logged in".to_string()))?;

    let mut errors = Vec::new();
    errors.extend(validate::validate_required(&form.name, "Project name", 100));
    errors.extend(validate::validate_optional(&form.description, "Description", 500));

    if !errors.is_empty() {
        let ctx = PageContext::build(&session)?;
        let projects = project::find_all_for_user(&pool, user_id).await?;
        return render(DashboardTemplate { ctx, projects, errors });
    }

    let description = if form.description.trim().is_empty() {
        None
    } else {
        Some(form.description.as_str())
    };
    let created = project::create(&pool, user_id, &form.name, description).await?;

    let details = serde_json::json!({
        "name": created.name,
        "summary": "Project created"
    });
    let _ = crate::audit::log(&pool, user_id, "project.created", "project", created.id, details).await;

    let _ = session.insert("flash", "Project created");
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", "/dashboard"))
        .finish())
}

/// POST /projects/{id}/delete - delete a project and all its slide content.
pub async fn delete_project(
    pool: web::Data<DbPool>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let user_id = get_user_id(&session)
        .ok_or_else(|| AppError::Session("Not logged in".to_string()))?;
    let project_id = path.into_inner();

    if !project::delete_for_user(&pool, user_id, project_id).await? {
        return Err(AppError::NotFound);
    }

    let details = serde_json::json!({ "summary": "Project deleted" });
    let _ = crate::audit::log(&pool, user_id, "project.deleted", "project", project_id, details).await;

    let _ = session.insert("flash", "Project deleted");
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", "/dashboard"))
        .finish())
}
