pub mod projects;
pub mod slides;

use actix_session::Session;
use actix_web::{
    Error, HttpResponse,
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    middleware::Next,
    web,
};

use crate::auth::session::get_user_id;
use crate::errors::AppError;

/// CSRF protection for REST API mutation endpoints.
///
/// Rejects POST/PUT/DELETE requests that don't have Content-Type: application/json.
/// Browsers cannot send cross-origin JSON with cookies via simple form POST —
/// the Content-Type check acts as a CSRF guard without requiring tokens.
/// GET requests are exempt (read-only, no state changes).
async fn require_json_content_type(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let method = req.method().clone();

    if method == actix_web::http::Method::POST
        || method == actix_web::http::Method::PUT
        || method == actix_web::http::Method::DELETE
    {
        let content_type = req
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        if !content_type.starts_with("application/json") {
            let body = serde_json::json!({
                "error": "Content-Type must be application/json for mutation requests"
            });
            let response = HttpResponse::BadRequest().json(body);
            return Ok(req.into_response(response).map_into_right_body());
        }
    }

    next.call(req).await.map(|res| res.map_into_left_body())
}

pub(crate) fn session_user(session: &Session) -> Result<i64, AppError> {
    get_user_id(session).ok_or_else(|| AppError::Session("Not logged in".to_string()))
}

/// GET /api/v1/taxonomy - the full step/section/slide tree.
async fn taxonomy_tree() -> HttpResponse {
    HttpResponse::Ok().json(crate::vsl::taxonomy::outline())
}

/// Configure API v1 routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/projects")
            .wrap(actix_web::middleware::from_fn(require_json_content_type))
            .route("", web::get().to(projects::list))
            .route("", web::post().to(projects::create))
            .route("/{id}", web::delete().to(projects::delete))
            .route("/{id}/progress", web::get().to(slides::progress))
            .route("/{id}/slides", web::get().to(slides::list_saved))
            .route("/{id}/slides/{slide_id}", web::get().to(slides::read))
            .route("/{id}/slides/{slide_id}", web::put().to(slides::save)),
    );
    cfg.route("/taxonomy", web::get().to(taxonomy_tree));
}
