use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, cookie::Key, middleware, web};

mod audit;
mod auth;
mod db;
mod errors;
mod handlers;
mod models;
mod templates_structs;
mod vsl;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    // Ensure data directory exists
    std::fs::create_dir_all("data").expect("Failed to create data directory");

    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://data/vslkit.db".to_string());
    let pool = db::init_pool(&database_url)
        .await
        .expect("Failed to open database");
    db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    // Clean up old audit entries based on retention policy
    audit::cleanup_old_entries(&pool).await;

    // Session encryption key — load from SESSION_KEY env var for persistent sessions across restarts
    let secret_key = match std::env::var("SESSION_KEY") {
        Ok(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Ok(val) => {
            log::warn!("SESSION_KEY too short ({} bytes, need 64+) — generating random key", val.len());
            Key::generate()
        }
        Err(_) => {
            log::warn!("No SESSION_KEY set — generating random key (sessions lost on restart)");
            Key::generate()
        }
    };

    let limiter = auth::rate_limit::RateLimiter::new();
    let conn_map = handlers::progress_ws::new_connection_map();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    log::info!("Starting server at http://{bind_addr}");

    HttpServer::new(move || {
        let session_mw = SessionMiddleware::builder(
            CookieSessionStore::default(),
            secret_key.clone(),
        )
        .cookie_secure(false)
        .cookie_http_only(true)
        .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(limiter.clone()))
            .app_data(web::Data::new(conn_map.clone()))
            // Static files
            .service(actix_files::Files::new("/static", "./static"))
            // Public routes
            .route("/login", web::get().to(handlers::auth_handlers::login_page))
            .route("/login", web::post().to(handlers::auth_handlers::login_submit))
            .route("/signup", web::get().to(handlers::auth_handlers::signup_page))
            .route("/signup", web::post().to(handlers::auth_handlers::signup_submit))
            // Root redirect
            .route("/", web::get().to(|| async {
                actix_web::HttpResponse::SeeOther()
                    .insert_header(("Location", "/dashboard"))
                    .finish()
            }))
            // Progress socket guards its own session (401, not a login redirect)
            .route("/ws/progress", web::get().to(handlers::progress_ws::ws_connect))
            // JSON API
            .service(
                web::scope("/api/v1")
                    .wrap(actix_web::middleware::from_fn(auth::middleware::require_auth_api))
                    .configure(handlers::api_v1::configure),
            )
            // Protected routes
            .service(
                web::scope("")
                    .wrap(actix_web::middleware::from_fn(auth::middleware::require_auth))
                    .route("/dashboard", web::get().to(handlers::dashboard_handlers::index))
                    .route("/logout", web::post().to(handlers::auth_handlers::logout))
                    // Project lifecycle (dashboard forms)
                    .route("/projects", web::post().to(handlers::dashboard_handlers::create_project))
                    .route("/projects/{id}/delete", web::post().to(handlers::dashboard_handlers::delete_project))
                    // Editor
                    .route("/projects/{id}/editor", web::get().to(handlers::editor_handlers::editor_page))
                    .route("/projects/{id}/slides/{slide_id}", web::post().to(handlers::editor_handlers::save_slide))
            )
            // Default 404 handler (must be registered last)
            .default_service(web::to(|| async {
                let html = include_str!("../templates/errors/404.html");
                actix_web::HttpResponse::NotFound()
                    .content_type("text/html; charset=utf-8")
                    .body(html)
            }))
    })
    .bind(&bind_addr)?
    .run()
    .await
}
