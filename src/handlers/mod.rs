pub mod api_v1;
pub mod auth_handlers;
pub mod dashboard_handlers;
pub mod editor_handlers;
pub mod progress_ws;
