use actix_session::Session;
use askama::Template;
use serde::{Deserialize, Serialize};

use crate::auth::csrf;
use crate::auth::session::{get_display_name, get_email, take_flash};
use crate::errors::AppError;
use crate::models::project::{Project, ProjectListItem};
use crate::vsl::progress::ProgressSummary;

pub const APP_NAME: &str = "Ultimate VSL";

/// Common context shared by all authenticated pages.
/// Templates access these as `ctx.display_name`, `ctx.csrf_token`, etc.
pub struct PageContext {
    pub display_name: String,
    pub email: String,
    pub avatar_initial: String,
    pub flash: Option<String>,
    pub app_name: &'static str,
    pub csrf_token: String,
}

impl PageContext {
    pub fn build(session: &Session) -> Result<Self, AppError> {
        let display_name = get_display_name(session)
            .map_err(|e| AppError::Session(format!("Failed to get display name: {e}")))?;
        let email = get_email(session)
            .map_err(|e| AppError::Session(format!("Failed to get email: {e}")))?;
        let flash = take_flash(session);
        let csrf_token = csrf::get_or_create_token(session);
        let avatar_initial = display_name
            .chars()
            .next()
            .unwrap_or('?')
            .to_uppercase()
            .to_string();
        Ok(Self {
            display_name,
            email,
            avatar_initial,
            flash,
            app_name: APP_NAME,
            csrf_token,
        })
    }
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    pub flash: Option<String>,
    pub app_name: &'static str,
    pub csrf_token: String,
}

#[derive(Template)]
#[template(path = "signup.html")]
pub struct SignupTemplate {
    pub errors: Vec<String>,
    pub email: String,
    pub display_name: String,
    pub app_name: &'static str,
    pub csrf_token: String,
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub ctx: PageContext,
    pub projects: Vec<ProjectListItem>,
    pub errors: Vec<String>,
}

/// One step in the editor sidebar, with per-request saved/active flags
/// folded onto the static outline.
pub struct SidebarStep {
    pub number: u8,
    pub title: &'static str,
    pub color: &'static str,
    pub sections: Vec<SidebarSection>,
}

pub struct SidebarSection {
    pub number: u8,
    pub title: &'static str,
    pub slides: Vec<SidebarSlide>,
}

pub struct SidebarSlide {
    pub id: String,
    pub number: u8,
    pub title: String,
    pub saved: bool,
    pub active: bool,
}

/// A suggested phrase, marked when it matches the stored content.
pub struct PhraseOption {
    pub text: &'static str,
    pub selected: bool,
}

#[derive(Template)]
#[template(path = "editor.html")]
pub struct EditorTemplate {
    pub ctx: PageContext,
    pub project: Project,
    pub steps: Vec<SidebarStep>,
    pub slide_id: String,
    pub step_title: &'static str,
    pub section_title: &'static str,
    pub step_color: &'static str,
    pub slide_number: u8,
    pub position: usize,
    pub total: usize,
    pub phrases: Vec<PhraseOption>,
    pub content: String,
    pub prev_id: Option<String>,
    pub next_id: Option<String>,
    pub progress: ProgressSummary,
}

// --- API request/response bodies ---

/// Create-project request for the API.
#[derive(Deserialize, Debug)]
pub struct ApiProjectRequest {
    pub name: String,
    pub description: Option<String>,
}

/// Save-slide request for the API.
#[derive(Deserialize, Debug)]
pub struct ApiSlideContentRequest {
    pub content: String,
}

/// Saved slide content in API responses.
#[derive(Serialize, Debug, Clone)]
pub struct ApiSlideContentResponse {
    pub project_id: i64,
    pub slide_id: String,
    pub content: String,
}

/// API error response.
#[derive(Serialize, Debug)]
pub struct ApiErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
