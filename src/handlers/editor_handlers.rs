use std::collections::HashSet;

use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use super::progress_ws::{self, ConnectionMap};
use crate::auth::csrf;
use crate::auth::session::get_user_id;
use crate::db::DbPool;
use crate::errors::{AppError, render};
use crate::models::{project, slide_content};
use crate::templates_structs::{
    EditorTemplate, PageContext, PhraseOption, SidebarSection, SidebarSlide, SidebarStep,
};
use crate::vsl::progress::ProgressSummary;
use crate::vsl::slide::SlideId;
use crate::vsl::taxonomy;

#[derive(Deserialize)]
pub struct EditorQuery {
    pub slide: Option<String>,
}

#[derive(Deserialize)]
pub struct SlideContentForm {
    pub content: String,
    pub csrf_token: String,
}

/// Fold saved/active flags onto the static outline for the sidebar.
fn build_sidebar(saved: &HashSet<String>, active: &str) -> Vec<SidebarStep> {
    taxonomy::outline()
        .iter()
        .map(|step| SidebarStep {
            number: step.number,
            title: step.title,
            color: step.color,
            sections: step
                .sections
                .iter()
                .map(|section| SidebarSection {
                    number: section.number,
                    title: section.title,
                    slides: section
                        .slides
                        .iter()
                        .map(|slide| SidebarSlide {
                            id: slide.id.clone(),
                            number: slide.number,
                            title: slide.title.clone(),
                            saved: saved.contains(&slide.id),
                            active: slide.id == active,
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect()
}

/// GET /projects/{id}/editor?slide=slide-1-1-1
///
/// Without a `slide` parameter the editor opens on the first slide. An
/// unparseable identifier is a 400, not a silent fallback.
pub async fn editor_page(
    pool: web::Data<DbPool>,
    session: Session,
    path: web::Path<i64>,
    query: web::Query<EditorQuery>,
) -> Result<HttpResponse, AppError> {
    let user_id = get_user_id(&session)
        .ok_or_else(|| AppError::Session("Not logged in".to_string()))?;
    let project_id = path.into_inner();

    let project = project::find_by_id_for_user(&pool, user_id, project_id)
        .await?
        .ok_or(AppError::NotFound)?;

    let slide: SlideId = match &query.slide {
        Some(raw) => raw.parse()?,
        None => SlideId::FIRST,
    };

    let saved = slide_content::saved_slide_set(&pool, project_id).await?;
    let content = slide_content::load(&pool, project_id, slide)
        .await?
        .unwrap_or_default();

    let phrases = taxonomy::phrases(slide)
        .iter()
        .map(|&text| PhraseOption {
            text,
            selected: text == content,
        })
        .collect();

    let slide_key = slide.to_string();
    let steps = build_sidebar(&saved, &slide_key);
    let ctx = PageContext::build(&session)?;
    let progress = ProgressSummary::from_saved(saved.len());

    let tmpl = EditorTemplate {
        ctx,
        project,
        steps,
        slide_id: slide_key,
        step_title: taxonomy::step_title(slide),
        section_title: taxonomy::section_title(slide),
        step_color: taxonomy::step_color(slide),
        slide_number: slide.slide(),
        position: slide.position(),
        total: taxonomy::TOTAL_SLIDES as usize,
        phrases,
        content,
        prev_id: slide.backward().map(|s| s.to_string()),
        next_id: slide.forward().map(|s| s.to_string()),
        progress,
    };
    render(tmpl)
}

/// POST /projects/{id}/slides/{slide_id} - save content, then reopen the
/// editor on the same slide.
pub async fn save_slide(
    pool: web::Data<DbPool>,
    session: Session,
    path: web::Path<(i64, String)>,
    form: web::Form<SlideContentForm>,
    conn_map: web::Data<ConnectionMap>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let user_id = get_user_id(&session)
        .ok_or_else(|| AppError::Session("Not logged in".to_string()))?;
    let (project_id, raw_slide) = path.into_inner();
    let slide: SlideId = raw_slide.parse()?;

    project::find_by_id_for_user(&pool, user_id, project_id)
        .await?
        .ok_or(AppError::NotFound)?;

    slide_content::save(&pool, project_id, slide, &form.content).await?;

    let saved = slide_content::saved_count(&pool, project_id).await?;
    let summary = ProgressSummary::from_saved(saved as usize);
    progress_ws::notify_progress(&conn_map, user_id, project_id, summary);

    let details = serde_json::json!({
        "slide_id": slide.to_string(),
        "summary": "Slide content saved"
    });
    let _ = crate::audit::log(&pool, user_id, "slide.saved", "project", project_id, details).await;

    let _ = session.insert("flash", "Slide saved");
    Ok(HttpResponse::SeeOther()
        .insert_header((
            "Location",
            format!("/projects/{project_id}/editor?slide={slide}"),
        ))
        .finish())
}
