//! Slide content tests: save/load, idempotent re-save, last-write-wins,
//! the saved-slide set, and the touch on the owning project.

mod common;

use std::time::Duration;

use common::*;
use vslkit::models::{project, slide_content};
use vslkit::vsl::slide::SlideId;

async fn setup_project() -> (vslkit::db::DbPool, i64) {
    let pool = setup_test_pool().await;
    let user_id = create_test_user(&pool).await;
    let created = project::create(&pool, user_id, "Launch VSL", None)
        .await
        .expect("Failed to create project");
    (pool, created.id)
}

#[tokio::test]
async fn save_then_load_round_trips() {
    let (pool, project_id) = setup_project().await;
    let slide: SlideId = "slide-2-1-3".parse().unwrap();

    slide_content::save(&pool, project_id, slide, "Meu nome é Ana.").await.unwrap();

    let loaded = slide_content::load(&pool, project_id, slide).await.unwrap();
    assert_eq!(loaded.as_deref(), Some("Meu nome é Ana."));
}

#[tokio::test]
async fn unsaved_slide_loads_absent() {
    let (pool, project_id) = setup_project().await;
    let slide: SlideId = "slide-4-1-2".parse().unwrap();

    assert!(slide_content::load(&pool, project_id, slide).await.unwrap().is_none());
}

#[tokio::test]
async fn resave_is_idempotent_and_last_write_wins() {
    let (pool, project_id) = setup_project().await;
    let slide: SlideId = "slide-1-1-1".parse().unwrap();

    slide_content::save(&pool, project_id, slide, "primeira versão").await.unwrap();
    slide_content::save(&pool, project_id, slide, "segunda versão").await.unwrap();

    assert_eq!(slide_content::saved_count(&pool, project_id).await.unwrap(), 1);
    let loaded = slide_content::load(&pool, project_id, slide).await.unwrap();
    assert_eq!(loaded.as_deref(), Some("segunda versão"));
}

#[tokio::test]
async fn saved_ids_come_back_in_reading_order() {
    let (pool, project_id) = setup_project().await;

    // Saved out of order on purpose
    for raw in ["slide-2-1-1", "slide-1-2-3", "slide-1-1-1", "slide-5-2-3"] {
        let slide: SlideId = raw.parse().unwrap();
        slide_content::save(&pool, project_id, slide, "texto").await.unwrap();
    }

    let ids = slide_content::saved_slide_ids(&pool, project_id).await.unwrap();
    assert_eq!(
        ids,
        vec!["slide-1-1-1", "slide-1-2-3", "slide-2-1-1", "slide-5-2-3"]
    );
}

#[tokio::test]
async fn saved_set_supports_membership_checks() {
    let (pool, project_id) = setup_project().await;
    let slide: SlideId = "slide-3-1-2".parse().unwrap();

    slide_content::save(&pool, project_id, slide, "texto").await.unwrap();

    let set = slide_content::saved_slide_set(&pool, project_id).await.unwrap();
    assert!(set.contains("slide-3-1-2"));
    assert!(!set.contains("slide-3-1-1"));
}

#[tokio::test]
async fn projects_do_not_share_content() {
    let pool = setup_test_pool().await;
    let user_id = create_test_user(&pool).await;
    let a = project::create(&pool, user_id, "A", None).await.unwrap();
    let b = project::create(&pool, user_id, "B", None).await.unwrap();
    let slide: SlideId = "slide-1-1-1".parse().unwrap();

    slide_content::save(&pool, a.id, slide, "conteúdo de A").await.unwrap();

    assert!(slide_content::load(&pool, b.id, slide).await.unwrap().is_none());
    assert_eq!(slide_content::saved_count(&pool, b.id).await.unwrap(), 0);
}

#[tokio::test]
async fn save_touches_owning_project() {
    let pool = setup_test_pool().await;
    let user_id = create_test_user(&pool).await;
    let created = project::create(&pool, user_id, "Launch VSL", None).await.unwrap();
    let before = created.updated_at.clone();

    tokio::time::sleep(Duration::from_millis(5)).await;
    let slide: SlideId = "slide-1-1-1".parse().unwrap();
    slide_content::save(&pool, created.id, slide, "texto").await.unwrap();

    let after = project::find_by_id_for_user(&pool, user_id, created.id)
        .await
        .unwrap()
        .unwrap()
        .updated_at;
    assert!(after > before, "save did not touch updated_at: {before} vs {after}");
}
