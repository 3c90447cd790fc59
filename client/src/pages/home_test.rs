use super::*;
use crate::net::types::{GenerateStylesResponse, Occasion};
use crate::net::api::normalize_generated_images;
use crate::state::generation::GenerationStatus;

fn image(name: &str) -> SelectedImage {
    SelectedImage {
        name: format!("{name}.png"),
        mime: "image/png".to_owned(),
        size_bytes: 2048,
        preview_url: format!("blob:{name}"),
    }
}

fn past_session() -> HistoryItem {
    HistoryItem {
        session_id: "session-old".to_owned(),
        uploaded: "/uploads/old.jpg".to_owned(),
        results: Vec::new(),
        created_at: 1,
    }
}

// =============================================================
// History fetch
// =============================================================

#[test]
fn failed_history_fetch_yields_empty_list_and_stops_loading() {
    let mut history = HistoryState::default();
    assert!(history.is_loading());
    settle_history(&mut history, Err(ApiError::Network("connection refused".to_owned())));
    assert!(!history.is_loading());
    assert!(history.is_empty());
}

#[test]
fn successful_history_fetch_loads_items_in_order() {
    let mut history = HistoryState::default();
    settle_history(&mut history, Ok(vec![past_session()]));
    assert!(!history.is_loading());
    assert_eq!(history.items(), &[past_session()]);
}

// =============================================================
// Generation
// =============================================================

#[test]
fn successful_generation_prepends_session_with_preview_locator() {
    let mut history = HistoryState::default();
    history.finish_loading(vec![past_session()]);
    let mut upload = UploadState::default();
    upload.select(image("outfit"));
    let mut generation = GenerationState::default();
    let ticket = generation.begin().unwrap();

    let body: GenerateStylesResponse =
        serde_json::from_str(r#"{"generated_images":{"office":"a.jpg","party":"b.jpg"}}"#).unwrap();
    let images = normalize_generated_images(&body);
    let uploaded = upload.preview_url().unwrap().to_owned();

    assert!(settle_generation(&mut history, &mut generation, ticket, &uploaded, Ok(images), 42));

    assert_eq!(history.len(), 2);
    let newest = &history.items()[0];
    assert_eq!(newest.uploaded, "blob:outfit");
    assert_eq!(newest.created_at, 42);
    let labels: Vec<&str> = newest.results.iter().map(|r| r.occasion.label()).collect();
    assert_eq!(labels, vec!["Office", "Party"]);
    assert_eq!(newest.results[0].url, "a.jpg");
    assert_eq!(newest.results[1].url, "b.jpg");
    assert!(!generation.is_pending());
    assert_eq!(generation.status(), &GenerationStatus::Resolved(GenerationOutcome::Succeeded { images: 2 }));
}

#[test]
fn failed_generation_leaves_history_and_clears_busy_flag() {
    let mut history = HistoryState::default();
    history.finish_loading(vec![past_session()]);
    let before = history.clone();
    let mut generation = GenerationState::default();
    let ticket = generation.begin().unwrap();

    let recorded = settle_generation(&mut history, &mut generation, ticket, "blob:x", Err(ApiError::Status(500)), 7);

    assert!(!recorded);
    assert_eq!(history, before);
    assert!(!generation.is_pending());
    assert!(matches!(generation.status(), GenerationStatus::Resolved(GenerationOutcome::Failed(_))));
}

#[test]
fn result_after_abandon_is_discarded() {
    let mut history = HistoryState::default();
    history.finish_loading(Vec::new());
    let mut generation = GenerationState::default();
    let ticket = generation.begin().unwrap();
    generation.abandon();

    let images = vec![StylizedImage { url: "v.jpg".to_owned(), occasion: Occasion::Vacation }];
    assert!(!settle_generation(&mut history, &mut generation, ticket, "blob:x", Ok(images), 7));
    assert!(history.is_empty());
    assert_eq!(generation.status(), &GenerationStatus::Idle);
}

#[test]
fn session_finished_before_history_fetch_survives_startup_load() {
    let mut history = HistoryState::default();
    let mut generation = GenerationState::default();
    let ticket = generation.begin().unwrap();

    let images = vec![StylizedImage { url: "o.jpg".to_owned(), occasion: Occasion::Office }];
    assert!(settle_generation(&mut history, &mut generation, ticket, "blob:new", Ok(images), 50));
    assert!(history.is_loading());

    settle_history(&mut history, Ok(vec![past_session()]));

    assert!(!history.is_loading());
    assert!(history.references_upload("blob:new"));
    let uploads: Vec<&str> = history.items().iter().map(|i| i.uploaded.as_str()).collect();
    assert_eq!(uploads, vec!["blob:new", "/uploads/old.jpg"]);
}

#[test]
fn session_finished_before_failed_history_fetch_survives() {
    let mut history = HistoryState::default();
    let mut generation = GenerationState::default();
    let ticket = generation.begin().unwrap();

    let images = vec![StylizedImage { url: "p.jpg".to_owned(), occasion: Occasion::Party }];
    assert!(settle_generation(&mut history, &mut generation, ticket, "blob:new", Ok(images), 50));
    settle_history(&mut history, Err(ApiError::Status(503)));

    assert!(!history.is_loading());
    assert_eq!(history.len(), 1);
    assert!(history.references_upload("blob:new"));
}

// =============================================================
// Selection
// =============================================================

#[test]
fn second_selection_replaces_first_and_releases_it() {
    let history = HistoryState::default();
    let mut upload = UploadState::default();
    assert_eq!(replace_selection(&mut upload, &history, image("first")), None);
    let released = replace_selection(&mut upload, &history, image("second"));
    assert_eq!(released, Some(image("first")));
    assert_eq!(upload.selection, Some(image("second")));
    assert_eq!(upload.preview_url(), Some("blob:second"));
}

#[test]
fn selection_referenced_by_history_is_not_released() {
    let mut history = HistoryState::default();
    history.prepend(HistoryItem {
        session_id: "s".to_owned(),
        uploaded: "blob:first".to_owned(),
        results: Vec::new(),
        created_at: 1,
    });
    let mut upload = UploadState::default();
    replace_selection(&mut upload, &history, image("first"));
    assert_eq!(replace_selection(&mut upload, &history, image("second")), None);
    assert_eq!(upload.preview_url(), Some("blob:second"));
}
