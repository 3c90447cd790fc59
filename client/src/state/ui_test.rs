use super::*;
use crate::state::generation::GenerationOutcome;
use crate::state::upload::SelectedImage;

fn selected() -> UploadState {
    let mut upload = UploadState::default();
    upload.select(SelectedImage {
        name: "a.jpg".to_owned(),
        mime: "image/jpeg".to_owned(),
        size_bytes: 10,
        preview_url: "blob:a".to_owned(),
    });
    upload
}

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_dark_mode_off() {
    assert!(!UiState::default().dark_mode);
}

// =============================================================
// ViewPhase
// =============================================================

#[test]
fn view_phase_default_is_idle() {
    assert_eq!(ViewPhase::default(), ViewPhase::Idle);
}

#[test]
fn nothing_selected_is_idle() {
    let phase = ViewPhase::derive(&UploadState::default(), &GenerationState::default());
    assert_eq!(phase, ViewPhase::Idle);
    assert!(!phase.shows_preview());
    assert!(!phase.is_generating());
}

#[test]
fn selection_moves_to_has_preview() {
    let phase = ViewPhase::derive(&selected(), &GenerationState::default());
    assert_eq!(phase, ViewPhase::HasPreview);
    assert!(phase.shows_preview());
}

#[test]
fn pending_submission_hides_preview() {
    let mut generation = GenerationState::default();
    generation.begin();
    let phase = ViewPhase::derive(&selected(), &generation);
    assert_eq!(phase, ViewPhase::Generating);
    assert!(phase.is_generating());
    assert!(!phase.shows_preview());
}

#[test]
fn resolution_returns_to_preview_with_selection_kept() {
    let mut generation = GenerationState::default();
    let ticket = generation.begin().unwrap();
    generation.resolve(ticket, GenerationOutcome::Failed("boom".to_owned()));
    assert_eq!(ViewPhase::derive(&selected(), &generation), ViewPhase::HasPreview);
}
