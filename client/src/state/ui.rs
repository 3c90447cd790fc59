//! Local UI chrome state and the derived view phase.
//!
//! DESIGN
//! ======
//! Keeps presentation concerns (theme, which panel is visible) out of the
//! history and upload models. The phase is computed from the other stores
//! rather than stored, so it cannot drift from them.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use super::generation::GenerationState;
use super::upload::UploadState;

/// UI state for theme selection.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
}

/// What the upload area currently shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewPhase {
    /// Nothing selected yet; only the drop zone.
    #[default]
    Idle,
    /// A file is selected; preview and "Generate Styles" are visible.
    HasPreview,
    /// A submission is in flight; the loading game is visible.
    Generating,
}

impl ViewPhase {
    #[must_use]
    pub fn derive(upload: &UploadState, generation: &GenerationState) -> Self {
        if generation.is_pending() {
            Self::Generating
        } else if upload.has_preview() {
            Self::HasPreview
        } else {
            Self::Idle
        }
    }

    #[must_use]
    pub fn shows_preview(self) -> bool {
        self == Self::HasPreview
    }

    #[must_use]
    pub fn is_generating(self) -> bool {
        self == Self::Generating
    }
}
