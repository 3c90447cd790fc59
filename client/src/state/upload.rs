//! Single-slot upload intake.
//!
//! SYSTEM CONTEXT
//! ==============
//! The drop zone hands over one image at a time. This module keeps the
//! metadata and preview locator of the current selection; the browser `File`
//! handle itself lives in `util::file_slot` because it cannot cross threads.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

/// MIME types the picker accepts.
pub const ACCEPTED_MIME_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

/// Value for the file input `accept` attribute.
pub const ACCEPT_ATTRIBUTE: &str = "image/jpeg,image/png,.jpg,.jpeg,.png";

/// Advisory size shown to the user. Not enforced here.
pub const SIZE_HINT_BYTES: u64 = 10 * 1024 * 1024;

/// An image chosen by the user and not yet replaced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedImage {
    pub name: String,
    pub mime: String,
    pub size_bytes: u64,
    /// Local object URL usable as an `<img src>`.
    pub preview_url: String,
}

impl SelectedImage {
    #[must_use]
    pub fn exceeds_size_hint(&self) -> bool {
        self.size_bytes > SIZE_HINT_BYTES
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadState {
    pub selection: Option<SelectedImage>,
    /// `dragenter` minus `dragleave` events seen by the drop zone. Moving
    /// between the zone and its children fires a leave for one and an enter
    /// for the other, so only the count tells when the drag really left.
    drag_depth: u32,
}

impl UploadState {
    /// Replace the current selection, returning the one it displaced.
    pub fn select(&mut self, image: SelectedImage) -> Option<SelectedImage> {
        self.drag_depth = 0;
        self.selection.replace(image)
    }

    #[must_use]
    pub fn drag_active(&self) -> bool {
        self.drag_depth > 0
    }

    pub fn drag_enter(&mut self) {
        self.drag_depth = self.drag_depth.saturating_add(1);
    }

    pub fn drag_leave(&mut self) {
        self.drag_depth = self.drag_depth.saturating_sub(1);
    }

    /// Drop or cancel: the drag is over regardless of the count.
    pub fn drag_end(&mut self) {
        self.drag_depth = 0;
    }

    #[must_use]
    pub fn has_preview(&self) -> bool {
        self.selection.is_some()
    }

    #[must_use]
    pub fn preview_url(&self) -> Option<&str> {
        self.selection.as_ref().map(|s| s.preview_url.as_str())
    }
}

/// Whether a file with this MIME type may be selected.
#[must_use]
pub fn is_accepted_mime(mime: &str) -> bool {
    ACCEPTED_MIME_TYPES.iter().any(|accepted| accepted.eq_ignore_ascii_case(mime))
}

/// Keys that activate the drop zone like a click.
#[must_use]
pub fn opens_picker(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

/// Drop-zone prompt for the current drag state.
#[must_use]
pub fn drop_prompt(drag_active: bool) -> &'static str {
    if drag_active {
        "Drop the image here ..."
    } else {
        "Drag and drop an image here, or click to select"
    }
}
