//! Browser-side holder for the selected image file.
//!
//! `web_sys::File` is not `Send`, so it cannot live in the `RwSignal` that
//! carries `UploadState`. The slot keeps it in thread-local arena storage and
//! is replaced in the same handler that updates the upload state, so the two
//! never disagree about which file is current. Outside the browser the slot
//! is an empty marker.

#[cfg(feature = "hydrate")]
use leptos::prelude::*;

use crate::state::upload::SelectedImage;
#[cfg(feature = "hydrate")]
use crate::state::upload::is_accepted_mime;

#[derive(Clone, Copy)]
pub struct FileSlot {
    #[cfg(feature = "hydrate")]
    file: StoredValue<Option<web_sys::File>, LocalStorage>,
}

impl Default for FileSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSlot {
    #[must_use]
    pub fn new() -> Self {
        Self {
            #[cfg(feature = "hydrate")]
            file: StoredValue::new_local(None),
        }
    }

    #[cfg(feature = "hydrate")]
    pub fn replace(self, file: web_sys::File) {
        self.file.set_value(Some(file));
    }

    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn current(self) -> Option<web_sys::File> {
        self.file.get_value()
    }
}

/// Build the selection record for a picked or dropped file.
///
/// Returns `None` for MIME types the picker would not offer or when the
/// browser refuses to create an object URL.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn preview_file(file: &web_sys::File) -> Option<SelectedImage> {
    let mime = file.type_();
    if !is_accepted_mime(&mime) {
        log::warn!("ignoring {} with unsupported type '{mime}'", file.name());
        return None;
    }
    let preview_url = web_sys::Url::create_object_url_with_blob(file).ok()?;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let size_bytes = file.size() as u64;
    Some(SelectedImage { name: file.name(), mime, size_bytes, preview_url })
}

/// Release the object URL of a selection nothing refers to anymore.
pub fn revoke_preview(image: &SelectedImage) {
    #[cfg(feature = "hydrate")]
    {
        let _ = web_sys::Url::revoke_object_url(&image.preview_url);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = image;
    }
}
