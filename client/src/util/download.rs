//! Save-to-disk action for generated images.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

use crate::net::types::{Occasion, StylizedImage};

/// File name offered for a downloaded variant, e.g. `Office-outfit.jpg`.
#[must_use]
pub fn download_file_name(occasion: Occasion) -> String {
    format!("{}-outfit.jpg", occasion.label())
}

/// Only generated variants with a URL get a download button.
#[must_use]
pub fn can_download(image: &StylizedImage) -> bool {
    image.occasion != Occasion::Original && !image.url.is_empty()
}

/// Click a temporary `<a download>` so the browser saves `url`.
pub fn trigger_download(url: &str, file_name: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast as _;

        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(body) = doc.body() else {
            return;
        };
        let Ok(anchor) = doc
            .create_element("a")
            .map(|el| el.unchecked_into::<web_sys::HtmlAnchorElement>())
        else {
            return;
        };
        anchor.set_href(url);
        anchor.set_download(file_name);
        if body.append_child(&anchor).is_ok() {
            anchor.click();
            let _ = body.remove_child(&anchor);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, file_name);
    }
}
