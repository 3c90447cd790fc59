//! Theme preference: stored choice, else the system color scheme.
//!
//! The choice is kept in `localStorage` as `"true"`/`"false"` and shown by
//! toggling the `dark` class on `<html>`. Outside the browser every call is a
//! no-op and the preference reads as light.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "outfit_stylizer_dark";

/// Class applied to `<html>` while dark mode is on.
pub const DARK_CLASS: &str = "dark";

/// Stored form of a preference.
#[must_use]
pub fn encode_preference(dark: bool) -> &'static str {
    if dark { "true" } else { "false" }
}

/// Parse a stored value. Anything unrecognized counts as no preference.
#[must_use]
pub fn decode_preference(stored: &str) -> Option<bool> {
    match stored {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(feature = "hydrate")]
fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|mq| mq.matches())
}

/// Whether the page should start dark.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        storage()
            .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
            .and_then(|stored| decode_preference(&stored))
            .unwrap_or_else(system_prefers_dark)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Add or remove the `dark` class on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element());
        if let Some(root) = root {
            let _ = root.class_list().toggle_with_force(DARK_CLASS, enabled);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Flip the theme, show it, and remember it. Returns the new value.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.set_item(STORAGE_KEY, encode_preference(next));
        }
    }
    next
}

/// Header toggle glyph: the sun offers light mode, the moon offers dark.
pub fn toggle_icon(dark_mode: bool) -> &'static str {
    if dark_mode { "☀" } else { "☾" }
}
