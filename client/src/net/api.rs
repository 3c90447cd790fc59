//! HTTP client for the image-generation backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): `fetch_history` reports `ApiError::Unavailable` since
//! the backend is only ever called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Calls return `Result<_, ApiError>`. Callers in `pages::home` turn failures
//! into "nothing happened" outcomes: an empty history or no new session.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{GenerateStylesResponse, HistoryItem, Occasion, StylizedImage};

pub const HISTORY_PATH: &str = "history";
pub const GENERATE_STYLES_PATH: &str = "generate-styles";
/// Multipart field carrying the uploaded image.
pub const IMAGE_FIELD: &str = "image";

/// Failure of a backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("backend responded with status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("backend calls are only available in the browser")]
    Unavailable,
}

/// Join the backend base URL and an endpoint path with exactly one slash.
#[must_use]
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[must_use]
pub fn history_endpoint(base_url: &str) -> String {
    endpoint(base_url, HISTORY_PATH)
}

#[must_use]
pub fn generate_styles_endpoint(base_url: &str) -> String {
    endpoint(base_url, GENERATE_STYLES_PATH)
}

/// Whether an image locator can be used as `src` without the backend prefix.
#[must_use]
pub fn is_absolute_locator(locator: &str) -> bool {
    ["http://", "https://", "blob:", "data:"]
        .iter()
        .any(|scheme| locator.starts_with(scheme))
}

/// Resolve a locator from either endpoint into a renderable `src`.
///
/// Server-relative paths are prefixed with the backend base URL. Empty
/// locators stay empty so the gallery can show its placeholder.
#[must_use]
pub fn resolve_image_src(base_url: &str, locator: &str) -> String {
    if locator.is_empty() || is_absolute_locator(locator) {
        return locator.to_owned();
    }
    endpoint(base_url, locator)
}

/// Turn the `generated_images` mapping into ordered image records.
///
/// Keys are matched to occasions after capitalizing their first letter.
/// Entries with an unknown occasion or a non-string URL are skipped.
#[must_use]
pub fn normalize_generated_images(response: &GenerateStylesResponse) -> Vec<StylizedImage> {
    response
        .generated_images
        .iter()
        .filter_map(|(key, value)| {
            let Some(occasion) = Occasion::from_key(key) else {
                log::warn!("skipping generated image with unknown occasion '{key}'");
                return None;
            };
            let Some(url) = value.as_str() else {
                log::warn!("skipping generated image for {occasion}: url is not a string");
                return None;
            };
            Some(StylizedImage { url: url.to_owned(), occasion })
        })
        .collect()
}

#[must_use]
pub fn new_session_id() -> String {
    format!("session-{}", uuid::Uuid::new_v4())
}

/// Build the session record for a completed generation.
#[must_use]
pub fn build_history_item(uploaded: &str, results: Vec<StylizedImage>, created_at: i64) -> HistoryItem {
    HistoryItem {
        session_id: new_session_id(),
        uploaded: uploaded.to_owned(),
        results,
        created_at,
    }
}

/// Fetch past sessions from `GET {backend}/history`, newest first.
///
/// # Errors
///
/// Returns an error if the request fails, the backend responds with a
/// non-OK status, or the body is not a list of sessions.
pub async fn fetch_history(base_url: &str) -> Result<Vec<HistoryItem>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&history_endpoint(base_url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<Vec<HistoryItem>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = base_url;
        Err(ApiError::Unavailable)
    }
}

/// Upload one image to `POST {backend}/generate-styles` as multipart field
/// `image` and return the generated variants in response order.
///
/// # Errors
///
/// Returns an error if the form cannot be built, the request fails, the
/// backend responds with a non-OK status, or the body cannot be decoded.
#[cfg(feature = "hydrate")]
pub async fn submit_for_styling(base_url: &str, file: &web_sys::File) -> Result<Vec<StylizedImage>, ApiError> {
    let form = web_sys::FormData::new().map_err(|e| ApiError::Network(format!("{e:?}")))?;
    form.append_with_blob(IMAGE_FIELD, file)
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;

    let resp = gloo_net::http::Request::post(&generate_styles_endpoint(base_url))
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    let body: GenerateStylesResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(normalize_generated_images(&body))
}
