//! Backend base URL handed from the host to the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders the configured URL into a `<meta name="backend-url">`
//! tag and also provides it through context during SSR. After hydration the
//! client reads the tag, so both sides agree without a build-time constant.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Used when no URL was configured or the meta tag is missing.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// `name` attribute of the meta tag carrying the URL.
pub const BACKEND_URL_META: &str = "backend-url";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendConfig {
    base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }
}

impl BackendConfig {
    /// Normalizes by trimming whitespace and trailing slashes. A blank value
    /// falls back to the default URL.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Self { base_url: DEFAULT_BACKEND_URL.to_owned() };
        }
        Self { base_url: trimmed.to_owned() }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Read the URL from the page's meta tag.
    #[must_use]
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| {
                    doc.query_selector(&format!("meta[name=\"{BACKEND_URL_META}\"]"))
                        .ok()
                        .flatten()
                })
                .and_then(|el| el.get_attribute("content"))
                .map_or_else(Self::default, |url| Self::new(&url))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }

    /// Resolve an image locator against this backend.
    #[must_use]
    pub fn image_src(&self, locator: &str) -> String {
        crate::net::api::resolve_image_src(&self.base_url, locator)
    }
}
