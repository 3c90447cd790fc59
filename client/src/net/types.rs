//! Wire types shared by the backend client and the history views.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Records are plain values;
//! once built they are never mutated. Decoding is lenient about occasions: a
//! key parses the same way in both endpoints, and a history result with an
//! unknown occasion is dropped instead of failing the whole list.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Category a generated image was styled for.
///
/// `Original` labels the uploaded photo itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Occasion {
    Original,
    Office,
    Party,
    Vacation,
}

impl Occasion {
    /// Occasions the backend generates, in display order.
    pub const GENERATED: [Self; 3] = [Self::Office, Self::Party, Self::Vacation];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Original => "Original",
            Self::Office => "Office",
            Self::Party => "Party",
            Self::Vacation => "Vacation",
        }
    }

    /// Parse a backend mapping key such as `"office"`.
    ///
    /// Only the first letter is capitalized before matching, so `"office"`
    /// and `"Office"` both parse while `"OFFICE"` does not.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        let label = capitalize_first(key);
        std::iter::once(Self::Original)
            .chain(Self::GENERATED)
            .find(|occasion| occasion.label() == label)
    }
}

impl<'de> Deserialize<'de> for Occasion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        Self::from_key(&key).ok_or_else(|| {
            serde::de::Error::unknown_variant(&key, &["Original", "Office", "Party", "Vacation"])
        })
    }
}

impl std::fmt::Display for Occasion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Uppercase the first character and keep the rest as-is.
#[must_use]
pub fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// One generated (or original) image.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StylizedImage {
    pub url: String,
    pub occasion: Occasion,
}

/// One completed upload-and-generate session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    pub session_id: String,
    /// Locator of the original upload.
    pub uploaded: String,
    #[serde(default, deserialize_with = "known_results")]
    pub results: Vec<StylizedImage>,
    /// Milliseconds since the Unix epoch.
    pub created_at: i64,
}

/// Body returned by `POST /generate-styles`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct GenerateStylesResponse {
    /// Occasion key (lowercase) to image URL, in response order.
    #[serde(default)]
    pub generated_images: serde_json::Map<String, serde_json::Value>,
}

#[derive(Deserialize)]
struct WireResult {
    #[serde(default)]
    url: String,
    #[serde(default)]
    occasion: String,
}

/// Keep results whose occasion parses; log and skip the rest.
fn known_results<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<StylizedImage>, D::Error> {
    let raw = Vec::<WireResult>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|result| match Occasion::from_key(&result.occasion) {
            Some(occasion) => Some(StylizedImage { url: result.url, occasion }),
            None => {
                log::warn!("skipping history result with unknown occasion '{}'", result.occasion);
                None
            }
        })
        .collect())
}
