//! Wire types shared by every front-end.
//!
//! DESIGN
//! ======
//! `Car` mirrors the server's JSON record. Integer columns are decoded
//! leniently (`2020.0` is a year). The price is a decimal column and is kept
//! as the server's text (`"15000.50"`) so it is shown and sent back unchanged.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned car identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CarId(pub u64);

impl fmt::Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CarId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// A car listing owned by the authenticated user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Car {
    /// Server-assigned identifier.
    pub id: CarId,
    pub make: String,
    pub model: String,
    /// Model year.
    #[serde(deserialize_with = "deserialize_i32_from_number")]
    pub year: i32,
    /// Asking price exactly as the server rendered it.
    #[serde(deserialize_with = "deserialize_decimal_text")]
    pub price: String,
    /// Server-relative path of the stored image, if one was uploaded.
    #[serde(default)]
    pub image: Option<String>,
}

impl Car {
    /// One-line listing text, e.g. `"2020 Toyota Corolla - $15000"`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} {} {} - ${}", self.year, self.make, self.model, self.price)
    }

    /// Image alt text, e.g. `"Toyota Corolla"`.
    #[must_use]
    pub fn alt_text(&self) -> String {
        format!("{} {}", self.make, self.model)
    }

    /// Displayable image URL resolved against the API base URL.
    #[must_use]
    pub fn image_url(&self, base_url: &str) -> Option<String> {
        self.image
            .as_deref()
            .filter(|path| !path.trim().is_empty())
            .map(|path| resolve_media_url(base_url, path))
    }
}

/// Prefix a server-relative media path with the API host.
///
/// Absolute URLs are returned unchanged.
#[must_use]
pub fn resolve_media_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_owned();
    }
    let base = base_url.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// The authenticated user behind a session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<u64>,
    pub username: String,
}

/// A locally selected image file waiting to be uploaded.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Build an upload, guessing the content type from the file extension.
    #[must_use]
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = guess_content_type(&file_name).map(str::to_owned);
        Self { file_name, content_type, bytes }
    }
}

impl fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Map common image extensions to a MIME type.
#[must_use]
pub fn guess_content_type(file_name: &str) -> Option<&'static str> {
    let ext = file_name.rsplit_once('.')?.1.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "bmp" => Some("image/bmp"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

fn deserialize_i32_from_number<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let int = match &value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                int
            } else {
                match number.as_f64() {
                    #[allow(clippy::cast_possible_truncation)]
                    Some(float) if float.is_finite() && float.fract() == 0.0 => float as i64,
                    _ => return Err(D::Error::custom("expected integer-compatible number")),
                }
            }
        }
        serde_json::Value::String(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("expected integer string, got {text:?}")))?,
        _ => return Err(D::Error::custom("expected number")),
    };
    i32::try_from(int).map_err(|_| D::Error::custom(format!("value {int} out of range for i32")))
}

fn deserialize_decimal_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let text = match value {
        serde_json::Value::Number(number) => number.to_string(),
        serde_json::Value::String(text) => text.trim().to_owned(),
        _ => return Err(D::Error::custom("expected number or numeric string")),
    };
    match text.parse::<f64>() {
        Ok(float) if float.is_finite() => Ok(text),
        _ => Err(D::Error::custom(format!("expected numeric string, got {text:?}"))),
    }
}
