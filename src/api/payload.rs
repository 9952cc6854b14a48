//! Multipart body shared by create and update.

#[cfg(test)]
#[path = "payload_test.rs"]
mod payload_test;

use crate::types::ImageUpload;

pub const FIELD_MAKE: &str = "make";
pub const FIELD_MODEL: &str = "model";
pub const FIELD_YEAR: &str = "year";
pub const FIELD_PRICE: &str = "price";
pub const FIELD_IMAGE: &str = "image";

/// Form fields as typed by the user, plus the optional image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarPayload {
    pub make: String,
    pub model: String,
    pub year: String,
    pub price: String,
    pub image: Option<ImageUpload>,
}

/// One multipart part, in wire order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PayloadPart<'a> {
    Text { name: &'static str, value: &'a str },
    File { name: &'static str, upload: &'a ImageUpload },
}

impl CarPayload {
    /// Parts in the order they are appended to the form body.
    ///
    /// The image part is omitted entirely when no file was selected.
    #[must_use]
    pub fn parts(&self) -> Vec<PayloadPart<'_>> {
        let mut parts = vec![
            PayloadPart::Text { name: FIELD_MAKE, value: &self.make },
            PayloadPart::Text { name: FIELD_MODEL, value: &self.model },
            PayloadPart::Text { name: FIELD_YEAR, value: &self.year },
            PayloadPart::Text { name: FIELD_PRICE, value: &self.price },
        ];
        if let Some(upload) = &self.image {
            parts.push(PayloadPart::File { name: FIELD_IMAGE, upload });
        }
        parts
    }
}
