//! Create/edit form state.
//!
//! DESIGN
//! ======
//! The draft keeps every scalar as text, exactly as typed, and is only
//! checked for "required" and "numeric" at submit time. `editing_id` selects
//! the mode:
//!
//! ```text
//!            begin_edit                begin_edit
//!   Create ─────────────▶ Editing(id) ────────────▶ Editing(id')
//!     ▲                      │
//!     └──── cancel / successful update ──┘
//! ```

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::fmt;
use std::str::FromStr;

use crate::api::payload::{CarPayload, FIELD_MAKE, FIELD_MODEL, FIELD_PRICE, FIELD_YEAR};
use crate::types::{Car, CarId, ImageUpload};

/// A named scalar input on the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CarField {
    Make,
    Model,
    Year,
    Price,
}

impl CarField {
    pub const ALL: [Self; 4] = [Self::Make, Self::Model, Self::Year, Self::Price];

    /// Input `name` attribute and multipart field name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Make => FIELD_MAKE,
            Self::Model => FIELD_MODEL,
            Self::Year => FIELD_YEAR,
            Self::Price => FIELD_PRICE,
        }
    }

    /// Visible label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Make => "Make",
            Self::Model => "Model",
            Self::Year => "Year",
            Self::Price => "Price",
        }
    }

    /// Whether the input is `type="number"`.
    #[must_use]
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Year | Self::Price)
    }
}

impl fmt::Display for CarField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CarField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_owned()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("unknown form field: {0}")]
    UnknownField(String),
    #[error("{0} is required")]
    Missing(CarField),
    #[error("{0} must be a number")]
    NotNumeric(CarField),
}

/// Unsaved form contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CarFormDraft {
    pub make: String,
    pub model: String,
    pub year: String,
    pub price: String,
    pub image: Option<ImageUpload>,
}

impl CarFormDraft {
    /// Draft pre-filled from an existing car. The image is left unset so an
    /// update only replaces it when a new file is chosen.
    #[must_use]
    pub fn from_car(car: &Car) -> Self {
        Self {
            make: car.make.clone(),
            model: car.model.clone(),
            year: car.year.to_string(),
            price: car.price.clone(),
            image: None,
        }
    }

    #[must_use]
    pub fn get(&self, field: CarField) -> &str {
        match field {
            CarField::Make => &self.make,
            CarField::Model => &self.model,
            CarField::Year => &self.year,
            CarField::Price => &self.price,
        }
    }

    pub fn set(&mut self, field: CarField, value: impl Into<String>) {
        let slot = match field {
            CarField::Make => &mut self.make,
            CarField::Model => &mut self.model,
            CarField::Year => &mut self.year,
            CarField::Price => &mut self.price,
        };
        *slot = value.into();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Required + numeric checks, in field order.
    ///
    /// # Errors
    ///
    /// Returns the first field that is blank or not a number.
    pub fn validate(&self) -> Result<(), FormError> {
        for field in CarField::ALL {
            let value = self.get(field).trim();
            if value.is_empty() {
                return Err(FormError::Missing(field));
            }
            let numeric = match field {
                CarField::Year => value.parse::<i64>().is_ok(),
                CarField::Price => value.parse::<f64>().is_ok_and(f64::is_finite),
                CarField::Make | CarField::Model => true,
            };
            if !numeric {
                return Err(FormError::NotNumeric(field));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn to_payload(&self) -> CarPayload {
        CarPayload {
            make: self.make.clone(),
            model: self.model.clone(),
            year: self.year.clone(),
            price: self.price.clone(),
            image: self.image.clone(),
        }
    }
}

/// Whether the form creates a new car or edits an existing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Editing(CarId),
}

impl FormMode {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Create => "Add New Car",
            Self::Editing(_) => "Edit Car",
        }
    }

    #[must_use]
    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Create => "Add Car",
            Self::Editing(_) => "Update Car",
        }
    }
}

/// A validated submission ready to dispatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitRequest {
    Create { payload: CarPayload },
    Update { id: CarId, payload: CarPayload },
}

impl SubmitRequest {
    #[must_use]
    pub fn payload(&self) -> &CarPayload {
        match self {
            Self::Create { payload } | Self::Update { payload, .. } => payload,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CarFormState {
    pub draft: CarFormDraft,
    pub editing_id: Option<CarId>,
}

impl CarFormState {
    #[must_use]
    pub fn mode(&self) -> FormMode {
        self.editing_id.map_or(FormMode::Create, FormMode::Editing)
    }

    /// Merge one field into the draft.
    pub fn set(&mut self, field: CarField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Merge one field by its input name.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is not one of the form's scalar fields.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let field = name.parse::<CarField>()?;
        self.set(field, value);
        Ok(())
    }

    /// Replace the draft image with the first selected file, or clear it.
    pub fn select_image(&mut self, file: Option<ImageUpload>) {
        self.draft.image = file;
    }

    /// Load a car into the draft and switch to edit mode.
    pub fn begin_edit(&mut self, car: &Car) {
        self.draft = CarFormDraft::from_car(car);
        self.editing_id = Some(car.id);
    }

    /// Empty the draft, keeping the current mode.
    pub fn clear_draft(&mut self) {
        self.draft = CarFormDraft::default();
    }

    /// Empty the draft and return to create mode.
    pub fn cancel(&mut self) {
        self.clear_draft();
        self.editing_id = None;
    }

    /// Validate the draft and package it for the current mode.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure; no request is produced.
    pub fn submit_request(&self) -> Result<SubmitRequest, FormError> {
        self.draft.validate()?;
        let payload = self.draft.to_payload();
        Ok(match self.editing_id {
            Some(id) => SubmitRequest::Update { id, payload },
            None => SubmitRequest::Create { payload },
        })
    }
}
