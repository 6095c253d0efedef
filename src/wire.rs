//! Wire format records.
//!
//! The published payload shape is:
//!
//! ```json
//! { "errors": [ { "message": "...", "code": "validation.email", "field": "user.email" } ] }
//! ```

use serde::{Deserialize, Serialize};

/// A single error as published on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireError {
    /// Human-readable message, copied verbatim from the violation.
    pub message: String,
    /// Published error code.
    pub code: String,
    /// Field name in dotted notation.
    pub field: String,
}

impl WireError {
    /// Creates a wire error.
    pub fn new(
        message: impl Into<String>,
        code: impl Into<String>,
        field: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
            field: field.into(),
        }
    }
}

/// An ordered list of wire errors. An empty list means no violations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireErrorList {
    pub errors: Vec<WireError>,
}

impl WireErrorList {
    /// Returns the number of errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if there are no errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors reported for `field`.
    pub fn for_field(&self, field: &str) -> Vec<&WireError> {
        self.errors.iter().filter(|e| e.field == field).collect()
    }
}

impl FromIterator<WireError> for WireErrorList {
    fn from_iter<I: IntoIterator<Item = WireError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}
