//! Translation between violation lists and the wire error format.
//!
//! [`ErrorListCodec`] serializes a [`ViolationList`] into a [`WireErrorList`]
//! and parses wire payloads back into violations, normalizing codes through
//! the global [`CodeTable`] in both directions.

use std::any::{Any, TypeId};
use std::sync::Arc;

use serde_json::Value;

use crate::codes::{CodeTable, DEFAULT_CODE};
use crate::path::NameConverter;
use crate::violation::{Violation, ViolationList};
use crate::wire::{WireError, WireErrorList};

/// Format tag the codec serializes to.
pub const JSON_FORMAT: &str = "json";

/// Bidirectional codec between violations and wire errors.
///
/// Without a name converter, property paths are copied to and from the wire
/// untouched.
///
/// # Example
///
/// ```rust
/// use violation_codec::{codes::constraint, ErrorListCodec, FieldNameConverter, Violation, ViolationList};
/// use serde_json::json;
///
/// let codec = ErrorListCodec::new().with_name_converter(FieldNameConverter);
///
/// let violations = ViolationList::from(vec![
///     Violation::new("[user][email]", "Not an email.").with_code(constraint::EMAIL_INVALID_FORMAT),
/// ]);
///
/// assert_eq!(
///     codec.normalize(&violations),
///     json!({"errors": [{"message": "Not an email.", "code": "validation.email", "field": "user.email"}]})
/// );
///
/// let restored = codec.deserialize(&codec.normalize(&violations));
/// assert_eq!(restored, violations);
/// ```
#[derive(Clone, Default)]
pub struct ErrorListCodec {
    name_converter: Option<Arc<dyn NameConverter>>,
}

impl ErrorListCodec {
    /// Creates a codec that leaves property paths untouched.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the converter used to rewrite property paths.
    pub fn with_name_converter<C>(mut self, converter: C) -> Self
    where
        C: NameConverter + 'static,
    {
        self.name_converter = Some(Arc::new(converter));
        self
    }

    /// Returns true if a name converter is configured.
    pub fn has_name_converter(&self) -> bool {
        self.name_converter.is_some()
    }

    /// Converts violations into wire errors, preserving their order.
    pub fn serialize(&self, violations: &ViolationList) -> WireErrorList {
        let table = CodeTable::global();

        violations
            .iter()
            .map(|violation| {
                let code = match violation.code.as_deref().and_then(|c| table.get(c)) {
                    Some(code) => code,
                    None => {
                        tracing::debug!(
                            code = ?violation.code,
                            path = %violation.property_path,
                            "no wire code mapped, using default"
                        );
                        DEFAULT_CODE
                    }
                };

                WireError::new(
                    violation.message.clone(),
                    code,
                    self.field_name(&violation.property_path),
                )
            })
            .collect()
    }

    /// Converts violations into the wire payload as a JSON value.
    ///
    /// Entry keys keep the published order `message`, `code`, `field`.
    pub fn normalize(&self, violations: &ViolationList) -> Value {
        let errors = self
            .serialize(violations)
            .errors
            .into_iter()
            .map(|e| {
                serde_json::json!({
                    "message": e.message,
                    "code": e.code,
                    "field": e.field,
                })
            })
            .collect::<Vec<_>>();

        serde_json::json!({ "errors": errors })
    }

    /// Parses a wire payload into violations.
    ///
    /// Entries without a message or field are dropped; the remaining entries
    /// keep their relative order. Codes not present in the table resolve to no
    /// code at all.
    pub fn deserialize(&self, data: &Value) -> ViolationList {
        let mut violations = ViolationList::new();

        let entries = match data.get("errors") {
            Some(Value::Array(entries)) if !entries.is_empty() => entries,
            _ => return violations,
        };

        let table = CodeTable::global();

        for (index, entry) in entries.iter().enumerate() {
            let (message, field) = match (entry.get("message"), entry.get("field")) {
                (Some(message), Some(field)) if !is_blank(message) && !is_blank(field) => {
                    (message, field)
                }
                _ => {
                    tracing::debug!(index, "dropping wire error without message or field");
                    continue;
                }
            };

            let code = entry
                .get("code")
                .and_then(Value::as_str)
                .filter(|code| !code.is_empty())
                .and_then(|code| table.internal_code(code));

            violations.add(Violation {
                message: coerce_string(message),
                property_path: self.property_path(&coerce_string(field)),
                code: code.map(str::to_string),
            });
        }

        violations
    }

    /// Returns true if `data` is a violation list and `format` is JSON.
    pub fn supports_normalization(&self, data: &dyn Any, format: Option<&str>) -> bool {
        data.is::<ViolationList>() && format == Some(JSON_FORMAT)
    }

    /// Returns true if `data` is an object with an `errors` key and `target`
    /// is the violation list type.
    pub fn supports_denormalization(
        &self,
        data: &Value,
        target: TypeId,
        _format: Option<&str>,
    ) -> bool {
        data.as_object()
            .is_some_and(|object| object.contains_key("errors"))
            && target == TypeId::of::<ViolationList>()
    }

    /// Whether the support checks depend only on argument types and format,
    /// so callers may cache their results.
    pub fn has_cacheable_supports_method(&self) -> bool {
        true
    }

    fn field_name(&self, property_path: &str) -> String {
        match &self.name_converter {
            Some(converter) => converter.normalize(property_path),
            None => property_path.to_string(),
        }
    }

    fn property_path(&self, field: &str) -> String {
        match &self.name_converter {
            Some(converter) => converter.denormalize(field),
            None => field.to_string(),
        }
    }
}

/// Loose emptiness check applied to incoming wire values.
///
/// `null`, `false`, zero, `""`, `"0"` and empty containers count as blank.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

fn coerce_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(true) => "1".to_string(),
        Value::Bool(false) | Value::Null => String::new(),
        other => other.to_string(),
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ErrorListCodec>();
    assert_sync::<ErrorListCodec>();
};
