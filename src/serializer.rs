//! Format-and-type dispatch over registered normalizers.
//!
//! This module provides the [`Normalizer`] and [`Denormalizer`] capability
//! traits and the [`Serializer`] that walks registered implementations in
//! order, handing each value to the first one whose support check accepts it.

use parking_lot::RwLock;
use serde_json::Value;
use std::any::{type_name, Any, TypeId};
use std::sync::Arc;

use crate::codec::{ErrorListCodec, JSON_FORMAT};
use crate::path::FieldNameConverter;
use crate::violation::ViolationList;

/// Converts typed values into structured data.
pub trait Normalizer: Send + Sync {
    /// Returns true if this normalizer can handle `data` for `format`.
    fn supports_normalization(&self, data: &dyn Any, format: Option<&str>) -> bool;

    /// Converts `data` into structured data.
    ///
    /// Only called after `supports_normalization` accepted the same arguments.
    fn normalize(&self, data: &dyn Any, format: Option<&str>) -> Result<Value, SerializerError>;
}

/// Restores typed values from structured data.
pub trait Denormalizer: Send + Sync {
    /// Returns true if this denormalizer can build `target` from `data`.
    fn supports_denormalization(
        &self,
        data: &Value,
        target: TypeId,
        format: Option<&str>,
    ) -> bool;

    /// Builds a value of the `target` type from `data`.
    fn denormalize(
        &self,
        data: &Value,
        target: TypeId,
        format: Option<&str>,
    ) -> Result<Box<dyn Any>, SerializerError>;
}

impl Normalizer for ErrorListCodec {
    fn supports_normalization(&self, data: &dyn Any, format: Option<&str>) -> bool {
        ErrorListCodec::supports_normalization(self, data, format)
    }

    fn normalize(&self, data: &dyn Any, _format: Option<&str>) -> Result<Value, SerializerError> {
        let violations = data
            .downcast_ref::<ViolationList>()
            .ok_or(SerializerError::UnexpectedInput {
                expected: type_name::<ViolationList>(),
            })?;
        Ok(ErrorListCodec::normalize(self, violations))
    }
}

impl Denormalizer for ErrorListCodec {
    fn supports_denormalization(
        &self,
        data: &Value,
        target: TypeId,
        format: Option<&str>,
    ) -> bool {
        ErrorListCodec::supports_denormalization(self, data, target, format)
    }

    fn denormalize(
        &self,
        data: &Value,
        _target: TypeId,
        _format: Option<&str>,
    ) -> Result<Box<dyn Any>, SerializerError> {
        Ok(Box::new(self.deserialize(data)))
    }
}

/// Type alias for the normalizer chain.
type NormalizerChain = Arc<RwLock<Vec<Arc<dyn Normalizer>>>>;
/// Type alias for the denormalizer chain.
type DenormalizerChain = Arc<RwLock<Vec<Arc<dyn Denormalizer>>>>;

/// A thread-safe chain of normalizers and denormalizers.
///
/// Registration order is priority order: the first implementation whose
/// support check accepts a value handles it, the rest are skipped.
///
/// # Thread Safety
///
/// Chains are kept behind `Arc<RwLock<...>>`:
/// - Concurrent normalize/denormalize calls only take read locks
/// - Registration operations are serialized (write access)
///
/// # Example
///
/// ```rust
/// use violation_codec::{Serializer, Violation, ViolationList};
/// use serde_json::json;
///
/// let serializer = Serializer::with_defaults();
///
/// let violations = ViolationList::from(vec![Violation::new("[name]", "Required.")]);
/// let payload = serializer.normalize(&violations, Some("json")).unwrap();
/// assert_eq!(payload["errors"][0]["field"], json!("name"));
///
/// let restored: ViolationList = serializer.denormalize(&payload, Some("json")).unwrap();
/// assert_eq!(restored.len(), 1);
/// ```
pub struct Serializer {
    normalizers: NormalizerChain,
    denormalizers: DenormalizerChain,
}

impl Serializer {
    /// Creates a serializer with no registered implementations.
    pub fn new() -> Self {
        Self {
            normalizers: Arc::new(RwLock::new(Vec::new())),
            denormalizers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Creates a serializer with an [`ErrorListCodec`] registered in both
    /// directions, converting property paths with [`FieldNameConverter`].
    pub fn with_defaults() -> Self {
        let serializer = Self::new();
        serializer.register_codec(ErrorListCodec::new().with_name_converter(FieldNameConverter));
        serializer
    }

    /// Appends a normalizer to the chain.
    pub fn register_normalizer<N>(&self, normalizer: N)
    where
        N: Normalizer + 'static,
    {
        self.normalizers.write().push(Arc::new(normalizer));
    }

    /// Appends a denormalizer to the chain.
    pub fn register_denormalizer<D>(&self, denormalizer: D)
    where
        D: Denormalizer + 'static,
    {
        self.denormalizers.write().push(Arc::new(denormalizer));
    }

    /// Registers one implementation in both chains.
    pub fn register_codec<C>(&self, codec: C)
    where
        C: Normalizer + Denormalizer + 'static,
    {
        let codec = Arc::new(codec);
        self.normalizers.write().push(codec.clone());
        self.denormalizers.write().push(codec);
    }

    /// Normalizes `data` with the first normalizer that supports it.
    ///
    /// # Errors
    ///
    /// Returns `SerializerError::NoNormalizer` if no registered normalizer
    /// accepts the value and format.
    pub fn normalize<T>(&self, data: &T, format: Option<&str>) -> Result<Value, SerializerError>
    where
        T: Any,
    {
        let normalizers = self.normalizers.read();

        let normalizer = normalizers
            .iter()
            .find(|n| n.supports_normalization(data, format))
            .ok_or_else(|| SerializerError::NoNormalizer {
                type_name: type_name::<T>(),
                format: format.map(str::to_string),
            })?;

        tracing::trace!(type_name = type_name::<T>(), ?format, "normalizing");
        normalizer.normalize(data, format)
    }

    /// Denormalizes `data` into `T` with the first denormalizer that supports it.
    ///
    /// # Errors
    ///
    /// Returns `SerializerError::NoDenormalizer` if no registered denormalizer
    /// accepts the value, and `SerializerError::UnexpectedOutput` if the chosen
    /// one produced a value of another type.
    pub fn denormalize<T>(&self, data: &Value, format: Option<&str>) -> Result<T, SerializerError>
    where
        T: Any,
    {
        let target = TypeId::of::<T>();
        let denormalizers = self.denormalizers.read();

        let denormalizer = denormalizers
            .iter()
            .find(|d| d.supports_denormalization(data, target, format))
            .ok_or(SerializerError::NoDenormalizer {
                target: type_name::<T>(),
            })?;

        tracing::trace!(type_name = type_name::<T>(), ?format, "denormalizing");
        denormalizer
            .denormalize(data, target, format)?
            .downcast::<T>()
            .map(|value| *value)
            .map_err(|_| SerializerError::UnexpectedOutput {
                expected: type_name::<T>(),
            })
    }

    /// Serializes `data` to JSON text.
    ///
    /// # Errors
    ///
    /// Fails like [`Serializer::normalize`] for the `json` format, or if the
    /// normalized value cannot be encoded.
    pub fn to_json<T: Any>(&self, data: &T) -> Result<String, SerializerError> {
        let value = self.normalize(data, Some(JSON_FORMAT))?;
        Ok(serde_json::to_string(&value)?)
    }

    /// Parses JSON text and denormalizes it into `T`.
    ///
    /// # Errors
    ///
    /// Returns `SerializerError::Json` for malformed text, otherwise fails like
    /// [`Serializer::denormalize`].
    pub fn from_json<T: Any>(&self, text: &str) -> Result<T, SerializerError> {
        let value: Value = serde_json::from_str(text)?;
        self.denormalize(&value, Some(JSON_FORMAT))
    }
}

impl Default for Serializer {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Serializer {
    fn clone(&self) -> Self {
        Self {
            normalizers: Arc::clone(&self.normalizers),
            denormalizers: Arc::clone(&self.denormalizers),
        }
    }
}

/// Errors that can occur while dispatching to normalizers.
#[derive(Debug, thiserror::Error)]
pub enum SerializerError {
    /// No registered normalizer accepted the value.
    #[error("no normalizer supports {type_name} for format {format:?}")]
    NoNormalizer {
        type_name: &'static str,
        format: Option<String>,
    },

    /// No registered denormalizer can produce the requested type.
    #[error("no denormalizer supports {target}")]
    NoDenormalizer { target: &'static str },

    /// A normalizer was handed a value of the wrong type.
    #[error("expected input of type {expected}")]
    UnexpectedInput { expected: &'static str },

    /// A denormalizer produced a value of the wrong type.
    #[error("denormalizer did not produce {expected}")]
    UnexpectedOutput { expected: &'static str },

    /// JSON text could not be encoded or decoded.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
