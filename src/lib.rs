//! # Violation Codec
//!
//! Translates validation violations into a stable, versioned JSON error
//! format and back.
//!
//! ## Overview
//!
//! Validation engines identify failed constraints with opaque internal codes
//! and address fields with bracketed property paths (`[user][email]`). API
//! consumers instead expect a small published vocabulary of error codes
//! (`validation.email`) and dotted field names (`user.email`). This crate
//! performs that translation in both directions.
//!
//! ## Core Types
//!
//! - [`Violation`] / [`ViolationList`]: the internal representation
//! - [`WireError`] / [`WireErrorList`]: the published wire records
//! - [`CodeTable`]: the static internal-to-wire code mapping
//! - [`FieldNameConverter`]: rewrites `[a][b]` paths to `a.b` and back
//! - [`ErrorListCodec`]: serializes and deserializes violation lists
//! - [`Serializer`]: dispatches values to registered codecs by format and type
//!
//! ## Example
//!
//! ```rust
//! use violation_codec::{codes::constraint, Serializer, Violation, ViolationList};
//! use serde_json::json;
//!
//! let serializer = Serializer::with_defaults();
//!
//! let violations = ViolationList::from(vec![
//!     Violation::new("[address][zip]", "This value is too short.")
//!         .with_code(constraint::LENGTH_TOO_SHORT),
//! ]);
//!
//! let payload = serializer.normalize(&violations, Some("json")).unwrap();
//! assert_eq!(payload, json!({
//!     "errors": [{
//!         "message": "This value is too short.",
//!         "code": "validation.length_min",
//!         "field": "address.zip"
//!     }]
//! }));
//! ```

pub mod codec;
pub mod codes;
pub mod path;
pub mod serializer;
pub mod violation;
pub mod wire;

pub use codec::{ErrorListCodec, JSON_FORMAT};
pub use codes::{CodeTable, DEFAULT_CODE};
pub use path::{FieldNameConverter, NameConverter};
pub use serializer::{Denormalizer, Normalizer, Serializer, SerializerError};
pub use violation::{Violation, ViolationList};
pub use wire::{WireError, WireErrorList};
