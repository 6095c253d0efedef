//! Error code vocabulary and the internal-to-wire code table.
//!
//! Internal codes are the constraint identifiers emitted by the validation
//! engine (see [`constraint`]). Wire codes are the published, versioned
//! vocabulary consumers match on (see [`wire`]). [`CodeTable`] maps the former
//! onto the latter; several internal codes may share one wire code.

use std::collections::HashMap;

use indexmap::IndexMap;
use once_cell::sync::Lazy;

/// Internal constraint identifiers produced by the validation engine.
pub mod constraint {
    pub const GREATER_THAN_OR_EQUAL_TOO_LOW: &str = "ea4e51d1-3342-48bd-87f1-9e672cd90cad";
    pub const LESS_THAN_OR_EQUAL_TOO_HIGH: &str = "30fbb013-d015-4232-8b3b-8f3be97a7e14";
    pub const IS_FALSE_NOT_FALSE: &str = "d53a91b0-def3-426a-83d7-269da7ab4200";
    pub const IS_TRUE_NOT_TRUE: &str = "2beabf1c-54c0-4882-a928-05249b26e23b";
    pub const DATE_INVALID_DATE: &str = "3c184ce5-b31d-4de7-8b76-326da7b2be93";
    pub const DATE_INVALID_FORMAT: &str = "69819696-02ac-4a99-9ff0-14e127c4d1bc";
    pub const EMAIL_INVALID_FORMAT: &str = "bd79c0ab-ddba-46cc-a703-a7a4b08de310";
    pub const IP_INVALID_IP: &str = "b1b427ae-9f6f-41b0-aa9b-84511fbb3c5b";
    pub const LESS_THAN_TOO_HIGH: &str = "079d7420-2d13-460c-8756-de810eeb37d2";
    pub const FILE_TOO_LARGE: &str = "df8637af-d466-48c6-a59d-e7126250a654";
    pub const LENGTH_TOO_LONG: &str = "d94b19cc-114f-4f44-9cc4-4138e80a87b9";
    pub const GREATER_THAN_TOO_LOW: &str = "778b7ae0-84d3-481a-9dec-35fdb64b1d78";
    pub const FILE_EMPTY: &str = "5d743385-9775-4aa5-8ff5-495fb1e60137";
    pub const LENGTH_TOO_SHORT: &str = "9ff3fdc4-b214-49db-8718-39c315e33d45";
    pub const COLLECTION_MISSING_FIELD: &str = "2fa2158c-2a7f-484b-98aa-975522539ff8";
    pub const UNIQUE_IS_NOT_UNIQUE: &str = "7911c98d-b845-4da0-94b7-a8dac36bc55a";
    pub const URL_INVALID_URL: &str = "57c2f299-1154-4870-89bb-ef3b1f5ad229";
    pub const TIMEZONE_IDENTIFIER: &str = "5ce113e6-5e64-4ea2-90fe-d2233956db13";
    pub const TIMEZONE_IDENTIFIER_IN_COUNTRY: &str = "c4a22222-dc92-4fc0-abb0-d95b268c7d0b";
    pub const TIMEZONE_IDENTIFIER_IN_ZONE: &str = "b57767b1-36c0-40ac-a3d7-629420c775b8";
    pub const TIMEZONE_IDENTIFIER_INTL: &str = "45863c26-88dc-41ba-bf53-c73bd1f7e90d";
}

/// Published wire error codes.
pub mod wire {
    pub const ACTIVE_URL: &str = "validation.active_url";
    pub const AFTER: &str = "validation.after";
    pub const ALPHA: &str = "validation.alpha";
    pub const ALPHA_DASH: &str = "validation.alpha_dash";
    pub const ALPHA_NUM: &str = "validation.alpha_num";
    pub const BEFORE: &str = "validation.before";
    pub const NUMERIC_BETWEEN: &str = "validation.numeric_between";
    pub const LENGTH_BETWEEN: &str = "validation.length_between";
    pub const BOOLEAN: &str = "validation.boolean";
    pub const DATE: &str = "validation.date";
    pub const EMAIL: &str = "validation.email";
    pub const INVALID: &str = "validation.invalid";
    pub const IMAGE: &str = "validation.image";
    pub const INTEGER: &str = "validation.integer";
    pub const IP: &str = "validation.ip";
    pub const NUMERIC_MAX: &str = "validation.numeric_max";
    pub const FILESIZE_MAX: &str = "validation.filesize_max";
    pub const LENGTH_MAX: &str = "validation.length_max";
    pub const NUMERIC_MIN: &str = "validation.numeric_min";
    pub const FILESIZE_MIN: &str = "validation.filesize_min";
    pub const LENGTH_MIN: &str = "validation.length_min";
    pub const NUMERIC: &str = "validation.numeric";
    pub const REQUIRED: &str = "validation.required";
    pub const EXISTS: &str = "validation.exists";
    pub const URL: &str = "validation.url";
    pub const TIMEZONE: &str = "validation.timezone";
}

/// Wire code used for any internal code the table does not map.
pub const DEFAULT_CODE: &str = wire::INVALID;

/// Internal-to-wire mappings in declaration order.
///
/// Reverse lookups resolve to the first entry carrying a given wire code, so
/// the order of this slice is part of the wire contract.
pub const CODE_MAPPINGS: &[(&str, &str)] = &[
    (constraint::GREATER_THAN_OR_EQUAL_TOO_LOW, wire::NUMERIC_BETWEEN),
    (constraint::LESS_THAN_OR_EQUAL_TOO_HIGH, wire::NUMERIC_BETWEEN),
    (constraint::IS_FALSE_NOT_FALSE, wire::BOOLEAN),
    (constraint::IS_TRUE_NOT_TRUE, wire::BOOLEAN),
    (constraint::DATE_INVALID_DATE, wire::DATE),
    (constraint::DATE_INVALID_FORMAT, wire::DATE),
    (constraint::EMAIL_INVALID_FORMAT, wire::EMAIL),
    (constraint::IP_INVALID_IP, wire::IP),
    (constraint::LESS_THAN_TOO_HIGH, wire::NUMERIC_MAX),
    (constraint::FILE_TOO_LARGE, wire::FILESIZE_MAX),
    (constraint::LENGTH_TOO_LONG, wire::LENGTH_MAX),
    (constraint::GREATER_THAN_TOO_LOW, wire::NUMERIC_MIN),
    (constraint::FILE_EMPTY, wire::FILESIZE_MIN),
    (constraint::LENGTH_TOO_SHORT, wire::LENGTH_MIN),
    (constraint::COLLECTION_MISSING_FIELD, wire::REQUIRED),
    (constraint::UNIQUE_IS_NOT_UNIQUE, wire::EXISTS),
    (constraint::URL_INVALID_URL, wire::URL),
    (constraint::TIMEZONE_IDENTIFIER, wire::TIMEZONE),
    (constraint::TIMEZONE_IDENTIFIER_IN_COUNTRY, wire::TIMEZONE),
    (constraint::TIMEZONE_IDENTIFIER_IN_ZONE, wire::TIMEZONE),
    (constraint::TIMEZONE_IDENTIFIER_INTL, wire::TIMEZONE),
];

/// Every published wire code with its explanation.
pub const CATALOGUE: &[(&str, &str)] = &[
    (wire::ACTIVE_URL, "The url must have a DNS record"),
    (wire::AFTER, "The date provided must be after a specific date"),
    (wire::ALPHA, "The value can only contain letters"),
    (wire::ALPHA_DASH, "The value can only contain letters, numbers, and dashes"),
    (wire::ALPHA_NUM, "The value can only contain letters and numbers"),
    (wire::BEFORE, "The date provided must be before a specific date"),
    (wire::NUMERIC_BETWEEN, "The number must be in a specific range"),
    (wire::LENGTH_BETWEEN, "The value length must be in a specific range"),
    (wire::BOOLEAN, "The value must be either true or false"),
    (wire::DATE, "The value must be a valid date"),
    (wire::EMAIL, "The value must be a valid email"),
    (wire::INVALID, "The value is invalid"),
    (wire::IMAGE, "The file must be a image"),
    (wire::INTEGER, "The value must be a integer"),
    (wire::IP, "The value must be a valid IP"),
    (wire::NUMERIC_MAX, "The number must be under a specific value"),
    (wire::FILESIZE_MAX, "The filesize must be under a specific value"),
    (wire::LENGTH_MAX, "The value length must be under a specific value"),
    (wire::NUMERIC_MIN, "The number must be over a specific value"),
    (wire::FILESIZE_MIN, "The filesize must be over a specific value"),
    (wire::LENGTH_MIN, "The value length must be over a specific value"),
    (wire::NUMERIC, "The value must be numeric"),
    (wire::REQUIRED, "The field is required"),
    (wire::EXISTS, "The value is already taken"),
    (wire::URL, "The value must be a valid URL"),
    (wire::TIMEZONE, "The value must be a valid timezone"),
];

static TABLE: Lazy<CodeTable> = Lazy::new(|| CodeTable::from_mappings(CODE_MAPPINGS));

/// Bidirectional lookup over an ordered internal-to-wire mapping.
///
/// The forward index keeps declaration order. The reverse index is built in a
/// single forward pass keeping only the first internal code seen for each wire
/// code.
///
/// # Example
///
/// ```rust
/// use violation_codec::codes::{constraint, wire, CodeTable};
///
/// let table = CodeTable::global();
///
/// assert_eq!(table.wire_code(constraint::LESS_THAN_OR_EQUAL_TOO_HIGH), wire::NUMERIC_BETWEEN);
/// assert_eq!(table.wire_code("not-a-constraint"), wire::INVALID);
///
/// // Shared wire codes resolve to the first declared constraint.
/// assert_eq!(
///     table.internal_code(wire::NUMERIC_BETWEEN),
///     Some(constraint::GREATER_THAN_OR_EQUAL_TOO_LOW)
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeTable {
    forward: IndexMap<&'static str, &'static str>,
    reverse: HashMap<&'static str, &'static str>,
}

impl CodeTable {
    /// Returns the process-wide table built from [`CODE_MAPPINGS`].
    pub fn global() -> &'static CodeTable {
        &TABLE
    }

    /// Builds a table from `(internal, wire)` pairs.
    ///
    /// A repeated internal code keeps its first mapping.
    pub fn from_mappings(mappings: &[(&'static str, &'static str)]) -> Self {
        let mut forward = IndexMap::with_capacity(mappings.len());
        let mut reverse = HashMap::new();

        for &(internal, wire) in mappings {
            forward.entry(internal).or_insert(wire);
            reverse.entry(wire).or_insert(internal);
        }

        Self { forward, reverse }
    }

    /// Returns the wire code mapped from `internal`, if any.
    pub fn get(&self, internal: &str) -> Option<&'static str> {
        self.forward.get(internal).copied()
    }

    /// Returns the wire code for `internal`, falling back to [`DEFAULT_CODE`].
    pub fn wire_code(&self, internal: &str) -> &'static str {
        self.get(internal).unwrap_or(DEFAULT_CODE)
    }

    /// Returns the first declared internal code mapping to `wire`.
    pub fn internal_code(&self, wire: &str) -> Option<&'static str> {
        self.reverse.get(wire).copied()
    }

    /// Returns true if some internal code maps to `wire`.
    pub fn contains_wire_code(&self, wire: &str) -> bool {
        self.reverse.contains_key(wire)
    }

    /// Returns the mappings in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.forward.iter().map(|(k, v)| (*k, *v))
    }

    /// Returns the number of internal codes in the table.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Returns true if the table has no mappings.
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

/// Returns the published explanation for a wire code.
pub fn explain(code: &str) -> Option<&'static str> {
    CATALOGUE
        .iter()
        .find(|(wire, _)| *wire == code)
        .map(|(_, explanation)| *explanation)
}

/// Returns true if `code` is part of the published vocabulary.
///
/// Consumers should still accept codes outside it.
pub fn is_published(code: &str) -> bool {
    explain(code).is_some()
}
