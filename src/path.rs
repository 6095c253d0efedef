//! Property path conversion between internal and wire notations.
//!
//! Validation engines address fields with bracketed segments (`[user][email]`)
//! while the wire format uses dot-separated names (`user.email`). The
//! [`NameConverter`] trait abstracts this rewrite and [`FieldNameConverter`]
//! implements it.

/// Rewrites property names between an internal and an external notation.
///
/// `normalize` produces the external (wire) form, `denormalize` restores the
/// internal form. Implementations must be pure string transformations.
pub trait NameConverter: Send + Sync {
    /// Converts an internal property path to its wire representation.
    fn normalize(&self, property_path: &str) -> String;

    /// Converts a wire field name back to an internal property path.
    fn denormalize(&self, field: &str) -> String;
}

/// Converts between bracketed property paths and dotted field names.
///
/// Segments containing `.`, `[` or `]` are not escaped, so the two directions
/// are only inverse of each other for plain segment names.
///
/// # Example
///
/// ```rust
/// use violation_codec::{FieldNameConverter, NameConverter};
///
/// let converter = FieldNameConverter;
///
/// assert_eq!(converter.normalize("[user][email]"), "user.email");
/// assert_eq!(converter.denormalize("user.email"), "[user][email]");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldNameConverter;

impl NameConverter for FieldNameConverter {
    fn normalize(&self, property_path: &str) -> String {
        property_path
            .replace("][", ".")
            .trim_matches(|c| c == '[' || c == ']')
            .to_string()
    }

    fn denormalize(&self, field: &str) -> String {
        format!("[{}]", field.split('.').collect::<Vec<_>>().join("]["))
    }
}

impl<C: NameConverter + ?Sized> NameConverter for Box<C> {
    fn normalize(&self, property_path: &str) -> String {
        (**self).normalize(property_path)
    }

    fn denormalize(&self, field: &str) -> String {
        (**self).denormalize(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_nested_path() {
        assert_eq!(FieldNameConverter.normalize("[d][e]"), "d.e");
    }

    #[test]
    fn test_normalize_single_segment() {
        assert_eq!(FieldNameConverter.normalize("[a]"), "a");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(FieldNameConverter.normalize(""), "");
    }

    #[test]
    fn test_normalize_trims_all_boundary_brackets() {
        assert_eq!(FieldNameConverter.normalize("[[a]]"), "a");
        assert_eq!(FieldNameConverter.normalize("]a["), "a");
    }

    #[test]
    fn test_normalize_plain_name_untouched() {
        assert_eq!(FieldNameConverter.normalize("email"), "email");
    }

    #[test]
    fn test_denormalize_nested_path() {
        assert_eq!(FieldNameConverter.denormalize("b.c"), "[b][c]");
    }

    #[test]
    fn test_denormalize_single_segment() {
        assert_eq!(FieldNameConverter.denormalize("a"), "[a]");
    }

    #[test]
    fn test_denormalize_empty() {
        assert_eq!(FieldNameConverter.denormalize(""), "[]");
    }

    #[test]
    fn test_round_trip() {
        let converter = FieldNameConverter;
        for path in ["[d][e]", "[a]", "[users][0][email]"] {
            assert_eq!(converter.denormalize(&converter.normalize(path)), path);
        }
    }

    #[test]
    fn test_boxed_converter() {
        let converter: Box<dyn NameConverter> = Box::new(FieldNameConverter);
        assert_eq!(converter.normalize("[x][y]"), "x.y");
        assert_eq!(converter.denormalize("x.y"), "[x][y]");
    }
}
