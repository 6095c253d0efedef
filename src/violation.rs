//! Internal violation types.
//!
//! This module provides [`Violation`] for a single constraint failure as the
//! validation engine reports it, and [`ViolationList`] for an ordered
//! collection of them.

use std::fmt::{self, Display};

/// A single constraint violation.
///
/// - **message**: Human-readable description of the failure
/// - **property_path**: Bracketed path to the offending value (e.g. `[user][email]`)
/// - **code**: Opaque identifier of the failed constraint, if the engine set one
///
/// # Example
///
/// ```rust
/// use violation_codec::{codes::constraint, Violation};
///
/// let violation = Violation::new("[email]", "This value is not a valid email address.")
///     .with_code(constraint::EMAIL_INVALID_FORMAT);
///
/// assert_eq!(violation.code.as_deref(), Some(constraint::EMAIL_INVALID_FORMAT));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Human-readable error message.
    pub message: String,
    /// Path to the value that failed validation, in bracket notation.
    pub property_path: String,
    /// Internal constraint code.
    pub code: Option<String>,
}

impl Violation {
    /// Creates a violation without a code.
    pub fn new(property_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            property_path: property_path.into(),
            code: None,
        }
    }

    /// Sets the internal code and returns self for chaining.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

impl Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.property_path.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.property_path, self.message)
        }
    }
}

/// An ordered collection of violations.
///
/// Unlike an error type, a `ViolationList` may be empty: an empty list means
/// the input passed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViolationList(Vec<Violation>);

impl ViolationList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a violation.
    pub fn add(&mut self, violation: Violation) {
        self.0.push(violation);
    }

    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the violations in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.0.iter()
    }

    /// Returns the violation at `index`.
    pub fn get(&self, index: usize) -> Option<&Violation> {
        self.0.get(index)
    }

    /// Returns all violations at the specified property path.
    pub fn at_path(&self, property_path: &str) -> Vec<&Violation> {
        self.0
            .iter()
            .filter(|v| v.property_path == property_path)
            .collect()
    }

    /// Returns all violations with the specified internal code.
    pub fn with_code(&self, code: &str) -> Vec<&Violation> {
        self.0
            .iter()
            .filter(|v| v.code.as_deref() == Some(code))
            .collect()
    }

    /// Converts this list into a `Vec<Violation>`.
    pub fn into_vec(self) -> Vec<Violation> {
        self.0
    }
}

impl From<Vec<Violation>> for ViolationList {
    fn from(violations: Vec<Violation>) -> Self {
        Self(violations)
    }
}

impl FromIterator<Violation> for ViolationList {
    fn from_iter<I: IntoIterator<Item = Violation>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Violation> for ViolationList {
    fn extend<I: IntoIterator<Item = Violation>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for ViolationList {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ViolationList {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for ViolationList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for violation in &self.0 {
            writeln!(f, "{}", violation)?;
        }
        Ok(())
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ViolationList>();
    assert_sync::<ViolationList>();
};
