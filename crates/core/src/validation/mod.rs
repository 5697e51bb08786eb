//! Form validation.
//!
//! Forms hold raw user input (numbers still as text, the way they come out
//! of a form field or a command-line argument). [`Validate`] checks every
//! field and reports all problems at once in a [`FieldErrors`] map keyed by
//! field name; `into_payload` turns a valid form into the payload the
//! backend expects.

mod forms;
mod rules;

pub use forms::{
    CustomerForm, ExpenseCategoryForm, ExpenseForm, PreOrderForm, ProductForm, SaleForm, UserForm,
};

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Validation messages keyed by field name, in field-name order.
///
/// Only the first problem found for each field is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a problem with `field` unless one is already recorded.
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// `Ok(())` when no problems were recorded.
    ///
    /// # Errors
    ///
    /// Returns `self` if any field has a problem.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

/// A form whose fields can be checked before submission.
pub trait Validate {
    /// Record every problem with the form in `errors`.
    fn check(&self, errors: &mut FieldErrors);

    /// Check the form.
    ///
    /// # Errors
    ///
    /// Returns the field-keyed problems if any field is invalid.
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        self.check(&mut errors);
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_message_per_field_wins() {
        let mut errors = FieldErrors::new();
        errors.insert("price", "price is required");
        errors.insert("price", "price must be a number");
        errors.insert("name", "name is required");
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("price"), Some("price is required"));
    }

    #[test]
    fn test_display_is_ordered_by_field() {
        let mut errors = FieldErrors::new();
        errors.insert("quantity", "must be zero or more");
        errors.insert("category", "is required");
        assert_eq!(
            errors.to_string(),
            "category: is required; quantity: must be zero or more"
        );
    }

    #[test]
    fn test_into_result() {
        assert!(FieldErrors::new().into_result().is_ok());
        let mut errors = FieldErrors::new();
        errors.insert("name", "is required");
        assert!(errors.into_result().is_err());
    }
}
