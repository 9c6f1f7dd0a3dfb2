//! Validation utilities for the Kitchen Inventory platform
//!
//! Form rules live on the input types as `validator` attributes; this module
//! holds the custom rules and the helpers that turn failures into a single
//! user-facing message.

use std::borrow::Cow;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

/// A single field failure, ready to show in a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Weight and quantity fields must be strictly positive
pub fn validate_positive_decimal(value: &Decimal) -> Result<(), ValidationError> {
    if *value > Decimal::ZERO {
        return Ok(());
    }
    let mut error = ValidationError::new("positive");
    error.message = Some(Cow::Borrowed("Jumlah harus lebih dari 0."));
    Err(error)
}

/// Validate a forecast window
pub fn validate_date_range(from: NaiveDate, to: NaiveDate) -> Result<(), &'static str> {
    if from > to {
        return Err("Tanggal tidak valid");
    }
    Ok(())
}

/// Pick the first failing field in name order, so responses are stable
pub fn first_field_error(errors: &ValidationErrors) -> Option<FieldError> {
    let mut fields: Vec<_> = errors.errors().iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    fields.into_iter().find_map(|(field, kind)| match kind {
        ValidationErrorsKind::Field(list) => list.first().map(|error| FieldError {
            field: field.to_string(),
            message: error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{} tidak valid.", field)),
        }),
        ValidationErrorsKind::Struct(inner) => first_field_error(inner),
        ValidationErrorsKind::List(items) => items.values().find_map(|inner| first_field_error(inner)),
    })
}
