//! Field rules for customer request bodies.

use crate::error::AppError;
use crate::model::{CustomerInput, NAME_MAX_CHARS, SECRET_MAX_CHARS};

pub struct RequestValidator;

impl RequestValidator {
    /// Required names must be non-blank; all text fields are bounded by the column widths.
    pub fn validate(input: &CustomerInput) -> Result<(), AppError> {
        required("firstName", &input.first_name)?;
        required("surname", &input.surname)?;
        max_chars("firstName", &input.first_name, NAME_MAX_CHARS)?;
        max_chars("surname", &input.surname, NAME_MAX_CHARS)?;
        if let Some(secret) = &input.secret {
            max_chars("secret", secret, SECRET_MAX_CHARS)?;
        }
        Ok(())
    }
}

fn required(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

fn max_chars(field: &str, value: &str, max: usize) -> Result<(), AppError> {
    if value.chars().count() > max {
        return Err(AppError::Validation(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }
    Ok(())
}
