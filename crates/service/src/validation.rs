//! Explicit request validation.
//!
//! Every update request implements [`Validate`]; handlers call it before
//! reaching a service and turn a failed [`ValidationResult`] into a 400.

use serde::Serialize;

use crate::errors::ServiceError;

pub const NAME_MAX: usize = 60;
pub const CODE_MAX: usize = 5;
pub const ADDRESS_MAX: usize = 300;
pub const DESCRIPTION_MAX: usize = 300;
pub const MANUFACTURER_CODE_MAX: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self { field, message: message.into() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub errors: Vec<FieldError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool { self.errors.is_empty() }

    pub fn required(&mut self, field: &'static str, value: &str, max: usize) -> &mut Self {
        if value.trim().is_empty() {
            self.errors.push(FieldError::new(field, "must not be empty"));
        } else {
            self.max_len(field, value, max);
        }
        self
    }

    pub fn optional(&mut self, field: &'static str, value: Option<&str>, max: usize) -> &mut Self {
        if let Some(value) = value {
            self.max_len(field, value, max);
        }
        self
    }

    pub fn positive(&mut self, field: &'static str, value: i32) -> &mut Self {
        if value <= 0 {
            self.errors.push(FieldError::new(field, "must be greater than 0"));
        }
        self
    }

    pub fn check(&mut self, field: &'static str, ok: bool, message: &str) -> &mut Self {
        if !ok {
            self.errors.push(FieldError::new(field, message));
        }
        self
    }

    pub fn into_result(self) -> Result<(), ServiceError> {
        if self.is_valid() { Ok(()) } else { Err(ServiceError::Validation(self.errors)) }
    }

    fn max_len(&mut self, field: &'static str, value: &str, max: usize) {
        if value.chars().count() > max {
            self.errors.push(FieldError::new(field, format!("must be at most {} characters", max)));
        }
    }
}

pub trait Validate {
    fn validate(&self) -> ValidationResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_blank_and_overlong_values() {
        let mut result = ValidationResult::default();
        result.required("name", "   ", NAME_MAX).required("code", "ABCDEF", CODE_MAX);
        assert_eq!(
            result.errors,
            vec![
                FieldError::new("name", "must not be empty"),
                FieldError::new("code", "must be at most 5 characters"),
            ]
        );
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let mut result = ValidationResult::default();
        result.required("code", "ÄÖÜßé", CODE_MAX);
        assert!(result.is_valid());
    }

    #[test]
    fn optional_accepts_absent_values() {
        let mut result = ValidationResult::default();
        result.optional("description", None, DESCRIPTION_MAX).positive("hiveId", 1);
        assert!(result.into_result().is_ok());
    }

    #[test]
    fn positive_rejects_zero() {
        let mut result = ValidationResult::default();
        result.positive("categoryId", 0);
        assert!(matches!(result.into_result(), Err(ServiceError::Validation(e)) if e[0].field == "categoryId"));
    }
}
