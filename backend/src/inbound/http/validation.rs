//! Shared validation helpers for inbound HTTP adapters.

use serde_json::json;

use crate::domain::{Error, RecipeValidationError, RecordId, UserValidationError};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidId,
    EmptyValue,
    EmptyEntry,
    InvalidEmail,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidId => "invalid_id",
            ErrorCode::EmptyValue => "empty_value",
            ErrorCode::EmptyEntry => "empty_entry",
            ErrorCode::InvalidEmail => "invalid_email",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_value(self, code: ErrorCode, value: impl Into<String>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value.into(),
            "code": code.as_str(),
        }))
    }

    fn with_index(self, code: ErrorCode, index: usize) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "index": index,
            "code": code.as_str(),
        }))
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("missing required field: {field}"))
        .with_code(ErrorCode::MissingField)
}

pub(crate) fn invalid_id_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} must be a positive integer"))
        .with_value(ErrorCode::InvalidId, value)
}

/// Parse a path segment into a [`RecordId`].
pub(crate) fn parse_record_id(value: &str, field: FieldName) -> Result<RecordId, Error> {
    value
        .parse::<RecordId>()
        .map_err(|_| invalid_id_error(field, value))
}

pub(crate) fn recipe_validation_error(err: RecipeValidationError) -> Error {
    let message = err.to_string();
    match err {
        RecipeValidationError::EmptyName => {
            ValidationError::new("name", message).with_code(ErrorCode::EmptyValue)
        }
        RecipeValidationError::EmptyIngredient { index } => {
            ValidationError::new("ingredients", message).with_index(ErrorCode::EmptyEntry, index)
        }
        RecipeValidationError::EmptyStep { index } => {
            ValidationError::new("steps", message).with_index(ErrorCode::EmptyEntry, index)
        }
        RecipeValidationError::EmptyTag { index } => {
            ValidationError::new("tag", message).with_index(ErrorCode::EmptyEntry, index)
        }
    }
}

pub(crate) fn user_validation_error(err: UserValidationError) -> Error {
    let message = err.to_string();
    let (field, code) = match err {
        UserValidationError::EmptyName => ("name", ErrorCode::EmptyValue),
        UserValidationError::EmptyEmail => ("email", ErrorCode::EmptyValue),
        UserValidationError::InvalidEmail => ("email", ErrorCode::InvalidEmail),
        UserValidationError::EmptyPassword => ("password", ErrorCode::EmptyValue),
    };
    ValidationError::new(field, message).with_code(code)
}
