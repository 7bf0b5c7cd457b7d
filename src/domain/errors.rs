//! Service error types
//!
//! Validation and policy failures are expected outcomes and carry
//! field-level messages for the caller to display. Not-found, database
//! and asset I/O failures are faults.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// A validation failure tied to a specific input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Ordered collection of field-keyed validation messages.
///
/// Serializes as a JSON object (`{"field": "message"}`) so the admin UI
/// can attach messages to form inputs. Order of insertion is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: &'static str, message: impl Into<String>) -> Self {
        Self(vec![FieldError::new(field, message)])
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError::new(field, message));
    }

    pub fn push_error(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// First message recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// `Ok(())` when empty, otherwise `Err(ServiceError::Invalid)`.
    pub fn into_result(self) -> Result<(), ServiceError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ServiceError::Invalid(self))
        }
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for e in &self.0 {
            map.serialize_entry(e.field, &e.message)?;
        }
        map.end()
    }
}

impl From<FieldError> for FieldErrors {
    fn from(e: FieldError) -> Self {
        Self(vec![e])
    }
}

/// Error type for service operations
#[derive(Debug)]
pub enum ServiceError {
    /// Field-keyed validation failure; expected outcome, never a fault
    Invalid(FieldErrors),
    /// Entity lookup by id found nothing; carries the entity kind
    NotFound(&'static str),
    /// Lifecycle policy violation (e.g. hard delete of an active entity)
    Policy(String),
    /// Database/persistence error
    Database(String),
    /// I/O failure while writing an uploaded asset
    Asset(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Invalid(errors) => {
                write!(f, "Validation failed ({} error(s))", errors.len())
            }
            ServiceError::NotFound(kind) => write!(f, "{} not found", kind),
            ServiceError::Policy(msg) => write!(f, "Policy violation: {}", msg),
            ServiceError::Database(msg) => write!(f, "Database error: {}", msg),
            ServiceError::Asset(msg) => write!(f, "Asset storage error: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self {
        ServiceError::Database(e.to_string())
    }
}

impl From<std::io::Error> for ServiceError {
    fn from(e: std::io::Error) -> Self {
        ServiceError::Asset(e.to_string())
    }
}

impl From<FieldErrors> for ServiceError {
    fn from(errors: FieldErrors) -> Self {
        ServiceError::Invalid(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_errors_serialize_as_object() {
        let mut errors = FieldErrors::new();
        errors.push("title1", "Title 1 is required");
        errors.push("image_file", "Please provide a file");

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["title1"], "Title 1 is required");
        assert_eq!(json["image_file"], "Please provide a file");
    }

    #[test]
    fn empty_errors_convert_to_ok() {
        assert!(FieldErrors::new().into_result().is_ok());
    }

    #[test]
    fn non_empty_errors_convert_to_invalid() {
        let errors = FieldErrors::single("title1", "Title 1 is required");
        match errors.into_result() {
            Err(ServiceError::Invalid(e)) => {
                assert_eq!(e.get("title1"), Some("Title 1 is required"))
            }
            other => panic!("expected Invalid, got {:?}", other),
        }
    }
}
