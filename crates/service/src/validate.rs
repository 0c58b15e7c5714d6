use thiserror::Error;
use uuid::{Uuid, Variant};

#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid {field}: {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: &'static str,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: &'static str) -> Self {
        Self { field, reason }
    }
}

/// Shape check for one request body, run before any store access.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Hyphenated UUID, version 4, RFC 4122 variant. Case-insensitive.
pub fn is_uuid_v4(candidate: &str) -> bool {
    // parse_str also takes simple, braced and urn forms; only the 36-char hyphenated form is an id.
    if candidate.len() != 36 {
        return false;
    }
    match Uuid::parse_str(candidate) {
        Ok(uuid) => uuid.get_version_num() == 4 && uuid.get_variant() == Variant::RFC4122,
        Err(_) => false,
    }
}

pub(crate) fn non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }
    Ok(())
}

pub(crate) fn finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::new(field, "must be a finite number"));
    }
    Ok(())
}

pub(crate) fn uuid_shaped(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if !is_uuid_v4(value) {
        return Err(ValidationError::new(field, "must be a UUID v4"));
    }
    Ok(())
}
