use thiserror::Error;

use crate::model::api::FieldErrorDto;

/// A single rejected input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Name of the field as it appears on the wire.
    pub field: String,
    /// Human-readable reason the value was rejected.
    pub reason: String,
}

/// Every field-level failure collected while validating one input.
///
/// Validation never stops at the first bad field; callers accumulate failures with
/// [`ValidationErrors::check`] and convert to a result once all fields were inspected.
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("Validation failed: {}", summarize(.errors))]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.reason))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a list holding a single failure.
    pub fn single(field: impl Into<String>, reason: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, reason);
        errors
    }

    pub fn add(&mut self, field: impl Into<String>, reason: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            reason: reason.into(),
        });
    }

    /// Records the failure of `result` under `field`, returning the value on success.
    pub fn check<T>(&mut self, field: &str, result: Result<T, String>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(reason) => {
                self.add(field, reason);
                None
            }
        }
    }

    /// Like [`check`](Self::check) for a value that may be absent from the input.
    ///
    /// Returns `Some(None)` when the value was absent, `Some(Some(_))` when it was
    /// present and valid, and `None` when it was present and rejected.
    pub fn check_optional<T>(
        &mut self,
        field: &str,
        result: Option<Result<T, String>>,
    ) -> Option<Option<T>> {
        match result {
            None => Some(None),
            Some(result) => self.check(field, result).map(Some),
        }
    }

    /// Records `field` as missing when `value` is `None`.
    pub fn require<T>(&mut self, field: &str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.add(field, "is required");
        }
        value
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn into_dto(self) -> Vec<FieldErrorDto> {
        self.errors
            .into_iter()
            .map(|e| FieldErrorDto {
                field: e.field,
                reason: e.reason,
            })
            .collect()
    }
}
