use std::collections::BTreeMap;
use std::fmt::Display;

use thiserror::Error;

/// Per-field validation failures collected while turning a request into a draft.
///
/// Only the first reason reported for a field is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("Validation failed for one or more fields.")]
pub struct ValidationErrors {
    errors: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for `field`.
    pub fn add(&mut self, field: &str, reason: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_insert_with(|| reason.into());
    }

    /// Unwrap a field result, recording its error under `field`.
    ///
    /// # Returns
    /// The valid value, or `None` when the error was recorded
    pub fn check<T, E: Display>(&mut self, field: &str, result: Result<T, E>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.add(field, e.to_string());
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    /// Turn the collected failures into an error if there are any.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}
