use std::collections::BTreeMap;
use std::path::PathBuf;

use contracts::domain::common::RecordId;
use thiserror::Error;

/// Ошибки валидации формы: поле → сообщение
#[derive(Debug, Clone, PartialEq, Eq, Default, Error)]
#[error("Validation failed: {}", .0.keys().cloned().collect::<Vec<_>>().join(", "))]
pub struct ValidationErrors(pub BTreeMap<String, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Ошибки движка записей
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Duplicate identifier: {0}")]
    DuplicateIdentifier(RecordId),

    #[error("Record not found: {0}")]
    NotFound(RecordId),

    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("Malformed seed data: {0}")]
    MalformedSeedData(String),

    #[error("Failed to read seed file {path}: {source}")]
    SeedRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_display() {
        let mut errors = ValidationErrors::new();
        errors.insert("last_name", "This field is required");
        errors.insert("first_name", "This field is required");
        assert_eq!(errors.to_string(), "Validation failed: first_name, last_name");
        assert_eq!(errors.get("first_name"), Some("This field is required"));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_engine_error_messages() {
        let err = EngineError::NotFound(RecordId::from("PR-9"));
        assert_eq!(err.to_string(), "Record not found: PR-9");
        let err: EngineError = ValidationErrors::new().into();
        assert!(matches!(err, EngineError::Validation(_)));
    }
}
