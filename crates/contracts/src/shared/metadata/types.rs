//! Field metadata for record forms
//!
//! All types use 'static lifetimes for zero-cost compile-time constants.

use super::validation::ValidationRules;

/// Metadata for a single form field
/// Copy trait enabled for efficient passing by value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMetadata {
    /// Имя поля (совпадает с ключом в seed-данных)
    pub name: &'static str,
    pub label: &'static str,
    pub validation: ValidationRules,
    /// Допустимые значения для полей-перечислений (select в форме)
    pub enum_values: Option<&'static [&'static str]>,
}

impl FieldMetadata {
    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            validation: ValidationRules::none(),
            enum_values: None,
        }
    }

    pub const fn with_rules(
        name: &'static str,
        label: &'static str,
        validation: ValidationRules,
    ) -> Self {
        Self {
            name,
            label,
            validation,
            enum_values: None,
        }
    }

    pub const fn select(
        name: &'static str,
        label: &'static str,
        values: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            label,
            validation: ValidationRules::none(),
            enum_values: Some(values),
        }
    }

    /// Check if field is optional
    pub fn is_optional(&self) -> bool {
        !self.validation.required
    }

    /// Поле участвует в расчёте прогресса заполнения
    pub fn is_validated(&self) -> bool {
        self.validation.is_validated()
    }
}

/// Найти поле по имени в схеме
pub fn find_field(fields: &'static [FieldMetadata], name: &str) -> Option<&'static FieldMetadata> {
    fields.iter().find(|f| f.name == name)
}
