//! Add/edit form draft for a record
//!
//! Holds raw field values, per-field validity and messages, the completion
//! percentage and the dirty flag. Persisting a submitted record is the
//! caller's job (see `RecordTable::save_form`).

use std::collections::BTreeMap;

use contracts::domain::common::{AggregateRoot, FieldValues, RecordId};
use contracts::shared::metadata::{find_field, FieldCheck, FieldMetadata};

use crate::shared::error::ValidationErrors;

/// Режим формы
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit(RecordId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Open,
    Submitted,
}

/// Ответ на попытку закрыть форму
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseRequest {
    /// Нужно спросить "Discard changes?"
    pub needs_confirmation: bool,
}

#[derive(Debug, Clone)]
pub struct FormDraft<T: AggregateRoot> {
    mode: FormMode,
    status: FormStatus,
    /// Запись, на которую накладываются значения формы (поля вне схемы сохраняются)
    base: T,
    values: FieldValues,
    validity: BTreeMap<String, bool>,
    messages: BTreeMap<String, String>,
    progress: f64,
    dirty: bool,
}

impl<T: AggregateRoot> FormDraft<T> {
    /// Открыть пустую форму добавления; запись получит новый UUID
    pub fn start_add() -> Self {
        Self::open(FormMode::Add, T::empty(RecordId::generate()))
    }

    /// Открыть форму редактирования существующей записи
    pub fn start_edit(record: &T) -> Self {
        Self::open(FormMode::Edit(record.id().clone()), record.clone())
    }

    fn open(mode: FormMode, base: T) -> Self {
        let values = base.form_values();
        // Без сообщений: ошибки показываются после ввода или submit
        let validity = Self::validated_fields()
            .map(|meta| {
                let raw = values.get(meta.name).map(String::as_str).unwrap_or("");
                (meta.name.to_string(), meta.validation.check(raw).valid)
            })
            .collect();

        let mut draft = Self {
            mode,
            status: FormStatus::Open,
            base,
            values,
            validity,
            messages: BTreeMap::new(),
            progress: 0.0,
            dirty: false,
        };
        draft.recompute_progress();
        draft
    }

    fn validated_fields() -> impl Iterator<Item = &'static FieldMetadata> {
        T::field_metadata().iter().filter(|f| f.is_validated())
    }

    // ============================================================================
    // Accessors
    // ============================================================================

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn is_edit_mode(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn record_id(&self) -> &RecordId {
        self.base.id()
    }

    pub fn value(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    /// `None` for fields without validation rules
    pub fn is_valid(&self, field: &str) -> Option<bool> {
        self.validity.get(field).copied()
    }

    pub fn message(&self, field: &str) -> Option<&str> {
        self.messages.get(field).map(String::as_str)
    }

    pub fn messages(&self) -> &BTreeMap<String, String> {
        &self.messages
    }

    /// Процент заполнения, 0..=100
    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    // ============================================================================
    // Editing
    // ============================================================================

    /// Set a field value.
    ///
    /// Returns `false` and leaves the draft untouched for fields that are not
    /// part of the form schema.
    pub fn set_field(&mut self, field: &str, value: impl Into<String>) -> bool {
        let Some(meta) = find_field(T::field_metadata(), field) else {
            tracing::warn!("Ignored unknown {} form field '{}'", T::element_name(), field);
            return false;
        };

        let value = value.into();
        if meta.is_validated() {
            self.apply_check(meta, &value);
        }
        self.values.insert(field.to_string(), value);
        // Правка после сохранения снова открывает черновик
        self.status = FormStatus::Open;
        self.dirty = true;
        self.recompute_progress();
        true
    }

    fn apply_check(&mut self, meta: &FieldMetadata, value: &str) -> FieldCheck {
        let check = meta.validation.check(value);
        self.validity.insert(meta.name.to_string(), check.valid);
        if check.valid {
            self.messages.remove(meta.name);
        } else {
            self.messages.insert(meta.name.to_string(), check.message.clone());
        }
        check
    }

    fn recompute_progress(&mut self) {
        let total = Self::validated_fields().count();
        if total == 0 {
            self.progress = 100.0;
            return;
        }

        let complete = Self::validated_fields()
            .filter(|meta| {
                let present = self
                    .values
                    .get(meta.name)
                    .is_some_and(|v| !v.trim().is_empty());
                present && self.validity.get(meta.name).copied().unwrap_or(false)
            })
            .count();

        self.progress = (complete * 100) as f64 / total as f64;
    }

    // ============================================================================
    // Submit / close
    // ============================================================================

    /// Validate every field and build the record.
    ///
    /// On failure the draft stays open with messages for every invalid field.
    /// The draft stays open on success too, until `mark_submitted` confirms
    /// the record was stored.
    pub fn submit(&mut self) -> Result<T, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        for meta in Self::validated_fields() {
            let value = self.values.get(meta.name).cloned().unwrap_or_default();
            let check = self.apply_check(meta, &value);
            if !check.valid {
                errors.insert(meta.name, check.message);
            }
        }
        self.recompute_progress();

        if !errors.is_empty() {
            tracing::warn!(
                "{} form has {} invalid field(s): {}",
                T::element_name(),
                errors.len(),
                errors.fields().collect::<Vec<_>>().join(", ")
            );
            return Err(errors);
        }

        let mut record = self.base.clone();
        for (field, value) in &self.values {
            record.set_field(field, value);
        }
        record.normalize();
        Ok(record)
    }

    /// Record a successful save.
    ///
    /// The draft switches to edit mode over the stored record, so saving it
    /// again replaces that record instead of adding a duplicate.
    pub fn mark_submitted(&mut self, saved: &T) {
        self.mode = FormMode::Edit(saved.id().clone());
        self.base = saved.clone();
        self.status = FormStatus::Submitted;
        self.dirty = false;
    }

    /// Закрытие формы требует подтверждения, если есть несохранённые изменения
    pub fn request_close(&self) -> CloseRequest {
        CloseRequest {
            needs_confirmation: self.dirty && self.status != FormStatus::Submitted,
        }
    }

    /// Закрыть без сохранения
    pub fn discard(self) {
        if self.dirty && self.status != FormStatus::Submitted {
            tracing::info!("Discarded changes to {} {}", T::element_name(), self.base.id());
        }
    }
}
