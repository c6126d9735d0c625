use std::collections::BTreeMap;
use std::fmt::Debug;

use super::RecordId;
use crate::shared::metadata::FieldMetadata;

/// Сырые значения полей записи: имя поля → текст из формы или патча
pub type FieldValues = BTreeMap<String, String>;

/// Трейт для корня агрегата
///
/// Общий контракт Employee и Payroll: идентичность, статические метаданные
/// коллекции и доступ к полям по имени (для форм, патчей и distinct-значений).
pub trait AggregateRoot: Clone + Debug {
    // ============================================================================
    // Методы экземпляра
    // ============================================================================

    /// Получить ID записи
    fn id(&self) -> &RecordId;

    /// Текущее значение поля в текстовом виде
    fn field_value(&self, field: &str) -> Option<String>;

    /// Set a field from raw text.
    ///
    /// Returns `false` for unknown fields. Derived fields (display name) are
    /// recomputed by the implementation. The id is never touched here.
    fn set_field(&mut self, field: &str, value: &str) -> bool;

    // ============================================================================
    // Метаданные класса агрегата
    // ============================================================================

    /// Ключ коллекции в seed-файле (например, "employeesData")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число)
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число)
    fn list_name() -> &'static str;

    /// Схема редактируемых полей формы
    fn field_metadata() -> &'static [FieldMetadata];

    /// Пустая запись с заданным ID (основа для формы добавления)
    fn empty(id: RecordId) -> Self;

    // ============================================================================
    // Методы с реализацией по умолчанию
    // ============================================================================

    /// Хук после загрузки из seed-данных (заполнение производных полей)
    fn normalize(&mut self) {}

    /// Значения всех полей формы
    fn form_values(&self) -> FieldValues {
        Self::field_metadata()
            .iter()
            .map(|f| (f.name.to_string(), self.field_value(f.name).unwrap_or_default()))
            .collect()
    }

    /// Применить патч; возвращает список неизвестных полей
    fn apply_patch(&mut self, patch: &FieldValues) -> Vec<String> {
        patch
            .iter()
            .filter(|(field, value)| !self.set_field(field, value))
            .map(|(field, _)| field.clone())
            .collect()
    }
}
