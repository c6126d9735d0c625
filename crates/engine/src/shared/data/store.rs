//! In-memory store for records of one kind
//!
//! Insertion order is preserved and is the default list order. Identifiers
//! are unique within a store.

use std::collections::{BTreeSet, HashMap};

use contracts::domain::common::{AggregateRoot, FieldValues, RecordId, RecordMetadata};

use crate::shared::error::{EngineError, EngineResult};

#[derive(Debug, Clone)]
struct StoredRecord<T> {
    record: T,
    metadata: RecordMetadata,
}

#[derive(Debug, Clone)]
pub struct RecordStore<T> {
    entries: Vec<StoredRecord<T>>,
    /// id → позиция в `entries`
    index: HashMap<RecordId, usize>,
}

impl<T> Default for RecordStore<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: AggregateRoot> RecordStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Заполнить хранилище начальными данными
    pub fn load(records: Vec<T>) -> EngineResult<Self> {
        let mut store = Self::new();
        for mut record in records {
            record.normalize();
            store.add(record)?;
        }
        tracing::debug!("Loaded {} {} records", store.len(), T::element_name());
        Ok(store)
    }

    pub fn all(&self) -> impl Iterator<Item = &T> + '_ {
        self.entries.iter().map(|e| &e.record)
    }

    pub fn get(&self, id: &RecordId) -> Option<&T> {
        self.index.get(id).map(|&pos| &self.entries[pos].record)
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.index.contains_key(id)
    }

    pub fn metadata(&self, id: &RecordId) -> Option<&RecordMetadata> {
        self.index.get(id).map(|&pos| &self.entries[pos].metadata)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn add(&mut self, record: T) -> EngineResult<()> {
        let id = record.id().clone();
        if self.index.contains_key(&id) {
            return Err(EngineError::DuplicateIdentifier(id));
        }
        tracing::debug!("Adding {} {}", T::element_name(), id);
        self.index.insert(id, self.entries.len());
        self.entries.push(StoredRecord {
            record,
            metadata: RecordMetadata::new(),
        });
        Ok(())
    }

    /// Применить патч к записи; производные поля пересчитываются самой записью
    pub fn update(&mut self, id: &RecordId, patch: &FieldValues) -> EngineResult<&T> {
        let pos = *self
            .index
            .get(id)
            .ok_or_else(|| EngineError::NotFound(id.clone()))?;

        let entry = &mut self.entries[pos];
        let unknown = entry.record.apply_patch(patch);
        if !unknown.is_empty() {
            tracing::warn!(
                "Ignored unknown fields for {} {}: {}",
                T::element_name(),
                id,
                unknown.join(", ")
            );
        }
        entry.metadata.touch();
        tracing::debug!("Updated {} {} (version {})", T::element_name(), id, entry.metadata.version);
        Ok(&entry.record)
    }

    /// Заменить запись целиком (сохранение формы редактирования)
    pub fn replace(&mut self, record: T) -> EngineResult<()> {
        let id = record.id().clone();
        let pos = *self
            .index
            .get(&id)
            .ok_or_else(|| EngineError::NotFound(id.clone()))?;

        let entry = &mut self.entries[pos];
        entry.record = record;
        entry.metadata.touch();
        tracing::debug!("Replaced {} {}", T::element_name(), id);
        Ok(())
    }

    /// Remove records. If any id is absent nothing is removed.
    pub fn remove<'a, I>(&mut self, ids: I) -> EngineResult<Vec<T>>
    where
        I: IntoIterator<Item = &'a RecordId>,
    {
        let ids: BTreeSet<&RecordId> = ids.into_iter().collect();
        if let Some(missing) = ids.iter().find(|id| !self.index.contains_key(**id)) {
            return Err(EngineError::NotFound((*missing).clone()));
        }

        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|e| ids.contains(e.record.id()));
        self.entries = kept;
        self.rebuild_index();

        tracing::debug!("Removed {} {} records", removed.len(), T::element_name());
        Ok(removed.into_iter().map(|e| e.record).collect())
    }

    /// Различные непустые значения поля (для опций фильтра)
    pub fn distinct_values(&self, field: &str) -> BTreeSet<String> {
        self.all()
            .filter_map(|r| r.field_value(field))
            .filter(|v| !v.trim().is_empty())
            .collect()
    }

    fn rebuild_index(&mut self) {
        self.index = self
            .entries
            .iter()
            .enumerate()
            .map(|(pos, e)| (e.record.id().clone(), pos))
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_employee::Employee;

    fn employee(id: i64, first: &str, last: &str, department: &str) -> Employee {
        let mut e = Employee::empty(RecordId::from(id));
        e.set_field("first_name", first);
        e.set_field("last_name", last);
        e.set_field("department", department);
        e
    }

    fn store() -> RecordStore<Employee> {
        RecordStore::load(vec![
            employee(1, "Ana", "Cruz", "HR"),
            employee(2, "Ben", "Reyes", "Engineering"),
            employee(3, "Carla", "Santos", "Engineering"),
        ])
        .unwrap()
    }

    #[test]
    fn test_load_preserves_order() {
        let store = store();
        let ids: Vec<&str> = store.all().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_load_rejects_duplicates() {
        let result = RecordStore::load(vec![
            employee(1, "Ana", "Cruz", "HR"),
            employee(1, "Ana", "Cruz", "HR"),
        ]);
        assert!(matches!(result, Err(EngineError::DuplicateIdentifier(id)) if id.as_str() == "1"));
    }

    #[test]
    fn test_add_duplicate_fails() {
        let mut store = store();
        let err = store.add(employee(2, "X", "Y", "Z")).unwrap_err();
        assert!(matches!(err, EngineError::DuplicateIdentifier(_)));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_update_applies_patch_and_bumps_version() {
        let mut store = store();
        let id = RecordId::from(1);
        let patch: FieldValues = [("middle_name".to_string(), "Luna".to_string())].into();

        let updated = store.update(&id, &patch).unwrap();
        assert_eq!(updated.display_name, "Ana L. Cruz");
        assert_eq!(store.metadata(&id).unwrap().version, 1);
    }

    #[test]
    fn test_update_missing_fails() {
        let mut store = store();
        let err = store.update(&RecordId::from(42), &FieldValues::new()).unwrap_err();
        assert!(matches!(err, EngineError::NotFound(_)));
    }

    #[test]
    fn test_replace() {
        let mut store = store();
        store.replace(employee(2, "Benjamin", "Reyes", "Finance")).unwrap();
        assert_eq!(store.get(&RecordId::from(2)).unwrap().department, "Finance");
        assert!(store.replace(employee(9, "N", "O", "P")).is_err());
    }

    #[test]
    fn test_remove_is_all_or_nothing() {
        let mut store = store();
        let err = store
            .remove([&RecordId::from(1), &RecordId::from(99)])
            .unwrap_err();
        assert!(matches!(err, EngineError::NotFound(id) if id.as_str() == "99"));
        assert_eq!(store.len(), 3);

        let removed = store.remove([&RecordId::from(1), &RecordId::from(3)]).unwrap();
        assert_eq!(removed.len(), 2);
        assert_eq!(store.len(), 1);
        assert!(store.get(&RecordId::from(2)).is_some());
        assert!(store.get(&RecordId::from(3)).is_none());
    }

    #[test]
    fn test_distinct_values() {
        let mut store = store();
        let departments = store.distinct_values("department");
        assert_eq!(
            departments.into_iter().collect::<Vec<_>>(),
            vec!["Engineering".to_string(), "HR".to_string()]
        );

        store.remove([&RecordId::from(1)]).unwrap();
        assert_eq!(store.distinct_values("department").len(), 1);
        assert!(store.distinct_values("position").is_empty());
    }
}
