//! Seed data loading from JSON
//!
//! Seed files look like `{ "employeesData": [ ... ] }`; the key is the
//! record kind's collection name.

use std::path::Path;

use contracts::domain::common::AggregateRoot;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::store::RecordStore;
use crate::shared::error::{EngineError, EngineResult};

/// Разобрать коллекцию записей из JSON-текста
pub fn parse_collection<T>(json: &str) -> EngineResult<Vec<T>>
where
    T: AggregateRoot + DeserializeOwned,
{
    let collection = T::collection_name();
    let mut root: Value = serde_json::from_str(json)
        .map_err(|e| EngineError::MalformedSeedData(format!("invalid JSON: {}", e)))?;

    let items = root
        .get_mut(collection)
        .map(Value::take)
        .ok_or_else(|| {
            EngineError::MalformedSeedData(format!("missing collection '{}'", collection))
        })?;

    serde_json::from_value(items)
        .map_err(|e| EngineError::MalformedSeedData(format!("{}: {}", collection, e)))
}

/// Построить хранилище из JSON-текста
pub fn load_str<T>(json: &str) -> EngineResult<RecordStore<T>>
where
    T: AggregateRoot + DeserializeOwned,
{
    let records = parse_collection::<T>(json)?;
    RecordStore::load(records).map_err(|e| match e {
        EngineError::DuplicateIdentifier(id) => EngineError::MalformedSeedData(format!(
            "duplicate id '{}' in '{}'",
            id,
            T::collection_name()
        )),
        other => other,
    })
}

/// Построить хранилище из файла
pub fn load_file<T>(path: &Path) -> EngineResult<RecordStore<T>>
where
    T: AggregateRoot + DeserializeOwned,
{
    let json = std::fs::read_to_string(path).map_err(|source| EngineError::SeedRead {
        path: path.to_path_buf(),
        source,
    })?;
    let store = load_str::<T>(&json)?;
    tracing::info!(
        "Loaded {} {} from {}",
        store.len(),
        T::list_name(),
        path.display()
    );
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_employee::Employee;
    use contracts::domain::a002_payroll::{PaymentStatus, PayrollEntry};
    use contracts::domain::common::RecordId;
    use std::io::Write;

    const EMPLOYEES: &str = r#"{
        "employeesData": [
            {"id": 1, "empNo": "EMP-001", "first_name": "Juan", "middle_name": "Santos",
             "last_name": "Cruz", "department": "Engineering", "position": "Developer"},
            {"id": 2, "empNo": "EMP-002", "first_name": "Maria", "last_name": "Reyes",
             "gender": "Female", "department": "HR"}
        ]
    }"#;

    #[test]
    fn test_parse_employees_fills_display_name() {
        let store = load_str::<Employee>(EMPLOYEES).unwrap();
        assert_eq!(store.len(), 2);
        let juan = store.get(&RecordId::from(1)).unwrap();
        assert_eq!(juan.display_name, "Juan S. Cruz");
        assert_eq!(juan.email_address, "");
    }

    #[test]
    fn test_parse_payroll() {
        let json = r#"{"payrollData": [
            {"id": "1", "name": "Juan Cruz", "empId": "EMP-001", "department": "Engineering",
             "salary": "‚Ç±45,000.00", "hours": 160, "status": "Paid"}
        ]}"#;
        let store = load_str::<PayrollEntry>(json).unwrap();
        let row = store.get(&RecordId::from("1")).unwrap();
        assert_eq!(row.status, PaymentStatus::Paid);
        assert_eq!(row.salary_amount(), Some(45000.0));
    }

    #[test]
    fn test_missing_collection() {
        let err = load_str::<Employee>(r#"{"payrollData": []}"#).unwrap_err();
        assert!(matches!(err, EngineError::MalformedSeedData(msg) if msg.contains("employeesData")));
    }

    #[test]
    fn test_malformed_json() {
        let err = load_str::<Employee>("{ not json").unwrap_err();
        assert!(matches!(err, EngineError::MalformedSeedData(_)));
    }

    #[test]
    fn test_duplicate_ids_are_malformed() {
        let json = r#"{"employeesData": [{"id": 1}, {"id": "1"}]}"#;
        let err = load_str::<Employee>(json).unwrap_err();
        assert!(matches!(err, EngineError::MalformedSeedData(msg) if msg.contains("duplicate")));
    }

    #[test]
    fn test_bundled_seed_files() {
        let employees =
            load_str::<Employee>(include_str!("../../../../../data/employees.json")).unwrap();
        assert_eq!(employees.len(), 7);
        for e in employees.all() {
            for meta in Employee::field_metadata().iter().filter(|f| f.is_validated()) {
                let value = e.field_value(meta.name).unwrap_or_default();
                assert!(meta.validation.check(&value).valid, "{} {}", e.id, meta.name);
            }
        }

        let payroll =
            load_str::<PayrollEntry>(include_str!("../../../../../data/payroll.json")).unwrap();
        assert_eq!(payroll.len(), 7);
        assert!(payroll.all().all(|p| p.salary_amount().is_some()));
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(EMPLOYEES.as_bytes()).unwrap();

        let store = load_file::<Employee>(file.path()).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = load_file::<Employee>(&path).unwrap_err();
        assert!(matches!(err, EngineError::SeedRead { path: p, .. } if p == path));
    }
}
