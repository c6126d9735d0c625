use contracts::domain::a001_employee::{Employee, EmployeeSummary};
use contracts::shared::list::SortKey;

use crate::shared::config::{resolve_data_path, Config, ListConfig};
use crate::shared::data::{seed, RecordStore};
use crate::shared::error::EngineResult;
use crate::shared::list::RecordTable;

pub type EmployeeTable = RecordTable<Employee>;

/// Таблица сотрудников; по умолчанию в порядке загрузки
pub fn new_table(store: RecordStore<Employee>, list: &ListConfig) -> EmployeeTable {
    RecordTable::new(store, list.page_size)
        .with_page_size_options(list.page_size_options.clone())
        .with_sort(SortKey::Unsorted)
}

/// Загрузить сотрудников из seed-файла, указанного в конфигурации
pub fn load_table(config: &Config) -> EngineResult<EmployeeTable> {
    let path = resolve_data_path(&config.seed.employees_path);
    let store = seed::load_file::<Employee>(&path)?;
    Ok(new_table(store, &config.list))
}

/// Карточки: всего сотрудников, должностей, подразделений
pub fn summary(store: &RecordStore<Employee>) -> EmployeeSummary {
    EmployeeSummary {
        total_employees: store.len(),
        position_count: store.distinct_values("position").len(),
        department_count: store.distinct_values("department").len(),
    }
}

/// Варианты фильтра по подразделению
pub fn department_options(store: &RecordStore<Employee>) -> Vec<String> {
    store.distinct_values("department").into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::{AggregateRoot, RecordId};
    use std::io::Write;

    fn employee(id: i64, department: &str, position: &str) -> Employee {
        let mut e = Employee::empty(RecordId::from(id));
        e.set_field("first_name", "Test");
        e.set_field("last_name", &format!("User{}", id));
        e.set_field("department", department);
        e.set_field("position", position);
        e
    }

    #[test]
    fn test_summary() {
        let store = RecordStore::load(vec![
            employee(1, "Engineering", "Developer"),
            employee(2, "Engineering", "Lead"),
            employee(3, "HR", "Developer"),
            employee(4, "HR", ""),
        ])
        .unwrap();

        let summary = summary(&store);
        assert_eq!(summary.total_employees, 4);
        assert_eq!(summary.position_count, 2);
        assert_eq!(summary.department_count, 2);
        assert_eq!(department_options(&store), vec!["Engineering", "HR"]);
    }

    #[test]
    fn test_load_table_from_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"employeesData": [{{"id": 1, "first_name": "Ana", "last_name": "Cruz"}}]}}"#
        )
        .unwrap();

        let config = Config {
            seed: crate::shared::config::SeedConfig {
                employees_path: file.path().to_string_lossy().into_owned(),
                payroll_path: String::new(),
            },
            list: ListConfig {
                page_size: 10,
                page_size_options: vec![10],
            },
        };

        let mut table = load_table(&config).unwrap();
        assert_eq!(table.page_size(), 10);
        assert!(!table.set_page_size(25));
        assert_eq!(table.sort(), SortKey::Unsorted);
        assert_eq!(table.current_page().items[0].display_name, "Ana Cruz");
    }
}
