use serde::{Deserialize, Serialize};

use super::a001_employee::Employee;
use super::a002_payroll::PayrollEntry;
use super::common::{AggregateRoot, RecordId};

/// Запись любого вида (для потребителей, которым вид не важен)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Record {
    Employee(Employee),
    Payroll(PayrollEntry),
}

impl Record {
    pub fn id(&self) -> &RecordId {
        match self {
            Self::Employee(e) => e.id(),
            Self::Payroll(p) => p.id(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Employee(_) => Employee::element_name(),
            Self::Payroll(_) => PayrollEntry::element_name(),
        }
    }

    /// Имя для отображения в логах и диалогах
    pub fn display_name(&self) -> &str {
        match self {
            Self::Employee(e) => &e.display_name,
            Self::Payroll(p) => &p.name,
        }
    }
}

impl From<Employee> for Record {
    fn from(value: Employee) -> Self {
        Self::Employee(value)
    }
}

impl From<PayrollEntry> for Record {
    fn from(value: PayrollEntry) -> Self {
        Self::Payroll(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_identity_and_tag() {
        let mut emp = Employee::empty(RecordId::from(4));
        emp.set_field("first_name", "Gabriela");
        emp.set_field("last_name", "Silang");
        let record = Record::from(emp);
        assert_eq!(record.id().as_str(), "4");
        assert_eq!(record.kind(), "Employee");
        assert_eq!(record.display_name(), "Gabriela Silang");

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["kind"], "employee");
    }
}
