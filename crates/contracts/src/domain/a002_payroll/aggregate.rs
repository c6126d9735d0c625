use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::common::{AggregateRoot, RecordId};
use crate::shared::list::{Filterable, Searchable, SortKey, Sortable};
use crate::shared::metadata::{FieldFormat, FieldMetadata, ValidationRules};
use crate::shared::money;

/// Статус выплаты
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PaymentStatus {
    #[serde(rename = "Paid")]
    Paid,
    #[default]
    #[serde(rename = "Not Paid")]
    NotPaid,
}

impl PaymentStatus {
    pub const VALUES: &'static [&'static str] = &["Paid", "Not Paid"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::NotPaid => "Not Paid",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "Paid" => Some(Self::Paid),
            "Not Paid" | "NotPaid" => Some(Self::NotPaid),
            _ => None,
        }
    }
}

/// Строка ведомости начислений
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollEntry {
    pub id: RecordId,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "empId", default)]
    pub emp_id: String,
    #[serde(default)]
    pub department: String,
    /// Display form, e.g. "₱45,000.00"
    #[serde(default)]
    pub salary: String,
    #[serde(default)]
    pub hours: f64,
    #[serde(default)]
    pub status: PaymentStatus,
    #[serde(default)]
    pub avatar: String,
}

impl PayrollEntry {
    /// Сумма зарплаты числом
    pub fn salary_amount(&self) -> Option<f64> {
        money::parse_amount(&self.salary)
    }

    pub fn is_paid(&self) -> bool {
        self.status == PaymentStatus::Paid
    }
}

/// Схема формы ведомости
pub static PAYROLL_FIELDS: &[FieldMetadata] = &[
    FieldMetadata::with_rules("name", "Employee Name", ValidationRules::required()),
    FieldMetadata::with_rules("empId", "Employee ID", ValidationRules::required()),
    FieldMetadata::with_rules("department", "Department", ValidationRules::required()),
    FieldMetadata::with_rules(
        "salary",
        "Salary",
        ValidationRules::required_format(FieldFormat::Money),
    ),
    FieldMetadata::with_rules("hours", "Hours Worked", ValidationRules::format(FieldFormat::Hours)),
    FieldMetadata::select("status", "Status", PaymentStatus::VALUES),
];

impl AggregateRoot for PayrollEntry {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn field_value(&self, field: &str) -> Option<String> {
        let value = match field {
            "id" => self.id.as_string(),
            "name" => self.name.clone(),
            "empId" => self.emp_id.clone(),
            "department" => self.department.clone(),
            "salary" => self.salary.clone(),
            "hours" => self.hours.to_string(),
            "status" => self.status.as_str().to_string(),
            "avatar" => self.avatar.clone(),
            _ => return None,
        };
        Some(value)
    }

    fn set_field(&mut self, field: &str, value: &str) -> bool {
        match field {
            "name" => self.name = value.to_string(),
            "empId" => self.emp_id = value.to_string(),
            "department" => self.department = value.to_string(),
            // Сохраняем в едином формате, если сумма разбирается
            "salary" => {
                self.salary = match money::parse_amount(value) {
                    Some(amount) => money::format_amount(amount),
                    None => value.to_string(),
                }
            }
            "hours" => {
                if let Ok(hours) = value.trim().parse::<f64>() {
                    self.hours = hours;
                } else if value.trim().is_empty() {
                    self.hours = 0.0;
                }
            }
            "status" => {
                if let Some(status) = PaymentStatus::parse(value) {
                    self.status = status;
                }
            }
            "avatar" => self.avatar = value.to_string(),
            _ => return false,
        }
        true
    }

    fn collection_name() -> &'static str {
        "payrollData"
    }

    fn element_name() -> &'static str {
        "Payroll Entry"
    }

    fn list_name() -> &'static str {
        "Payroll"
    }

    fn field_metadata() -> &'static [FieldMetadata] {
        PAYROLL_FIELDS
    }

    fn empty(id: RecordId) -> Self {
        Self {
            id,
            name: String::new(),
            emp_id: String::new(),
            department: String::new(),
            salary: String::new(),
            hours: 0.0,
            status: PaymentStatus::default(),
            avatar: String::new(),
        }
    }
}

impl Searchable for PayrollEntry {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.emp_id.as_str(),
            self.department.as_str(),
        ]
    }
}

impl Sortable for PayrollEntry {
    fn compare_by_key(&self, other: &Self, key: SortKey) -> Ordering {
        match key {
            SortKey::NameAsc => self.name.cmp(&other.name),
            SortKey::NameDesc => other.name.cmp(&self.name),
            SortKey::Department => self.department.cmp(&other.department),
            SortKey::Status => self.status.as_str().cmp(other.status.as_str()),
            SortKey::EmpId => self.emp_id.cmp(&other.emp_id),
            SortKey::Salary => match (self.salary_amount(), other.salary_amount()) {
                (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            SortKey::Unsorted => Ordering::Equal,
        }
    }
}

impl Filterable for PayrollEntry {
    fn department(&self) -> &str {
        &self.department
    }

    fn status(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn amount(&self) -> Option<f64> {
        self.salary_amount()
    }
}

// ============================================================================
// DTOs
// ============================================================================

/// Карточки над ведомостью
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollSummary {
    pub total_amount: f64,
    pub pending_count: usize,
    pub paid_count: usize,
}

impl PayrollSummary {
    pub fn total_amount_label(&self) -> String {
        money::format_amount(self.total_amount)
    }
}
