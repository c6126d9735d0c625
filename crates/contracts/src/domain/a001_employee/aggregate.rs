use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::common::{AggregateRoot, RecordId};
use crate::shared::list::{Filterable, Searchable, SortKey, Sortable};
use crate::shared::metadata::{FieldFormat, FieldMetadata, ValidationRules};

// ============================================================================
// Enums
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

impl Gender {
    pub const VALUES: &'static [&'static str] = &["Male", "Female", "Other"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CivilStatus {
    #[default]
    Single,
    Married,
    Widowed,
    Separated,
}

impl CivilStatus {
    pub const VALUES: &'static [&'static str] = &["Single", "Married", "Widowed", "Separated"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::Married => "Married",
            Self::Widowed => "Widowed",
            Self::Separated => "Separated",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "single" => Some(Self::Single),
            "married" => Some(Self::Married),
            "widowed" => Some(Self::Widowed),
            "separated" => Some(Self::Separated),
            _ => None,
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// An employee record
///
/// Missing optional fields in seed data become empty strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: RecordId,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub employee_no: String,
    #[serde(rename = "empNo", default)]
    pub emp_no: String,

    // Personal info
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub middle_name: String,
    #[serde(default)]
    pub last_name: String,
    /// Derived from the name parts, see [`generate_display_name`]
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default)]
    pub date_of_birth: String,
    #[serde(default)]
    pub civil_status: CivilStatus,
    #[serde(default)]
    pub email_address: String,
    #[serde(default)]
    pub mobile_number: String,

    // Address info
    #[serde(default)]
    pub home_address: String,
    #[serde(default)]
    pub current_address: String,

    // Government IDs
    #[serde(default)]
    pub sss_number: String,
    #[serde(default)]
    pub philhealth_number: String,
    #[serde(default)]
    pub pagibig_number: String,
    #[serde(default)]
    pub tin_number: String,

    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub position: String,
}

/// "First M. Last" при наличии отчества, иначе "First Last"
pub fn generate_display_name(first_name: &str, middle_name: &str, last_name: &str) -> String {
    let first = first_name.trim();
    let last = last_name.trim();
    match middle_name.trim().chars().next() {
        Some(initial) => format!("{} {}. {}", first, initial, last),
        None => format!("{} {}", first, last),
    }
}

impl Employee {
    pub fn refresh_display_name(&mut self) {
        self.display_name =
            generate_display_name(&self.first_name, &self.middle_name, &self.last_name);
    }
}

/// Схема формы добавления/редактирования сотрудника
pub static EMPLOYEE_FIELDS: &[FieldMetadata] = &[
    FieldMetadata::with_rules("empNo", "Employee No.", ValidationRules::required()),
    FieldMetadata::with_rules("first_name", "First Name", ValidationRules::required()),
    FieldMetadata::text("middle_name", "Middle Name"),
    FieldMetadata::with_rules("last_name", "Last Name", ValidationRules::required()),
    FieldMetadata::text("department", "Department"),
    FieldMetadata::text("position", "Position"),
    FieldMetadata::select("gender", "Gender", Gender::VALUES),
    FieldMetadata::with_rules(
        "date_of_birth",
        "Date of Birth",
        ValidationRules::format(FieldFormat::Date),
    ),
    FieldMetadata::select("civil_status", "Civil Status", CivilStatus::VALUES),
    FieldMetadata::with_rules(
        "email_address",
        "Email Address",
        ValidationRules::format(FieldFormat::Email),
    ),
    FieldMetadata::with_rules(
        "mobile_number",
        "Mobile Number",
        ValidationRules::format(FieldFormat::MobileNumber),
    ),
    FieldMetadata::text("home_address", "Home Address"),
    FieldMetadata::text("current_address", "Current Address"),
    FieldMetadata::with_rules(
        "sss_number",
        "SSS Number",
        ValidationRules::format(FieldFormat::SssNumber),
    ),
    FieldMetadata::with_rules(
        "philhealth_number",
        "PhilHealth Number",
        ValidationRules::format(FieldFormat::PhilHealthNumber),
    ),
    FieldMetadata::with_rules(
        "pagibig_number",
        "Pag-IBIG Number",
        ValidationRules::format(FieldFormat::PagIbigNumber),
    ),
    FieldMetadata::with_rules(
        "tin_number",
        "TIN",
        ValidationRules::format(FieldFormat::TinNumber),
    ),
];

impl AggregateRoot for Employee {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn field_value(&self, field: &str) -> Option<String> {
        let value = match field {
            "id" => self.id.as_string(),
            "user_id" => self.user_id.map(|v| v.to_string()).unwrap_or_default(),
            "employee_no" => self.employee_no.clone(),
            "empNo" => self.emp_no.clone(),
            "first_name" => self.first_name.clone(),
            "middle_name" => self.middle_name.clone(),
            "last_name" => self.last_name.clone(),
            "display_name" => self.display_name.clone(),
            "gender" => self.gender.as_str().to_string(),
            "date_of_birth" => self.date_of_birth.clone(),
            "civil_status" => self.civil_status.as_str().to_string(),
            "email_address" => self.email_address.clone(),
            "mobile_number" => self.mobile_number.clone(),
            "home_address" => self.home_address.clone(),
            "current_address" => self.current_address.clone(),
            "sss_number" => self.sss_number.clone(),
            "philhealth_number" => self.philhealth_number.clone(),
            "pagibig_number" => self.pagibig_number.clone(),
            "tin_number" => self.tin_number.clone(),
            "department" => self.department.clone(),
            "position" => self.position.clone(),
            _ => return None,
        };
        Some(value)
    }

    fn set_field(&mut self, field: &str, value: &str) -> bool {
        let value_owned = value.to_string();
        match field {
            "employee_no" => self.employee_no = value_owned,
            "empNo" => self.emp_no = value_owned,
            "first_name" | "middle_name" | "last_name" => {
                match field {
                    "first_name" => self.first_name = value_owned,
                    "middle_name" => self.middle_name = value_owned,
                    _ => self.last_name = value_owned,
                }
                self.refresh_display_name();
            }
            // Неизвестное значение оставляет текущее
            "gender" => {
                if let Some(gender) = Gender::parse(value) {
                    self.gender = gender;
                }
            }
            "civil_status" => {
                if let Some(status) = CivilStatus::parse(value) {
                    self.civil_status = status;
                }
            }
            "date_of_birth" => self.date_of_birth = value_owned,
            "email_address" => self.email_address = value_owned,
            "mobile_number" => self.mobile_number = value_owned,
            "home_address" => self.home_address = value_owned,
            "current_address" => self.current_address = value_owned,
            "sss_number" => self.sss_number = value_owned,
            "philhealth_number" => self.philhealth_number = value_owned,
            "pagibig_number" => self.pagibig_number = value_owned,
            "tin_number" => self.tin_number = value_owned,
            "department" => self.department = value_owned,
            "position" => self.position = value_owned,
            _ => return false,
        }
        true
    }

    fn collection_name() -> &'static str {
        "employeesData"
    }

    fn element_name() -> &'static str {
        "Employee"
    }

    fn list_name() -> &'static str {
        "Employees"
    }

    fn field_metadata() -> &'static [FieldMetadata] {
        EMPLOYEE_FIELDS
    }

    fn empty(id: RecordId) -> Self {
        Self {
            id,
            user_id: None,
            employee_no: String::new(),
            emp_no: String::new(),
            first_name: String::new(),
            middle_name: String::new(),
            last_name: String::new(),
            display_name: String::new(),
            gender: Gender::default(),
            date_of_birth: String::new(),
            civil_status: CivilStatus::default(),
            email_address: String::new(),
            mobile_number: String::new(),
            home_address: String::new(),
            current_address: String::new(),
            sss_number: String::new(),
            philhealth_number: String::new(),
            pagibig_number: String::new(),
            tin_number: String::new(),
            department: String::new(),
            position: String::new(),
        }
    }

    fn normalize(&mut self) {
        if self.display_name.trim().is_empty() {
            self.refresh_display_name();
        }
    }
}

impl Searchable for Employee {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.display_name.as_str(),
            self.emp_no.as_str(),
            self.department.as_str(),
        ]
    }
}

impl Sortable for Employee {
    fn compare_by_key(&self, other: &Self, key: SortKey) -> Ordering {
        match key {
            SortKey::NameAsc => self.display_name.cmp(&other.display_name),
            SortKey::NameDesc => other.display_name.cmp(&self.display_name),
            SortKey::Department => self.department.cmp(&other.department),
            SortKey::EmpId => self.emp_no.cmp(&other.emp_no),
            SortKey::Unsorted | SortKey::Status | SortKey::Salary => Ordering::Equal,
        }
    }
}

impl Filterable for Employee {
    fn department(&self) -> &str {
        &self.department
    }
}

// ============================================================================
// DTOs
// ============================================================================

/// Карточки над таблицей сотрудников
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    pub total_employees: usize,
    pub position_count: usize,
    pub department_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        assert_eq!(generate_display_name("Juan", "Santos", "Cruz"), "Juan S. Cruz");
        assert_eq!(generate_display_name("Maria", "", "Reyes"), "Maria Reyes");
        assert_eq!(generate_display_name(" Ana ", "  ", " Lim "), "Ana Lim");
    }

    #[test]
    fn test_name_change_recomputes_display_name() {
        let mut emp = Employee::empty(RecordId::from(1));
        emp.set_field("first_name", "Jose");
        emp.set_field("last_name", "Rizal");
        assert_eq!(emp.display_name, "Jose Rizal");
        emp.set_field("middle_name", "Protacio");
        assert_eq!(emp.display_name, "Jose P. Rizal");
    }

    #[test]
    fn test_deserialize_with_missing_optional_fields() {
        let json = r#"{"id": 3, "first_name": "Liza", "last_name": "Soberano", "empNo": "EMP-003"}"#;
        let mut emp: Employee = serde_json::from_str(json).unwrap();
        emp.normalize();
        assert_eq!(emp.id.as_str(), "3");
        assert_eq!(emp.email_address, "");
        assert_eq!(emp.gender, Gender::Male);
        assert_eq!(emp.civil_status, CivilStatus::Single);
        assert_eq!(emp.display_name, "Liza Soberano");
    }

    #[test]
    fn test_form_values_round_trip() {
        let mut emp = Employee::empty(RecordId::from(5));
        emp.set_field("empNo", "EMP-005");
        emp.set_field("first_name", "Andres");
        emp.set_field("last_name", "Bonifacio");
        emp.set_field("gender", "male");
        emp.set_field("civil_status", "Married");

        let values = emp.form_values();
        assert_eq!(values.len(), EMPLOYEE_FIELDS.len());
        assert_eq!(values["civil_status"], "Married");

        let mut rebuilt = Employee::empty(RecordId::from(5));
        assert!(rebuilt.apply_patch(&values).is_empty());
        assert_eq!(rebuilt, emp);
    }

    #[test]
    fn test_unknown_fields_are_reported() {
        let mut emp = Employee::empty(RecordId::from(1));
        assert!(!emp.set_field("salary", "100"));
        assert!(!emp.set_field("display_name", "Someone"));
        assert!(!emp.set_field("id", "99"));
        assert_eq!(emp.id.as_str(), "1");
    }

    #[test]
    fn test_sort_keys() {
        let mut a = Employee::empty(RecordId::from(1));
        a.set_field("first_name", "Ana");
        a.set_field("department", "HR");
        let mut b = Employee::empty(RecordId::from(2));
        b.set_field("first_name", "Ben");
        b.set_field("department", "Engineering");

        assert_eq!(a.compare_by_key(&b, SortKey::NameAsc), Ordering::Less);
        assert_eq!(a.compare_by_key(&b, SortKey::NameDesc), Ordering::Greater);
        assert_eq!(a.compare_by_key(&b, SortKey::Department), Ordering::Greater);
        assert_eq!(a.compare_by_key(&b, SortKey::Status), Ordering::Equal);
    }
}
