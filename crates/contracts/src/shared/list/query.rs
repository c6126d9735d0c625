use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::traits::Filterable;
use crate::shared::money;

// ============================================================================
// Sort key
// ============================================================================

/// Порядок сортировки списка
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortKey {
    /// Порядок вставки (по умолчанию на экране сотрудников)
    #[default]
    #[serde(rename = "none")]
    Unsorted,
    #[serde(rename = "name-asc")]
    NameAsc,
    #[serde(rename = "name-desc")]
    NameDesc,
    #[serde(rename = "department")]
    Department,
    #[serde(rename = "status")]
    Status,
    #[serde(rename = "empId")]
    EmpId,
    /// По сумме зарплаты, по возрастанию
    #[serde(rename = "salary")]
    Salary,
}

impl SortKey {
    pub const ALL: [SortKey; 7] = [
        Self::Unsorted,
        Self::NameAsc,
        Self::NameDesc,
        Self::Department,
        Self::Status,
        Self::EmpId,
        Self::Salary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unsorted => "none",
            Self::NameAsc => "name-asc",
            Self::NameDesc => "name-desc",
            Self::Department => "department",
            Self::Status => "status",
            Self::EmpId => "empId",
            Self::Salary => "salary",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(Self::Unsorted),
            // "name" is what both admin screens send for A-Z
            "name" => Ok(Self::NameAsc),
            other => Self::ALL
                .into_iter()
                .find(|k| k.as_str() == other)
                .ok_or_else(|| format!("Unknown sort key: {}", other)),
        }
    }
}

// ============================================================================
// Filters
// ============================================================================

/// Диапазон суммы `[min, max]`, границы включительно; `None` означает без ограничения
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AmountRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl AmountRange {
    pub const fn unbounded() -> Self {
        Self { min: None, max: None }
    }

    pub const fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// Bounds from the filter's text inputs.
    /// Empty or unparseable text leaves that side unbounded.
    pub fn from_inputs(min: &str, max: &str) -> Self {
        Self {
            min: money::parse_amount(min),
            max: money::parse_amount(max),
        }
    }

    pub fn is_active(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }
}

/// List filter criteria
///
/// Each criterion is independent; an empty set or unbounded range is inactive
/// and always matches. An active criterion never matches a record that has no
/// value for it (employees have no payment status or salary).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Подразделения (OR)
    #[serde(default)]
    pub departments: BTreeSet<String>,
    /// Статусы оплаты (только Payroll)
    #[serde(default)]
    pub statuses: BTreeSet<String>,
    /// Диапазон зарплаты (только Payroll)
    #[serde(default)]
    pub amount: AmountRange,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_departments<I, S>(mut self, departments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.departments = departments.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_statuses<I, S>(mut self, statuses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.statuses = statuses.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_amount(mut self, amount: AmountRange) -> Self {
        self.amount = amount;
        self
    }

    /// Включить/выключить подразделение в фильтре
    pub fn toggle_department(&mut self, department: &str) {
        if !self.departments.remove(department) {
            self.departments.insert(department.to_string());
        }
    }

    /// Включить/выключить статус в фильтре
    pub fn toggle_status(&mut self, status: &str) {
        if !self.statuses.remove(status) {
            self.statuses.insert(status.to_string());
        }
    }

    /// Количество активных критериев (для индикатора на кнопке фильтра)
    pub fn active_count(&self) -> usize {
        [
            !self.departments.is_empty(),
            !self.statuses.is_empty(),
            self.amount.is_active(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    pub fn matches<T: Filterable>(&self, record: &T) -> bool {
        let department_match =
            self.departments.is_empty() || self.departments.contains(record.department());

        let status_match = self.statuses.is_empty()
            || record
                .status()
                .is_some_and(|status| self.statuses.contains(status));

        let amount_match = !self.amount.is_active()
            || record
                .amount()
                .is_some_and(|amount| self.amount.contains(amount));

        department_match && status_match && amount_match
    }
}
