//! Трейты для типов данных, отображаемых в списках (поиск, фильтры, сортировка)
use std::cmp::Ordering;

use super::query::SortKey;
use crate::domain::common::AggregateRoot;
use crate::domain::Record;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Поля, по которым выполняется поиск (имя, номер, подразделение)
    fn search_fields(&self) -> Vec<&str>;

    /// Проверяет, соответствует ли объект поисковому запросу (без учёта регистра)
    fn matches_filter(&self, filter: &str) -> bool {
        if filter.is_empty() {
            return true;
        }
        let filter_lower = filter.to_lowercase();
        self.search_fields()
            .into_iter()
            .any(|field| field.to_lowercase().contains(&filter_lower))
    }
}

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    /// Compare two records by a sort key.
    ///
    /// Keys that do not apply to the record kind return `Ordering::Equal`,
    /// so a stable sort keeps insertion order.
    fn compare_by_key(&self, other: &Self, key: SortKey) -> Ordering;
}

/// Trait для типов данных, поддерживающих фильтры списка
pub trait Filterable {
    fn department(&self) -> &str;

    /// Статус оплаты (только для Payroll)
    fn status(&self) -> Option<&str> {
        None
    }

    /// Числовая сумма для фильтра по диапазону (только для Payroll)
    fn amount(&self) -> Option<f64> {
        None
    }
}

/// Запись, с которой умеет работать табличный движок
pub trait ListRecord: AggregateRoot + Searchable + Sortable + Filterable + Into<Record> {}

impl<T> ListRecord for T where
    T: AggregateRoot + Searchable + Sortable + Filterable + Into<Record>
{
}
