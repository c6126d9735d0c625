//! Конвейер запроса: поиск ∧ фильтры, затем стабильная сортировка

use contracts::domain::common::RecordId;
use contracts::shared::list::{FilterCriteria, ListRecord, SortKey};

use crate::shared::data::RecordStore;

/// Упорядоченное представление записей, удовлетворяющих запросу
#[derive(Debug, Clone)]
pub struct QueryView<'a, T> {
    items: Vec<&'a T>,
}

impl<'a, T: ListRecord> QueryView<'a, T> {
    pub fn items(&self) -> &[&'a T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn ids(&self) -> Vec<RecordId> {
        self.items.iter().map(|r| r.id().clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.items.iter().copied()
    }
}

/// Run a query against the store.
///
/// `sort_by` is stable, so ties and `SortKey::Unsorted` keep insertion order.
pub fn query<'a, T: ListRecord>(
    store: &'a RecordStore<T>,
    search: &str,
    filters: &FilterCriteria,
    sort: SortKey,
) -> QueryView<'a, T> {
    let mut items: Vec<&T> = store
        .all()
        .filter(|r| r.matches_filter(search) && filters.matches(*r))
        .collect();

    if sort != SortKey::Unsorted {
        items.sort_by(|a, b| a.compare_by_key(b, sort));
    }

    QueryView { items }
}
