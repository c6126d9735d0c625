//! List screen state: the store plus search, filters, sort, page and row
//! selection.
//!
//! Changing search, filters or sort returns to page 1. Changing the page size
//! keeps the current page but clamps it into range. Deleted records leave the
//! selection.

use contracts::domain::common::{FieldValues, RecordId};
use contracts::domain::Record;
use contracts::shared::list::{AmountRange, FilterCriteria, ListRecord, Page, SortKey};

use super::pagination::{clamp_page, paginate, total_pages};
use super::query::{query, QueryView};
use super::selection::{CheckboxState, SelectionSet};
use crate::shared::data::RecordStore;
use crate::shared::error::EngineResult;
use crate::shared::form::{FormDraft, FormMode};

#[derive(Debug, Clone)]
pub struct RecordTable<T: ListRecord> {
    store: RecordStore<T>,
    search: String,
    filters: FilterCriteria,
    sort: SortKey,
    page: usize,
    page_size: usize,
    /// Допустимые размеры страницы; пустой список снимает ограничение
    page_size_options: Vec<usize>,
    selection: SelectionSet,
}

impl<T: ListRecord> RecordTable<T> {
    pub fn new(store: RecordStore<T>, page_size: usize) -> Self {
        Self {
            store,
            search: String::new(),
            filters: FilterCriteria::default(),
            sort: SortKey::default(),
            page: 1,
            page_size: page_size.max(1),
            page_size_options: Vec::new(),
            selection: SelectionSet::new(),
        }
    }

    /// Restrict page size changes to a list of options.
    ///
    /// A current size missing from the list falls back to the first option.
    pub fn with_page_size_options(mut self, options: Vec<usize>) -> Self {
        let options: Vec<usize> = options.into_iter().filter(|&n| n > 0).collect();
        if let Some(&first) = options.first() {
            if !options.contains(&self.page_size) {
                tracing::warn!(
                    "Page size {} is not among the options {:?}, using {}",
                    self.page_size,
                    options,
                    first
                );
                self.page_size = first;
            }
        }
        self.page_size_options = options;
        self
    }

    /// Начальная сортировка экрана
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    // ============================================================================
    // State accessors
    // ============================================================================

    pub fn store(&self) -> &RecordStore<T> {
        &self.store
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_size_options(&self) -> &[usize] {
        &self.page_size_options
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Количество активных фильтров (бейдж на кнопке)
    pub fn active_filter_count(&self) -> usize {
        self.filters.active_count()
    }

    // ============================================================================
    // Query state (каждое изменение возвращает на первую страницу)
    // ============================================================================

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
        self.page = 1;
    }

    pub fn set_filters(&mut self, filters: FilterCriteria) {
        self.filters = filters;
        self.page = 1;
    }

    pub fn toggle_department_filter(&mut self, department: &str) {
        self.filters.toggle_department(department);
        self.page = 1;
    }

    pub fn toggle_status_filter(&mut self, status: &str) {
        self.filters.toggle_status(status);
        self.page = 1;
    }

    pub fn set_salary_range(&mut self, range: AmountRange) {
        self.filters.amount = range;
        self.page = 1;
    }

    pub fn clear_filters(&mut self) {
        self.filters = FilterCriteria::default();
        self.page = 1;
    }

    // ============================================================================
    // Pagination
    // ============================================================================

    pub fn set_page(&mut self, page: usize) {
        self.page = clamp_page(page, self.total_pages());
    }

    /// Returns `false` and keeps the current size when `page_size` is not
    /// one of the configured options.
    pub fn set_page_size(&mut self, page_size: usize) -> bool {
        if !self.page_size_options.is_empty() && !self.page_size_options.contains(&page_size) {
            tracing::warn!("Rejected page size {} (options {:?})", page_size, self.page_size_options);
            return false;
        }
        self.page_size = page_size.max(1);
        self.page = clamp_page(self.page, self.total_pages());
        true
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.view().len(), self.page_size)
    }

    pub fn view(&self) -> QueryView<'_, T> {
        query(&self.store, &self.search, &self.filters, self.sort)
    }

    pub fn current_page(&self) -> Page<&T> {
        let view = self.view();
        paginate(view.items(), self.page, self.page_size)
    }

    pub fn page_ids(&self) -> Vec<RecordId> {
        self.current_page()
            .items
            .iter()
            .map(|r| r.id().clone())
            .collect()
    }

    // ============================================================================
    // Selection scoped to the visible page
    // ============================================================================

    pub fn toggle_select(&mut self, id: &RecordId) {
        self.selection.toggle(id);
    }

    /// Чекбокс в заголовке: выбрать/снять все строки текущей страницы
    pub fn toggle_select_page(&mut self) {
        let ids = self.page_ids();
        self.selection.toggle_all(&ids);
    }

    pub fn page_header_state(&self) -> CheckboxState {
        self.selection.header_state(&self.page_ids())
    }

    // ============================================================================
    // Mutations
    // ============================================================================

    pub fn update(&mut self, id: &RecordId, patch: &FieldValues) -> EngineResult<&T> {
        self.store.update(id, patch)
    }

    /// Удалить записи и убрать их из выбора
    pub fn delete(&mut self, ids: &[RecordId]) -> EngineResult<usize> {
        let removed = self.store.remove(ids)?;
        self.selection.forget(ids);
        self.page = clamp_page(self.page, self.total_pages());

        let count = removed.len();
        for record in removed.into_iter().map(Into::<Record>::into) {
            tracing::info!("Deleted {} {} ({})", record.kind(), record.id(), record.display_name());
        }
        Ok(count)
    }

    pub fn delete_selected(&mut self) -> EngineResult<usize> {
        let ids = self.selection.ids();
        if ids.is_empty() {
            return Ok(0);
        }
        self.delete(&ids)
    }

    /// Submit the form and store the record (add or replace).
    ///
    /// The draft is marked submitted only after the store accepted the record;
    /// on any error it stays open with its changes.
    pub fn save_form(&mut self, draft: &mut FormDraft<T>) -> EngineResult<RecordId> {
        let record = draft.submit()?;
        let action = match draft.mode() {
            FormMode::Add => {
                self.store.add(record.clone())?;
                "Added"
            }
            FormMode::Edit(_) => {
                self.store.replace(record.clone())?;
                "Saved"
            }
        };
        draft.mark_submitted(&record);

        let record: Record = record.into();
        tracing::info!("{} {} {} ({})", action, record.kind(), record.id(), record.display_name());
        Ok(record.id().clone())
    }
}
