//! Table row selection
//!
//! Selection is independent of pagination and filters: an id stays selected
//! until it is deselected, the selection is cleared or the record is deleted.

use std::collections::BTreeSet;

use contracts::domain::common::RecordId;

/// Состояние чекбокса в заголовке таблицы
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckboxState {
    Unchecked,
    Checked,
    Indeterminate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    selected: BTreeSet<RecordId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, id: &RecordId) {
        if !self.selected.remove(id) {
            self.selected.insert(id.clone());
        }
    }

    pub fn select(&mut self, id: &RecordId) {
        self.selected.insert(id.clone());
    }

    pub fn deselect(&mut self, id: &RecordId) {
        self.selected.remove(id);
    }

    pub fn select_all<'a>(&mut self, ids: impl IntoIterator<Item = &'a RecordId>) {
        self.selected.extend(ids.into_iter().cloned());
    }

    pub fn deselect_all<'a>(&mut self, ids: impl IntoIterator<Item = &'a RecordId>) {
        for id in ids {
            self.selected.remove(id);
        }
    }

    /// Чекбокс в заголовке: если выбраны все, снять, иначе выбрать все
    pub fn toggle_all(&mut self, ids: &[RecordId]) {
        if self.header_state(ids) == CheckboxState::Checked {
            self.deselect_all(ids);
        } else {
            self.select_all(ids);
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.selected.contains(id)
    }

    pub fn count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn ids(&self) -> Vec<RecordId> {
        self.selected.iter().cloned().collect()
    }

    /// Убрать удалённые записи из выбора
    pub fn forget<'a>(&mut self, ids: impl IntoIterator<Item = &'a RecordId>) {
        self.deselect_all(ids);
    }

    pub fn header_state(&self, ids: &[RecordId]) -> CheckboxState {
        if ids.is_empty() {
            return CheckboxState::Unchecked;
        }

        let selected_count = ids.iter().filter(|id| self.selected.contains(*id)).count();

        if selected_count == 0 {
            CheckboxState::Unchecked
        } else if selected_count == ids.len() {
            CheckboxState::Checked
        } else {
            CheckboxState::Indeterminate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> Vec<RecordId> {
        values.iter().map(|v| RecordId::from(*v)).collect()
    }

    #[test]
    fn test_toggle() {
        let mut selection = SelectionSet::new();
        let id = RecordId::from("7");
        selection.toggle(&id);
        assert!(selection.is_selected(&id));
        selection.toggle(&id);
        assert!(!selection.is_selected(&id));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_select_all_only_touches_given_ids() {
        let mut selection = SelectionSet::new();
        selection.select(&RecordId::from("99"));
        selection.select_all(&ids(&["1", "2"]));
        assert_eq!(selection.count(), 3);

        selection.deselect_all(&ids(&["1", "2"]));
        assert_eq!(selection.ids(), ids(&["99"]));
    }

    #[test]
    fn test_header_state() {
        let page = ids(&["1", "2", "3"]);
        let mut selection = SelectionSet::new();
        assert_eq!(selection.header_state(&page), CheckboxState::Unchecked);
        selection.select(&page[0]);
        assert_eq!(selection.header_state(&page), CheckboxState::Indeterminate);
        selection.select_all(&page);
        assert_eq!(selection.header_state(&page), CheckboxState::Checked);
        assert_eq!(selection.header_state(&[]), CheckboxState::Unchecked);
    }

    #[test]
    fn test_toggle_all() {
        let page = ids(&["1", "2"]);
        let mut selection = SelectionSet::new();
        selection.select(&page[0]);
        selection.toggle_all(&page);
        assert_eq!(selection.count(), 2);
        selection.toggle_all(&page);
        assert_eq!(selection.count(), 0);
    }

    #[test]
    fn test_forget() {
        let mut selection = SelectionSet::new();
        selection.select_all(&ids(&["1", "2", "3"]));
        selection.forget(&ids(&["2"]));
        assert_eq!(selection.ids(), ids(&["1", "3"]));
    }
}
