use serde::{Deserialize, Serialize};

/// Одна страница списка (номер страницы с 1)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_number: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.page_number > 1
    }

    pub fn has_next(&self) -> bool {
        self.page_number < self.total_pages
    }

    /// Подпись под таблицей: "6-10 of 12"
    pub fn range_label(&self) -> String {
        if self.items.is_empty() {
            return format!("0 of {}", self.total_count);
        }
        let first = self.page_number.saturating_sub(1) * self.page_size + 1;
        let last = first + self.items.len() - 1;
        format!("{}-{} of {}", first, last, self.total_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(items: Vec<u32>, page_number: usize) -> Page<u32> {
        Page {
            items,
            page_number,
            page_size: 5,
            total_pages: 3,
            total_count: 12,
        }
    }

    #[test]
    fn test_range_label() {
        assert_eq!(page(vec![1, 2, 3, 4, 5], 1).range_label(), "1-5 of 12");
        assert_eq!(page(vec![11, 12], 3).range_label(), "11-12 of 12");
        assert_eq!(page(vec![], 4).range_label(), "0 of 12");
    }

    #[test]
    fn test_range_label_page_zero() {
        assert_eq!(page(vec![1, 2], 0).range_label(), "1-2 of 12");
    }

    #[test]
    fn test_navigation_flags() {
        let first = page(vec![1], 1);
        assert!(!first.has_previous());
        assert!(first.has_next());
        let last = page(vec![1], 3);
        assert!(last.has_previous());
        assert!(!last.has_next());
    }
}
