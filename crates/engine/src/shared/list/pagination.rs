use contracts::shared::list::Page;

/// Вычислить количество страниц
pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    total_count.div_ceil(page_size.max(1))
}

/// Slice one 1-based page out of an ordered set.
///
/// Page 0 is read as page 1 and page size 0 as 1. A page past the end comes
/// back empty with the real totals.
pub fn paginate<T: Clone>(items: &[T], page_number: usize, page_size: usize) -> Page<T> {
    let page_number = page_number.max(1);
    let page_size = page_size.max(1);
    let total_count = items.len();

    let start = (page_number - 1).saturating_mul(page_size);
    let page_items = if start >= total_count {
        Vec::new()
    } else {
        let end = (start + page_size).min(total_count);
        items[start..end].to_vec()
    };

    Page {
        items: page_items,
        page_number,
        page_size,
        total_pages: total_pages(total_count, page_size),
        total_count,
    }
}

/// Зажать номер страницы в допустимый диапазон
pub fn clamp_page(page_number: usize, total_pages: usize) -> usize {
    page_number.clamp(1, total_pages.max(1))
}
