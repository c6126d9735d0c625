//! Универсальные типы для списков: поиск, фильтры, сортировка, страницы

pub mod page;
pub mod query;
pub mod traits;

pub use page::Page;
pub use query::{AmountRange, FilterCriteria, SortKey};
pub use traits::{Filterable, ListRecord, Searchable, Sortable};
