pub mod pagination;
pub mod query;
pub mod selection;
pub mod table;

pub use pagination::paginate;
pub use query::{query, QueryView};
pub use selection::{CheckboxState, SelectionSet};
pub use table::RecordTable;
