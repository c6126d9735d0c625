pub mod session;

pub use session::{CloseRequest, FormDraft, FormMode, FormStatus};
