pub mod list;
pub mod metadata;
pub mod money;
