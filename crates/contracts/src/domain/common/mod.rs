//! Common types and traits for all record aggregates

pub mod aggregate_id;
pub mod aggregate_root;
pub mod entity_metadata;

// Re-exports
pub use aggregate_id::RecordId;
pub use aggregate_root::{AggregateRoot, FieldValues};
pub use entity_metadata::RecordMetadata;
