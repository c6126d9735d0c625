//! Field metadata and validation for record forms
//!
//! ## Usage
//!
//! ```rust
//! use contracts::shared::metadata::{validate, FieldFormat, ValidationRules};
//!
//! let check = validate(&ValidationRules::format(FieldFormat::SssNumber), "34-1234567-8");
//! assert!(check.valid);
//! ```

mod types;
mod validation;

pub use types::{find_field, FieldMetadata};
pub use validation::{
    validate, validate_format, FieldCheck, FieldFormat, ValidationRules, REQUIRED_MESSAGE,
};
