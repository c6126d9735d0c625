//! Shared data model for the HR admin record engine.
//!
//! `domain` holds the record aggregates (Employee, Payroll) and their identity,
//! `shared` holds the field metadata + validator and the list query DTOs.

pub mod domain;
pub mod shared;
