pub mod a001_employee;
pub mod a002_payroll;
pub mod common;
pub mod record;

pub use record::Record;
