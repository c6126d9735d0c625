pub mod aggregate;

pub use aggregate::{PaymentStatus, PayrollEntry, PayrollSummary, PAYROLL_FIELDS};
