pub mod service;

pub use service::PayrollTable;
