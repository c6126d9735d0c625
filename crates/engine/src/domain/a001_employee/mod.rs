pub mod service;

pub use service::EmployeeTable;
