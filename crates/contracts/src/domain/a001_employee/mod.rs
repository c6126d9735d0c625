pub mod aggregate;

pub use aggregate::{
    generate_display_name, CivilStatus, Employee, EmployeeSummary, Gender, EMPLOYEE_FIELDS,
};
