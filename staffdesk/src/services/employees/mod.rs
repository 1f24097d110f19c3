pub mod employees_model;
pub mod employees_schema;
pub mod employees_service;
pub mod employees_shared;

pub use employees_model::{
    CreateEmployeeData, Department, Employee, EmployeeForm, EmployeePatch, EmployeeStatus, FormField,
};
pub use employees_schema::validate_form;
pub use employees_service::EmployeesService;
