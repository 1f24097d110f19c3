use chrono::NaiveDate;
use staff_core::{ServiceCapabilities, ServiceMethodKind};

use super::employees_model::{Department, Employee, EmployeeStatus};

pub fn crud_capabilities() -> ServiceCapabilities {
    ServiceCapabilities::from_methods(vec![
        ServiceMethodKind::Find,
        ServiceMethodKind::Get,
        ServiceMethodKind::Create,
        ServiceMethodKind::Update,
        ServiceMethodKind::Remove,
    ])
}

fn seed(
    id: &str,
    (first_name, last_name, phone): (&str, &str, &str),
    department: Department,
    position: &str,
    salary: f64,
    (y, m, d): (i32, u32, u32),
    status: EmployeeStatus,
) -> Option<Employee> {
    let email = format!("{}.{}@company.com", first_name.to_lowercase(), last_name.to_lowercase());
    Some(Employee {
        id: id.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email,
        phone: phone.to_string(),
        department,
        position: position.to_string(),
        salary,
        hire_date: NaiveDate::from_ymd_opt(y, m, d)?,
        status,
    })
}

/// Records the store starts with when `store.seed_demo` is on.
pub fn demo_employees() -> Vec<Employee> {
    [
        seed(
            "1",
            ("John", "Doe", "+1-555-0123"),
            Department::Engineering,
            "Senior Developer",
            95000.0,
            (2022, 1, 15),
            EmployeeStatus::Active,
        ),
        seed(
            "2",
            ("Jane", "Smith", "+1-555-0124"),
            Department::Marketing,
            "Marketing Manager",
            75000.0,
            (2021, 8, 22),
            EmployeeStatus::Active,
        ),
        seed(
            "3",
            ("Mike", "Johnson", "+1-555-0125"),
            Department::HR,
            "HR Specialist",
            65000.0,
            (2023, 3, 10),
            EmployeeStatus::Inactive,
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}
