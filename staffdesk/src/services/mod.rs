use std::sync::Arc;

use staff_core::{RecordService, StaffConfigSnapshot};

pub mod adapters;
pub mod employees;

use adapters::memory_adapter::MemoryAdapter;
use employees::{CreateEmployeeData, Employee, EmployeePatch, EmployeesService};

/// The employee store as the dashboard sees it.
pub type EmployeeStore = Arc<dyn RecordService<Employee, CreateEmployeeData, EmployeePatch>>;

/// Build the employee store from configuration.
pub fn configure(config: &StaffConfigSnapshot) -> EmployeeStore {
    let seed = config.get_bool("store.seed_demo").unwrap_or(true);
    let records = if seed {
        employees::employees_shared::demo_employees()
    } else {
        Vec::new()
    };

    let adapter = MemoryAdapter::with_records(records)
        .with_capabilities(employees::employees_shared::crud_capabilities());

    Arc::new(EmployeesService::new(adapter))
}
