use std::collections::BTreeMap;

use serde::Serialize;

use crate::services::employees::{Department, Employee, EmployeeStatus};

/// Summary counters, always derived from the dashboard's local rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub by_department: BTreeMap<Department, usize>,
}

impl DashboardStats {
    pub fn from_employees(employees: &[Employee]) -> Self {
        let mut stats = DashboardStats {
            total: employees.len(),
            ..Default::default()
        };
        for e in employees {
            match e.status {
                EmployeeStatus::Active => stats.active += 1,
                EmployeeStatus::Inactive => stats.inactive += 1,
            }
            *stats.by_department.entry(e.department).or_default() += 1;
        }
        stats
    }
}
