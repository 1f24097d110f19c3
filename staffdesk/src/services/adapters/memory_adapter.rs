use anyhow::Result;
use staff_core::{bail_staff, ServiceCapabilities};
use tokio::sync::RwLock;

use crate::services::employees::{Employee, EmployeePatch};

/// Employee records held in insertion order.
///
/// Each call holds the lock for its whole duration; nothing spans calls.
pub struct MemoryAdapter {
    records: RwLock<Vec<Employee>>,
    pub capabilities: ServiceCapabilities,
}

impl Default for MemoryAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryAdapter {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn with_records(records: Vec<Employee>) -> Self {
        Self {
            records: RwLock::new(records),
            capabilities: ServiceCapabilities::standard_crud(),
        }
    }

    pub fn with_capabilities(mut self, capabilities: ServiceCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    pub async fn contains(&self, id: &str) -> bool {
        self.records.read().await.iter().any(|e| e.id == id)
    }

    pub async fn _find_all(&self) -> Result<Vec<Employee>> {
        Ok(self.records.read().await.clone())
    }

    pub async fn _get(&self, id: &str) -> Result<Option<Employee>> {
        Ok(self.records.read().await.iter().find(|e| e.id == id).cloned())
    }

    pub async fn _create(&self, record: Employee) -> Result<Employee> {
        let mut records = self.records.write().await;
        if records.iter().any(|e| e.id == record.id) {
            bail_staff!(conflict, "Employee id already exists: {}", record.id);
        }
        records.push(record.clone());
        Ok(record)
    }

    pub async fn _update(&self, id: &str, patch: EmployeePatch) -> Result<Option<Employee>> {
        let mut records = self.records.write().await;
        let Some(existing) = records.iter_mut().find(|e| e.id == id) else {
            return Ok(None);
        };
        existing.apply(patch);
        Ok(Some(existing.clone()))
    }

    pub async fn _remove(&self, id: &str) -> Result<bool> {
        let mut records = self.records.write().await;
        let Some(index) = records.iter().position(|e| e.id == id) else {
            return Ok(false);
        };
        records.remove(index);
        Ok(true)
    }
}

staff_core::staff_adapter!(
    MemoryAdapter,
    crate::services::employees::Employee,
    crate::services::employees::Employee,
    crate::services::employees::EmployeePatch
);
