use anyhow::Result;
use async_trait::async_trait;
use staff_core::{RecordService, ServiceCapabilities};
use tracing::debug;
use uuid::Uuid;

use crate::services::adapters::memory_adapter::MemoryAdapter;

use super::employees_model::{CreateEmployeeData, Employee, EmployeePatch};

pub struct EmployeesService {
    pub adapter: MemoryAdapter,
}

impl EmployeesService {
    pub fn new(adapter: MemoryAdapter) -> Self {
        Self { adapter }
    }

    async fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().simple().to_string();
            if !self.adapter.contains(&id).await {
                return id;
            }
        }
    }
}

#[async_trait]
impl RecordService<Employee, CreateEmployeeData, EmployeePatch> for EmployeesService {
    fn capabilities(&self) -> ServiceCapabilities {
        self.adapter.capabilities.clone()
    }

    async fn find_all(&self) -> Result<Vec<Employee>> {
        let all = self.adapter._find_all().await?;
        debug!(count = all.len(), "fetched all employees");
        Ok(all)
    }

    async fn get(&self, id: &str) -> Result<Option<Employee>> {
        debug!(%id, "fetching employee");
        self.adapter._get(id).await
    }

    async fn create(&self, data: CreateEmployeeData) -> Result<Employee> {
        let id = self.fresh_id().await;
        debug!(%id, email = %data.email, "creating employee");
        self.adapter._create(Employee::from_create(id, data)).await
    }

    async fn update(&self, id: &str, patch: EmployeePatch) -> Result<Option<Employee>> {
        let updated = self.adapter._update(id, patch).await?;
        debug!(%id, found = updated.is_some(), "updated employee");
        Ok(updated)
    }

    async fn remove(&self, id: &str) -> Result<bool> {
        let removed = self.adapter._remove(id).await?;
        debug!(%id, removed, "deleted employee");
        Ok(removed)
    }
}
