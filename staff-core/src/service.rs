use anyhow::Result;
use async_trait::async_trait;

use crate::errors::StaffError;

/// Standard record service methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceMethodKind {
    Find,
    Get,
    Create,
    Update,
    Remove,
}

/// Capabilities describe which methods a service wants to expose.
///
/// Callers (the dashboard, a future HTTP adapter) check this before
/// offering an action.
#[derive(Debug, Clone)]
pub struct ServiceCapabilities {
    pub allowed_methods: Vec<ServiceMethodKind>,
}

impl ServiceCapabilities {
    /// find, get, create, update, remove
    pub fn standard_crud() -> Self {
        use ServiceMethodKind::*;
        Self {
            allowed_methods: vec![Find, Get, Create, Update, Remove],
        }
    }

    /// Only `find` and `get`.
    pub fn read_only() -> Self {
        use ServiceMethodKind::*;
        Self {
            allowed_methods: vec![Find, Get],
        }
    }

    pub fn from_methods(methods: Vec<ServiceMethodKind>) -> Self {
        Self {
            allowed_methods: methods,
        }
    }

    pub fn allows(&self, method: &ServiceMethodKind) -> bool {
        self.allowed_methods.contains(method)
    }
}

/// Core record service trait.
///
/// - `find_all` → snapshot of every record
/// - `get`      → one record by id, `None` if unknown
/// - `create`   → store a new record built from `C`
/// - `update`   → merge a partial `U` onto a record, `None` if unknown
/// - `remove`   → delete by id, `false` if unknown
///
/// Unknown ids are not errors: they come back as `None` / `false`.
/// The `Err` channel is reserved for unexpected failures.
///
/// Every method defaults to a `NotImplemented` error so a service only
/// overrides what it supports.
#[async_trait]
pub trait RecordService<R, C = R, U = C>: Send + Sync
where
    R: Send + 'static,
    C: Send + 'static,
    U: Send + 'static,
{
    fn capabilities(&self) -> ServiceCapabilities {
        ServiceCapabilities::standard_crud()
    }

    async fn find_all(&self) -> Result<Vec<R>> {
        Err(StaffError::not_implemented("Method not implemented: find").into_anyhow())
    }

    async fn get(&self, _id: &str) -> Result<Option<R>> {
        Err(StaffError::not_implemented("Method not implemented: get").into_anyhow())
    }

    async fn create(&self, _data: C) -> Result<R> {
        Err(StaffError::not_implemented("Method not implemented: create").into_anyhow())
    }

    async fn update(&self, _id: &str, _patch: U) -> Result<Option<R>> {
        Err(StaffError::not_implemented("Method not implemented: update").into_anyhow())
    }

    async fn remove(&self, _id: &str) -> Result<bool> {
        Err(StaffError::not_implemented("Method not implemented: remove").into_anyhow())
    }
}
