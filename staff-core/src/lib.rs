//! staff-core: framework-agnostic core for StaffDesk.

pub mod adapters;
pub mod config;
pub mod errors;
pub mod service;

pub use config::{StaffConfig, StaffConfigSnapshot};
pub use errors::{ErrorKind, StaffError, StaffResult};
pub use service::{RecordService, ServiceCapabilities, ServiceMethodKind};
