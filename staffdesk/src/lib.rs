pub mod app;
pub mod config;
pub mod dashboard;
pub mod services;

use anyhow::Result;

pub use app::StaffDesk;

pub async fn build() -> Result<StaffDesk> {
    let cfg = config::config()?;
    StaffDesk::build(cfg).await
}
