use anyhow::Result;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let desk = staffdesk::build().await?;

    if !desk.session.is_authenticated().await {
        let username = desk.config.get("demo.username").unwrap_or_default();
        let password = desk.config.get("demo.password").unwrap_or_default();
        if !desk.session.login(username, password).await? {
            warn!(%username, "demo login rejected");
            return Ok(());
        }
    }

    let mut dashboard = desk.dashboard().await?;
    let stats = dashboard.stats();
    info!(
        total = stats.total,
        active = stats.active,
        inactive = stats.inactive,
        "dashboard ready"
    );

    for notice in dashboard.take_notices() {
        warn!(title = %notice.title, message = %notice.message, "notice");
    }

    for employee in dashboard.employees() {
        println!(
            "{:<20} {:<28} {:<16} {:>10.2} {}",
            employee.full_name(),
            employee.email,
            employee.department.label(),
            employee.salary,
            employee.status
        );
    }

    Ok(())
}
