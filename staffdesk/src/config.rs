use anyhow::{anyhow, Result};
use staff_auth::DEFAULT_SESSION_KEY;
use staff_core::StaffConfig;

/// `STAFFDESK__SESSION__STORAGE=file` sets `session.storage`.
pub const ENV_PREFIX: &str = "STAFFDESK__";

/// Defaults overlaid with the process environment.
pub fn config() -> Result<StaffConfig> {
    config_from(std::env::vars())
}

/// Same as [`config`] but reading from an explicit variable list.
pub fn config_from<I>(vars: I) -> Result<StaffConfig>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut cfg = StaffConfig::new();
    cfg.load_env(ENV_PREFIX, vars);

    // Session Configuration
    configure_session(&mut cfg)?;

    // Auth Configuration
    configure_auth(&mut cfg)?;

    // Store Configuration
    cfg.set_default("store.seed_demo", "true");
    if cfg.snapshot().get_bool("store.seed_demo").is_none() {
        return Err(anyhow!("store.seed_demo must be true or false"));
    }

    // Demo runner credentials
    cfg.set_default("demo.username", "admin");
    cfg.set_default("demo.password", "admin123");

    Ok(cfg)
}

fn configure_session(cfg: &mut StaffConfig) -> Result<()> {
    cfg.set_default("session.key", DEFAULT_SESSION_KEY);
    cfg.set_default("session.storage", "memory");
    cfg.set_default("session.dir", ".staffdesk");

    match cfg.get("session.storage") {
        Some("memory") | Some("file") => Ok(()),
        other => Err(anyhow!(
            "Unknown session.storage {:?}; expected memory or file",
            other.unwrap_or_default()
        )),
    }
}

fn configure_auth(cfg: &mut StaffConfig) -> Result<()> {
    cfg.set_default("auth.hash_cost", "10");

    match cfg.snapshot().get_u32("auth.hash_cost") {
        Some(cost) if (4..=31).contains(&cost) => Ok(()),
        _ => Err(anyhow!("auth.hash_cost must be a number between 4 and 31")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_apply_without_env() {
        let snap = config_from(Vec::new()).unwrap().snapshot();
        assert_eq!(snap.get("session.key"), Some("employee_system_user"));
        assert_eq!(snap.get("session.storage"), Some("memory"));
        assert_eq!(snap.get_u32("auth.hash_cost"), Some(10));
        assert_eq!(snap.get_bool("store.seed_demo"), Some(true));
        assert_eq!(snap.get("demo.username"), Some("admin"));
    }

    #[test]
    fn env_overrides_defaults() {
        let snap = config_from(vars(&[
            ("STAFFDESK__SESSION__STORAGE", "file"),
            ("STAFFDESK__SESSION__DIR", "/tmp/desk"),
            ("STAFFDESK__STORE__SEED_DEMO", "false"),
            ("HOME", "/root"),
        ]))
        .unwrap()
        .snapshot();

        assert_eq!(snap.get("session.storage"), Some("file"));
        assert_eq!(snap.get("session.dir"), Some("/tmp/desk"));
        assert_eq!(snap.get_bool("store.seed_demo"), Some(false));
        assert!(snap.get("home").is_none());
    }

    #[test]
    fn rejects_unknown_storage_backend() {
        let err = config_from(vars(&[("STAFFDESK__SESSION__STORAGE", "redis")])).unwrap_err();
        assert!(err.to_string().contains("redis"));
    }

    #[test]
    fn rejects_out_of_range_hash_cost() {
        assert!(config_from(vars(&[("STAFFDESK__AUTH__HASH_COST", "2")])).is_err());
        assert!(config_from(vars(&[("STAFFDESK__AUTH__HASH_COST", "ten")])).is_err());
    }
}
