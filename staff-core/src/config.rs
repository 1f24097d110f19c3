//! # StaffDesk configuration
//!
//! A minimal string key/value store, set once while the app is being
//! built and read through typed snapshot getters afterwards.
//!
//! ```rust
//! use staff_core::StaffConfig;
//!
//! let mut cfg = StaffConfig::new();
//! cfg.set("session.key", "employee_system_user");
//! cfg.set("store.seed_demo", "false");
//!
//! let snap = cfg.snapshot();
//! assert_eq!(snap.get("session.key"), Some("employee_system_user"));
//! assert_eq!(snap.get_bool("store.seed_demo"), Some(false));
//! ```
//!
//! ## Environment overrides
//! `load_env` maps `PREFIX__SECTION__KEY=value` to `section.key`:
//!
//! ```bash
//! export STAFFDESK__SESSION__STORAGE=file
//! ```

use std::collections::HashMap;

#[derive(Debug, Default, Clone)]
pub struct StaffConfig {
    values: HashMap<String, String>,
}

impl StaffConfig {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    pub fn set<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.values.insert(key.into(), value.into());
    }

    /// Set a key only if nothing has set it yet.
    pub fn set_default<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.values.entry(key.into()).or_insert_with(|| value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|s| s.as_str())
    }

    pub fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Apply every `(name, value)` pair whose name starts with `prefix`.
    ///
    /// `STAFFDESK__SESSION__DIR` with prefix `STAFFDESK__` becomes `session.dir`.
    pub fn load_env<I>(&mut self, prefix: &str, vars: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in vars {
            if let Some(stripped) = key.strip_prefix(prefix) {
                let normalized = stripped.to_lowercase().replace("__", ".");
                if !normalized.is_empty() {
                    self.set(normalized, value);
                }
            }
        }
    }

    pub fn snapshot(&self) -> StaffConfigSnapshot {
        StaffConfigSnapshot::new(self.values.clone())
    }
}

#[derive(Debug, Clone, Default)]
pub struct StaffConfigSnapshot {
    map: HashMap<String, String>,
}

impl StaffConfigSnapshot {
    pub(crate) fn new(map: HashMap<String, String>) -> Self {
        Self { map }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(|s| s.as_str())
    }

    pub fn get_string(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    pub fn get_u32(&self, key: &str) -> Option<u32> {
        self.get(key).and_then(|v| v.trim().parse::<u32>().ok())
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(|v| v.trim().parse::<bool>().ok())
    }
}
