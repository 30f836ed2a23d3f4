//! Shared helpers for integration tests.

use std::collections::HashSet;
use std::sync::Mutex;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Every variable `AppConfig::load` reads.
pub const CONFIG_VARS: [&str; 5] = [
    "GEOSEARCH_CONFIG",
    "HOST",
    "PORT",
    "GEOSEARCH_SERVICE_URL",
    "GEOSEARCH_TIMEOUT_SECS",
];

/// Runs `f` with every config variable unset except `overrides`.
///
/// Holds a process-wide lock for the duration, since tests share one
/// environment and run in parallel. Variables are restored on unwind.
pub fn with_config_env<F, R>(overrides: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::new(overrides);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(overrides: &[(&str, &str)]) -> Self {
        let keys: HashSet<&str> = CONFIG_VARS
            .iter()
            .copied()
            .chain(overrides.iter().map(|(k, _)| *k))
            .collect();
        let snapshot = keys
            .iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect();

        for key in CONFIG_VARS {
            std::env::remove_var(key);
        }
        for (key, value) in overrides {
            std::env::set_var(key, value);
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (key, value) in self.snapshot.drain(..) {
            match value {
                Some(v) => std::env::set_var(&key, v),
                None => std::env::remove_var(&key),
            }
        }
    }
}
