//! Tests for environment-driven configuration.

use std::sync::{Mutex, OnceLock};

use medassist::config::{
    MedAssistConfig, AGENT_ID_ENV, API_KEY_ENV, BASE_URL_ENV, DOCS_DIR_ENV, FALLBACK_AGENT_ID,
};
use medassist::error::MedAssistError;

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

const CONFIG_ENV_VARS: [&str; 4] = [API_KEY_ENV, BASE_URL_ENV, AGENT_ID_ENV, DOCS_DIR_ENV];

struct EnvGuard {
    saved: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    fn capture(keys: &[&str]) -> Self {
        let saved = keys
            .iter()
            .map(|key| ((*key).to_string(), std::env::var(key).ok()))
            .collect();
        Self { saved }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.saved {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
    }
}

fn env_lock_guard() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[test]
fn from_env_reads_key_and_agent() {
    let _lock = env_lock_guard();
    let _guard = EnvGuard::capture(&CONFIG_ENV_VARS);
    for key in CONFIG_ENV_VARS {
        std::env::remove_var(key);
    }
    std::env::set_var(API_KEY_ENV, "key-from-env");
    std::env::set_var(AGENT_ID_ENV, "agent-from-env");

    let config = MedAssistConfig::from_env().unwrap();

    assert_eq!(config.api_key(), "key-from-env");
    assert_eq!(config.agent_id(), Some("agent-from-env"));
}

#[test]
fn from_env_without_key_is_fatal() {
    let _lock = env_lock_guard();
    let _guard = EnvGuard::capture(&CONFIG_ENV_VARS);
    for key in CONFIG_ENV_VARS {
        std::env::remove_var(key);
    }

    let err = MedAssistConfig::from_env().unwrap_err();

    assert!(matches!(err, MedAssistError::Configuration(_)));
}

#[test]
fn builder_setters_override_defaults() {
    let config = MedAssistConfig::new("k")
        .with_base_url("http://localhost:8080/")
        .with_docs_dir("/srv/docs");

    assert_eq!(config.base_url(), "http://localhost:8080");
    assert_eq!(config.agent_id_or_fallback(), FALLBACK_AGENT_ID);
    assert_eq!(config.docs_dir().to_str(), Some("/srv/docs"));
}
