//! Process configuration (env > `.env` file > built-in defaults).

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{MedAssistError, Result};

pub const API_KEY_ENV: &str = "CONTEXTUAL_API_KEY";
pub const BASE_URL_ENV: &str = "CONTEXTUAL_BASE_URL";
pub const AGENT_ID_ENV: &str = "AGENT_ID";
pub const DOCS_DIR_ENV: &str = "MEDASSIST_DOCS_DIR";

pub const DEFAULT_BASE_URL: &str = "https://api.contextual.ai/v1";
pub const DEFAULT_DOCS_DIR: &str = "healthcare_docs";
/// Agent created during the hack-night setup; used when no id is given.
pub const FALLBACK_AGENT_ID: &str = "fd173c56-7f3b-4a1c-ade1-39b9211dd675";

pub const DEFAULT_MAX_WAIT: Duration = Duration::from_secs(300);
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Configuration built once at startup and passed by reference.
#[derive(Clone)]
pub struct MedAssistConfig {
    api_key: String,
    base_url: String,
    agent_id: Option<String>,
    docs_dir: PathBuf,
}

impl fmt::Debug for MedAssistConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MedAssistConfig")
            .field("api_key", &"..")
            .field("base_url", &self.base_url)
            .field("agent_id", &self.agent_id)
            .field("docs_dir", &self.docs_dir)
            .finish()
    }
}

impl MedAssistConfig {
    /// Create a config with an explicit API key and default everything else.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            agent_id: None,
            docs_dir: PathBuf::from(DEFAULT_DOCS_DIR),
        }
    }

    /// Load from environment variables, reading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup. Blank values count as unset.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = get(API_KEY_ENV).ok_or_else(missing_api_key)?;
        let mut config = Self::new(api_key);

        if let Some(url) = get(BASE_URL_ENV) {
            config = config.with_base_url(url);
        }
        if let Some(agent_id) = get(AGENT_ID_ENV) {
            config = config.with_agent_id(agent_id);
        }
        if let Some(dir) = get(DOCS_DIR_ENV) {
            config = config.with_docs_dir(dir);
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_agent_id(mut self, agent_id: impl Into<String>) -> Self {
        self.agent_id = Some(agent_id.into());
        self
    }

    pub fn with_docs_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.docs_dir = dir.into();
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The configured agent id, if any.
    pub fn agent_id(&self) -> Option<&str> {
        self.agent_id.as_deref()
    }

    /// The configured agent id, falling back to the hack-night agent.
    pub fn agent_id_or_fallback(&self) -> &str {
        self.agent_id.as_deref().unwrap_or(FALLBACK_AGENT_ID)
    }

    pub fn docs_dir(&self) -> &PathBuf {
        &self.docs_dir
    }
}

fn missing_api_key() -> MedAssistError {
    MedAssistError::Configuration(format!(
        "Set {API_KEY_ENV} in your .env file\n  \
         1. Go to https://app.contextual.ai\n  \
         2. Sign up for a free account\n  \
         3. Go to API Keys -> Create API Key\n  \
         4. Copy .env.example to .env and paste your key"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn missing_api_key_is_a_configuration_error_with_steps() {
        let env = vars(&[]);
        let err = MedAssistConfig::from_vars(|k| env.get(k).cloned()).unwrap_err();
        let text = err.to_string();
        assert!(matches!(err, MedAssistError::Configuration(_)));
        assert!(text.contains(API_KEY_ENV), "unexpected error: {text}");
        assert!(text.contains("Create API Key"), "unexpected error: {text}");
    }

    #[test]
    fn blank_api_key_counts_as_missing() {
        let env = vars(&[(API_KEY_ENV, "   ")]);
        assert!(MedAssistConfig::from_vars(|k| env.get(k).cloned()).is_err());
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let env = vars(&[(API_KEY_ENV, "key-123")]);
        let config = MedAssistConfig::from_vars(|k| env.get(k).cloned()).unwrap();
        assert_eq!(config.api_key(), "key-123");
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.agent_id(), None);
        assert_eq!(config.agent_id_or_fallback(), FALLBACK_AGENT_ID);
        assert_eq!(config.docs_dir(), &PathBuf::from(DEFAULT_DOCS_DIR));
    }

    #[test]
    fn overrides_are_read_and_trailing_slash_trimmed() {
        let env = vars(&[
            (API_KEY_ENV, "key-123"),
            (BASE_URL_ENV, "http://localhost:9000/v1/"),
            (AGENT_ID_ENV, "agent-7"),
            (DOCS_DIR_ENV, "/tmp/pdfs"),
        ]);
        let config = MedAssistConfig::from_vars(|k| env.get(k).cloned()).unwrap();
        assert_eq!(config.base_url(), "http://localhost:9000/v1");
        assert_eq!(config.agent_id_or_fallback(), "agent-7");
        assert_eq!(config.docs_dir(), &PathBuf::from("/tmp/pdfs"));
    }

    #[test]
    fn debug_output_hides_api_key() {
        let config = MedAssistConfig::new("super-secret");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"));
    }
}
