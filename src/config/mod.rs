use crate::storage::DEFAULT_NOTES_KEY;
use thiserror::Error;

pub(crate) const DEFAULT_LOCALE: &str = "vi-VN";
pub(crate) const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unsupported log level `{0}`")]
    UnsupportedLogLevel(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotesConfig {
    pub storage_key: String,
    pub locale: String,
    pub log_level: String,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_NOTES_KEY.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl NotesConfig {
    /// Defaults overridden by `window.ENV` when the page defines it.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if !cfg!(target_arch = "wasm32") {
            return config;
        }

        let Some(env) = web_sys::window().and_then(|w| w.get("ENV")) else {
            return config;
        };
        if env.is_undefined() || !env.is_object() {
            return config;
        }

        config.apply_overrides(|name| {
            js_sys::Reflect::get(&env, &name.into())
                .ok()
                .and_then(|v| v.as_string())
        });
        config
    }

    /// Accepts both `STORAGE_KEY` and `storage_key` spellings; blank values are ignored.
    pub(crate) fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let read = |upper: &str, lower: &str| {
            lookup(upper)
                .or_else(|| lookup(lower))
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(v) = read("STORAGE_KEY", "storage_key") {
            self.storage_key = v;
        }
        if let Some(v) = read("LOCALE", "locale") {
            self.locale = v;
        }
        if let Some(v) = read("LOG_LEVEL", "log_level") {
            self.log_level = v;
        }
    }
}
