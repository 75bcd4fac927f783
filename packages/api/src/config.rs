//! # Client configuration (`todoboard.toml`)
//!
//! The only thing the client needs to know about its environment is where the
//! todo service lives. [`ClientConfig`] can be parsed from TOML (for native
//! tooling and tests) and [`ClientConfig::load`] applies a compile-time override,
//! since a WASM bundle has no process environment to read at runtime.
//!
//! ```toml
//! [api]
//! base_url = "http://todo.reworkstaging.name.ng"
//! ```
//!
//! A missing or empty file is equivalent to [`ClientConfig::default`].

use serde::{Deserialize, Serialize};

/// Top-level client configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

/// Remote service settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Scheme and host of the service, without the `/v1` prefix.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://todo.reworkstaging.name.ng".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ClientConfig {
    /// Create a config pointing at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
            },
        }
    }

    /// Default config, with the base URL replaced by `TODOBOARD_API_URL` if it was
    /// set when the crate was compiled.
    pub fn load() -> Self {
        match option_env!("TODOBOARD_API_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "todoboard.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api.base_url, "http://todo.reworkstaging.name.ng");
    }

    #[test]
    fn test_base_url_from_toml() {
        let config = ClientConfig::from_toml("[api]\nbase_url = \"http://localhost:3000\"\n").unwrap();
        assert_eq!(config.api.base_url, "http://localhost:3000");

        let text = config.to_toml().unwrap();
        assert!(text.contains("http://localhost:3000"));
    }
}
