//! # Front-end configuration: `admin.toml`
//!
//! Describes where the REST API lives, how long search input is debounced, which
//! page sizes the list views offer and how sign-in works. The host process loads
//! it (file + environment) and hands it to the browser through a server
//! function; the browser falls back to [`AdminConfig::default`] when that fails.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:5000/api"
//!
//! [search]
//! debounce_ms = 500
//!
//! [paging]
//! default_page_size = 10
//! page_sizes = [10, 20, 50, 100]
//!
//! [auth]
//! provider = "aad"
//! dev_mode = false
//! ```
//!
//! Every field has a default, so a missing or partial file is valid.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::paging::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid admin.toml: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid admin config: {0}")]
    Invalid(String),
}

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub paging: PagingConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every REST path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Compile-time override via `API_BASE_URL`, else a local dev server.
fn default_base_url() -> String {
    option_env!("API_BASE_URL")
        .unwrap_or("http://localhost:5000/api")
        .to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Quiet period after the last keystroke before searching.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_debounce_ms() -> u64 {
    500
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PagingConfig {
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,
    #[serde(default = "default_page_sizes")]
    pub page_sizes: Vec<u32>,
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_page_sizes() -> Vec<u32> {
    PAGE_SIZE_OPTIONS.to_vec()
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            page_sizes: default_page_sizes(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Identity provider segment of `/.auth/login/{provider}`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Use a fixed development principal instead of calling `/.auth/me`.
    #[serde(default)]
    pub dev_mode: bool,
}

fn default_provider() -> String {
    "aad".to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            dev_mode: false,
        }
    }
}

impl AdminConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "admin.toml"
    }

    /// Parse and validate from a TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("api.base_url must not be empty".into()));
        }
        if self.paging.page_sizes.iter().any(|size| *size == 0) {
            return Err(ConfigError::Invalid("paging.page_sizes must be positive".into()));
        }
        if self.paging.default_page_size == 0 {
            return Err(ConfigError::Invalid(
                "paging.default_page_size must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Page sizes for the page-size dropdown, always including the default.
    pub fn page_size_options(&self) -> Vec<u32> {
        let mut sizes = self.paging.page_sizes.clone();
        if !sizes.contains(&self.paging.default_page_size) {
            sizes.push(self.paging.default_page_size);
        }
        sizes.sort_unstable();
        sizes.dedup();
        sizes
    }
}
