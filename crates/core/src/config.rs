//! Config file parsing for `~/.config/itunes-search/config.toml`.
//!
//! Every field has a default, so a partial file (or none at all) yields a
//! working configuration. The defaults reproduce the public Apple endpoints.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::params::{Country, Language};

pub const DEFAULT_SEARCH_URL: &str = "https://itunes.apple.com/search";
pub const DEFAULT_LOOKUP_URL: &str = "https://itunes.apple.com/lookup";
pub const DEFAULT_CHARTS_URL: &str = "https://rss.itunes.apple.com/api/v1";

/// Default number of results for a search.
pub const DEFAULT_SEARCH_LIMIT: u32 = 50;
/// Default number of entries for a chart feed.
pub const DEFAULT_CHART_LIMIT: u32 = 100;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub endpoints: EndpointConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointConfig {
    #[serde(default = "default_search_url")]
    pub search: String,
    #[serde(default = "default_lookup_url")]
    pub lookup: String,
    #[serde(default = "default_charts_url")]
    pub charts: String,
}

fn default_search_url() -> String {
    DEFAULT_SEARCH_URL.to_string()
}
fn default_lookup_url() -> String {
    DEFAULT_LOOKUP_URL.to_string()
}
fn default_charts_url() -> String {
    DEFAULT_CHARTS_URL.to_string()
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            search: default_search_url(),
            lookup: default_lookup_url(),
            charts: default_charts_url(),
        }
    }
}

impl EndpointConfig {
    /// Points all three endpoints at one host, e.g. a mock server.
    pub fn rooted_at(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            search: format!("{}/search", base),
            lookup: format!("{}/lookup", base),
            charts: format!("{}/api/v1", base),
        }
    }
}

/// Values seeded into every new request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub country: Country,
    #[serde(default = "default_search_limit")]
    pub limit: u32,
    #[serde(default = "default_chart_limit")]
    pub chart_limit: u32,
    #[serde(default)]
    pub language: Language,
}

fn default_search_limit() -> u32 {
    DEFAULT_SEARCH_LIMIT
}
fn default_chart_limit() -> u32 {
    DEFAULT_CHART_LIMIT
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            country: Country::US,
            limit: DEFAULT_SEARCH_LIMIT,
            chart_limit: DEFAULT_CHART_LIMIT,
            language: Language::English,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_user_agent() -> String {
    concat!("itunes-search/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
        }
    }
}

/// Load config from the default path (`~/.config/itunes-search/config.toml`).
/// A missing file yields defaults; an unreadable or invalid one is logged and
/// also yields defaults.
pub fn load_config() -> ClientConfig {
    load_config_at(config_path())
}

pub(crate) fn load_config_at(path: Option<PathBuf>) -> ClientConfig {
    let Some(path) = path else {
        return ClientConfig::default();
    };
    if !path.exists() {
        return ClientConfig::default();
    }
    match load_config_from(&path) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::warn!("Ignoring config at {}: {}", path.display(), e);
            ClientConfig::default()
        }
    }
}

/// Load config from an explicit path.
pub fn load_config_from(path: &Path) -> Result<ClientConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<ClientConfig, ConfigError> {
    Ok(toml::from_str::<ClientConfig>(content)?)
}

/// Return the default config file path.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut p| {
        p.push("itunes-search");
        p.push("config.toml");
        p
    })
}
