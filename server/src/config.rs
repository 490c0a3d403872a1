//! Server configuration parsed from environment variables.
//!
//! `.env` is loaded by `main` through `dotenvy` before this runs, so local
//! development and deployments read the same variable names.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CMS_REQUEST_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_CMS_CONNECT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_CHAT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_ASSETS_DIR: &str = "public";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required env var {0}")]
    Missing(&'static str),

    #[error("invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmsConfig {
    /// Origin of the CMS without a trailing slash, e.g. `https://cms.example.com`.
    pub base_url: String,
    pub api_token: Option<String>,
    pub timeouts: Timeouts,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub port: u16,
    pub cms: CmsConfig,
    /// `None` disables the chat widget's backend.
    pub chat: Option<ChatConfig>,
    pub assets_dir: String,
}

impl SiteConfig {
    /// Build typed config from environment variables.
    ///
    /// Required:
    /// - `CMS_BASE_URL`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `CMS_API_TOKEN`: bearer token for the CMS REST API
    /// - `CMS_REQUEST_TIMEOUT_SECS`: default 15
    /// - `CMS_CONNECT_TIMEOUT_SECS`: default 5
    /// - `CHAT_BACKEND_URL`: chat answers endpoint; chat is disabled when unset
    /// - `CHAT_TIMEOUT_SECS`: default 30
    /// - `ASSETS_DIR`: directory served at `/assets`, default `public`
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a value fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match non_empty_var("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };

        let base_url = non_empty_var("CMS_BASE_URL").ok_or(ConfigError::Missing("CMS_BASE_URL"))?;
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError::Invalid { var: "CMS_BASE_URL", value: base_url });
        }

        let cms = CmsConfig {
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_token: non_empty_var("CMS_API_TOKEN"),
            timeouts: Timeouts {
                request_secs: env_parse_u64("CMS_REQUEST_TIMEOUT_SECS", DEFAULT_CMS_REQUEST_TIMEOUT_SECS),
                connect_secs: env_parse_u64("CMS_CONNECT_TIMEOUT_SECS", DEFAULT_CMS_CONNECT_TIMEOUT_SECS),
            },
        };

        let chat = non_empty_var("CHAT_BACKEND_URL").map(|endpoint| ChatConfig {
            endpoint,
            timeout_secs: env_parse_u64("CHAT_TIMEOUT_SECS", DEFAULT_CHAT_TIMEOUT_SECS),
        });

        let assets_dir = non_empty_var("ASSETS_DIR").unwrap_or_else(|| DEFAULT_ASSETS_DIR.to_owned());

        Ok(Self { port, cms, chat, assets_dir })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}
