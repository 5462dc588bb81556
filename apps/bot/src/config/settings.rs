//! Environment-derived service settings.
//!
//! Environment variables must be set by the runtime environment
//! (container env files or a manually sourced .env for local dev).

use crate::error::AppError;

const DEFAULT_API_BASE: &str = "https://discord.com/api/v10";
const DEFAULT_SESSION_TTL_SECS: u64 = 900;

#[derive(Debug, Clone)]
pub struct Settings {
    /// Bind address, `BOT_HOST` (default 0.0.0.0).
    pub host: String,
    /// Bind port, `BOT_PORT` (default 3000).
    pub port: u16,
    /// Application id used in webhook follow-up URLs, `BOT_APP_ID` (required).
    pub app_id: String,
    /// Platform API base URL, `BOT_API_BASE`.
    pub api_base: String,
    /// Abandoned-session TTL in seconds, `BOT_SESSION_TTL_SECS`;
    /// 0 disables the sweeper.
    pub session_ttl_secs: u64,
}

impl Settings {
    pub fn from_env() -> Result<Self, AppError> {
        let host = std::env::var("BOT_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = match std::env::var("BOT_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| AppError::config(format!("BOT_PORT is not a valid port: {raw:?}")))?,
            Err(_) => 3000,
        };

        let app_id = std::env::var("BOT_APP_ID")
            .map_err(|_| AppError::config("BOT_APP_ID must be set".to_string()))?;

        let api_base =
            std::env::var("BOT_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        let session_ttl_secs = match std::env::var("BOT_SESSION_TTL_SECS") {
            Ok(raw) => raw.parse::<u64>().map_err(|_| {
                AppError::config(format!("BOT_SESSION_TTL_SECS is not a number: {raw:?}"))
            })?,
            Err(_) => DEFAULT_SESSION_TTL_SECS,
        };

        Ok(Self {
            host,
            port,
            app_id,
            api_base,
            session_ttl_secs,
        })
    }

    /// Fixed settings for tests; no environment access.
    pub fn for_tests() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0,
            app_id: "test-app".to_string(),
            api_base: "http://localhost:0".to_string(),
            session_ttl_secs: 0,
        }
    }
}
