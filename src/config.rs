//! Application configuration loaded from environment variables.

use std::time::Duration;

use crate::error::config::ConfigError;

/// Competition synced when none is given.
pub const DEFAULT_COMPETITION_CODE: &str = "PL";

const DEFAULT_API_URL: &str = football_data::client::DEFAULT_API_URL;
const DEFAULT_TIMEOUT_SECS: u64 = football_data::client::DEFAULT_TIMEOUT_SECS;
const DEFAULT_SYNC_CRON: &str = "0 0 6 * * *";
const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_USER_AGENT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION"),
    " (+",
    env!("CARGO_PKG_REPOSITORY"),
    ")"
);

#[derive(Debug, Clone)]
pub struct Config {
    pub football_data_api_token: String,
    pub football_data_api_url: String,
    pub football_data_timeout: Duration,
    pub database_url: String,
    /// Competition codes synced by the scheduler, e.g. `["PL", "CL"]`
    pub sync_competitions: Vec<String>,
    pub sync_cron: String,
    pub listen_addr: String,
    pub user_agent: String,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// `FOOTBALL_DATA_API_TOKEN` and `DATABASE_URL` are required, everything else has a default.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup, blank values count as missing
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let require = |key: &str| get(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()));

        let football_data_api_token = require("FOOTBALL_DATA_API_TOKEN")?;
        let database_url = require("DATABASE_URL")?;

        let timeout_secs = match get("FOOTBALL_DATA_TIMEOUT_SECS") {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::InvalidEnvValue {
                    var: "FOOTBALL_DATA_TIMEOUT_SECS".to_string(),
                    reason: format!("expected a positive number of seconds, got {:?}", value),
                })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let sync_competitions = match get("SYNC_COMPETITIONS") {
            Some(value) => parse_competition_codes(&value)?,
            None => vec![DEFAULT_COMPETITION_CODE.to_string()],
        };

        Ok(Self {
            football_data_api_token,
            football_data_api_url: get("FOOTBALL_DATA_API_URL")
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            football_data_timeout: Duration::from_secs(timeout_secs),
            database_url,
            sync_competitions,
            sync_cron: get("SYNC_CRON").unwrap_or_else(|| DEFAULT_SYNC_CRON.to_string()),
            listen_addr: get("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string()),
            user_agent: get("USER_AGENT").unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        })
    }
}

/// Uppercases a competition code, `None` if it is empty or not alphanumeric
pub fn normalize_competition_code(code: &str) -> Option<String> {
    let code = code.trim();

    if code.is_empty() || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }

    Some(code.to_ascii_uppercase())
}

/// Parses a comma separated list of competition codes, e.g. `PL, cl`
fn parse_competition_codes(value: &str) -> Result<Vec<String>, ConfigError> {
    let mut codes: Vec<String> = Vec::new();

    for code in value.split(',').map(str::trim).filter(|c| !c.is_empty()) {
        let code = normalize_competition_code(code).ok_or_else(|| ConfigError::InvalidEnvValue {
            var: "SYNC_COMPETITIONS".to_string(),
            reason: format!("invalid competition code {:?}", code),
        })?;

        if !codes.contains(&code) {
            codes.push(code);
        }
    }

    if codes.is_empty() {
        return Err(ConfigError::InvalidEnvValue {
            var: "SYNC_COMPETITIONS".to_string(),
            reason: "no competition codes given".to_string(),
        });
    }

    Ok(codes)
}
