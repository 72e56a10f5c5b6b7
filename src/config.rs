// src/config.rs
use crate::domain::account::{AccountId, Amount};
use crate::infrastructure::events::DEFAULT_CHANNEL_CAPACITY;
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    allowed_origins: Vec<String>,
    event_channel_capacity: usize,
    rate_limit_enabled: bool,
    faucet_enabled: bool,
    genesis_balances: Vec<(AccountId, Amount)>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

fn parse_flag(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

impl AppConfig {
    /// Build configuration from environment variables. Uses sensible defaults
    /// for optional values and validates the rest.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_else(default_allowed_origins);

        let event_channel_capacity = match lookup("EVENT_CHANNEL_CAPACITY") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|capacity| *capacity > 0)
                .ok_or_else(|| {
                    ConfigError::Invalid(format!(
                        "EVENT_CHANNEL_CAPACITY must be a positive integer, got {raw:?}"
                    ))
                })?,
            None => DEFAULT_CHANNEL_CAPACITY,
        };

        let rate_limit_enabled = lookup("RATE_LIMIT_ENABLED")
            .map(|v| parse_flag(v.trim()))
            .unwrap_or(true);

        let faucet_enabled = lookup("FAUCET_ENABLED")
            .map(|v| parse_flag(v.trim()))
            .unwrap_or(false);

        let genesis_balances = match lookup("GENESIS_BALANCES") {
            Some(raw) => parse_genesis_balances(&raw)?,
            None => Vec::new(),
        };

        Ok(Self {
            listen_addr,
            allowed_origins,
            event_channel_capacity,
            rate_limit_enabled,
            faucet_enabled,
            genesis_balances,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn event_channel_capacity(&self) -> usize {
        self.event_channel_capacity
    }

    pub fn rate_limit_enabled(&self) -> bool {
        self.rate_limit_enabled
    }

    pub fn faucet_enabled(&self) -> bool {
        self.faucet_enabled
    }

    /// Opening balances credited to the settlement book at startup.
    pub fn genesis_balances(&self) -> &[(AccountId, Amount)] {
        &self.genesis_balances
    }
}

/// Parses `account=amount` pairs separated by commas.
pub fn parse_genesis_balances(raw: &str) -> Result<Vec<(AccountId, Amount)>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (account, amount) = entry.split_once('=').ok_or_else(|| {
                ConfigError::Invalid(format!("GENESIS_BALANCES entry {entry:?} lacks '='"))
            })?;
            let account = AccountId::new(account)
                .map_err(|err| ConfigError::Invalid(format!("GENESIS_BALANCES: {err}")))?;
            let amount = amount
                .trim()
                .parse::<Amount>()
                .map_err(|err| ConfigError::Invalid(format!("GENESIS_BALANCES: {err}")))?;
            Ok((account, amount))
        })
        .collect()
}
