// Process configuration read from the environment.
//
// Purpose
// - One place that turns environment variables into typed settings for the composition root.
//
// Responsibilities
// - Fall back to defaults for unset variables and log that it did.
// - Reject values that are present but unusable.

use crate::modules::votes::core::award_config::{
    AwardConfig, DEFAULT_CATEGORIES, DEFAULT_COLLEAGUES, DEFAULT_MONTHS,
};
use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;
use tracing::info;

pub const DEFAULT_PORT: &str = "5000";
pub const DEFAULT_DATABASE_URL: &str = "memory://";
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 3] = [
    "http://localhost:5173",
    "http://localhost:5174",
    "https://digisolvotingsytem.vercel.app",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("unsupported DATABASE_URL {0:?}, expected memory:// or file://<path>")]
    UnsupportedStore(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    InMemory,
    JsonFile(PathBuf),
}

impl FromStr for StoreLocation {
    type Err = ConfigError;

    fn from_str(url: &str) -> Result<Self, Self::Err> {
        let url = url.trim();
        if url == "memory" || url == "memory://" {
            return Ok(Self::InMemory);
        }
        match url.strip_prefix("file://") {
            Some(path) if !path.is_empty() => Ok(Self::JsonFile(PathBuf::from(path))),
            _ => Err(ConfigError::UnsupportedStore(url.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub store: StoreLocation,
    pub allowed_origins: Vec<String>,
    pub awards: AwardConfig,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            port: parse("PORT", &var(&lookup, "PORT", DEFAULT_PORT))?,
            store: var(&lookup, "DATABASE_URL", DEFAULT_DATABASE_URL).parse()?,
            allowed_origins: list(&lookup, "CORS_ALLOWED_ORIGINS", &DEFAULT_ALLOWED_ORIGINS)?,
            awards: AwardConfig {
                categories: list(&lookup, "AWARD_CATEGORIES", &DEFAULT_CATEGORIES)?,
                months: list(&lookup, "AWARD_MONTHS", &DEFAULT_MONTHS)?,
                colleagues: list(&lookup, "AWARD_COLLEAGUES", &DEFAULT_COLLEAGUES)?,
            },
        })
    }
}

fn var(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => value,
        _ => {
            info!("{key} not set, using default: {default}");
            default.to_string()
        }
    }
}

fn parse<T: FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

fn list(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    defaults: &[&str],
) -> Result<Vec<String>, ConfigError> {
    let raw = var(lookup, key, &defaults.join(","));
    let values: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect();
    if values.is_empty() {
        return Err(ConfigError::Invalid {
            key,
            value: raw,
            reason: "expected a comma separated list".into(),
        });
    }
    Ok(values)
}
