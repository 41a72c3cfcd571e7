use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupabaseConfig {
    pub url: String,
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Directory holding the built web bundle (`index.html` + assets).
    pub site_dir: PathBuf,
    /// `None` when either credential is missing; the server then keeps
    /// responses in memory.
    pub supabase: Option<SupabaseConfig>,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = secret(&lookup, "SUPABASE_URL");
        let key = secret(&lookup, "SUPABASE_KEY");
        let supabase = match (url, key) {
            (Some(url), Some(key)) => Some(SupabaseConfig { url, key }),
            _ => {
                warn!("Supabase credentials incomplete, responses will only be kept in memory");
                None
            }
        };

        Ok(Self {
            port: try_load(&lookup, "PORT", "5000")?,
            site_dir: try_load(&lookup, "SITE_DIR", "dist")?,
            supabase,
        })
    }
}

fn try_load<T, F>(lookup: &F, key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    value.parse().map_err(|err: T::Err| {
        warn!("Invalid {key} value: {err}");
        ConfigError::Invalid {
            key,
            value: value.clone(),
            reason: err.to_string(),
        }
    })
}

/// Present and non-blank; logs only whether it was found.
fn secret<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty());
    info!("{key} = {}", if value.is_some() { "OK" } else { "MISSING" });
    value
}
