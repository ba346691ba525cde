use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

const DEFAULT_TIMEOUT: u64 = 10;

// Loaded once at startup, read-only afterwards.
#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    /// Station name, sent verbatim in every payload
    pub name: String,

    /// Collector endpoint for the POST
    pub url: String,

    /// Placeholder until tokens are implemented, never transmitted
    pub auth_code: String,

    /// Seconds to wait between sends
    #[serde(deserialize_with = "interval_seconds")]
    pub interval: u64,

    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        Ok(config)
    }
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT
}

// Deployed config files carry the interval both as 60 and as "60",
// so accept either spelling.
fn interval_seconds<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(u64),
        Text(String),
    }
    match Raw::deserialize(deserializer)? {
        Raw::Int(n) => Ok(n),
        Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}
