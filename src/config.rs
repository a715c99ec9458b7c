use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_PRICE_CEILING: f64 = 10_000.0;
const DEFAULT_SESSION_PATH: &str = "rentify-session.json";

/// Runtime configuration, read from the environment (and `.env` if present)
#[derive(Debug, Clone)]
pub struct Config {
    /// Key for the generative model; AI features are off without it
    pub api_key: Option<String>,
    pub api_base: String,
    pub model: String,
    pub http_timeout: Duration,
    /// Upper end of the price slider; a max bound equal to this is open-ended
    pub price_ceiling: f64,
    pub session_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            http_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            price_ceiling: DEFAULT_PRICE_CEILING,
            session_path: PathBuf::from(DEFAULT_SESSION_PATH),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        let api_base = std::env::var("RENTIFY_API_BASE").unwrap_or(defaults.api_base);
        let model = std::env::var("RENTIFY_MODEL").unwrap_or(defaults.model);

        let http_timeout = match std::env::var("RENTIFY_HTTP_TIMEOUT_SECS") {
            Ok(raw) => Duration::from_secs(
                raw.parse()
                    .context("RENTIFY_HTTP_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            Err(_) => defaults.http_timeout,
        };

        let price_ceiling = match std::env::var("RENTIFY_PRICE_CEILING") {
            Ok(raw) => {
                let ceiling: f64 = raw
                    .parse()
                    .context("RENTIFY_PRICE_CEILING must be a number")?;
                if ceiling <= 0.0 {
                    anyhow::bail!("RENTIFY_PRICE_CEILING must be positive, got {}", ceiling);
                }
                ceiling
            }
            Err(_) => defaults.price_ceiling,
        };

        let session_path = std::env::var("RENTIFY_SESSION_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.session_path);

        Ok(Self {
            api_key,
            api_base,
            model,
            http_timeout,
            price_ceiling,
            session_path,
        })
    }

    pub fn ai_enabled(&self) -> bool {
        self.api_key.is_some()
    }
}
