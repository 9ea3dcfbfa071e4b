use clap::Parser;
use url::Url;

use crate::forecast::Locale;

/// Telegram bot with heuristic Dota 2 pro match forecasts
#[derive(Parser, Debug, Clone)]
#[command(name = "dota-forecast-bot", version, about)]
pub struct Config {
    /// Telegram bot token
    #[arg(long, env = "BOT_TOKEN", hide_env_values = true)]
    pub bot_token: String,

    /// OpenDota API key (optional, sent as the `api_key` query parameter)
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// OpenDota API base URL
    #[arg(long, env = "OPENDOTA_API_URL", default_value = "https://api.opendota.com/api")]
    pub api_url: String,

    /// Reply language (`en` or `ru`)
    #[arg(long, env = "BOT_LOCALE", default_value = "en")]
    pub locale: Locale,

    /// Timeout for each OpenDota request in seconds
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value = "10")]
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.bot_token.trim().is_empty() {
            anyhow::bail!("BOT_TOKEN must not be empty");
        }
        let url = Url::parse(&self.api_url)
            .map_err(|e| anyhow::anyhow!("invalid OPENDOTA_API_URL '{}': {}", self.api_url, e))?;
        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("OPENDOTA_API_URL must be an http(s) URL, got '{}'", self.api_url);
        }
        if self.request_timeout_secs == 0 {
            anyhow::bail!("request_timeout_secs must be positive");
        }
        Ok(())
    }

    /// The API key, or `None` when unset or blank.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().map(str::trim).filter(|k| !k.is_empty())
    }
}
