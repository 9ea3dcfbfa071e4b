use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use teloxide::Bot;
use tracing::info;

mod bot;
mod config;
mod forecast;
mod opendota;

use bot::BotContext;
use config::Config;
use opendota::{MatchSource, OpenDotaClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Optional .env in the working directory
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    config.validate()?;

    let client = OpenDotaClient::new(
        &config.api_url,
        config.api_key(),
        Duration::from_secs(config.request_timeout_secs),
    )?;
    let source: Arc<dyn MatchSource> = Arc::new(client);

    info!(
        "Starting Dota 2 forecast bot (locale={}, api={}, api_key={}, timeout={}s)",
        config.locale,
        config.api_url,
        if config.api_key().is_some() { "set" } else { "none" },
        config.request_timeout_secs
    );

    let bot = Bot::new(config.bot_token.clone());
    bot::run(
        bot,
        BotContext {
            source,
            locale: config.locale,
        },
    )
    .await;

    info!("Bot stopped");
    Ok(())
}
