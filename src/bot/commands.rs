use std::sync::Arc;
use teloxide::{prelude::*, utils::command::BotCommands};
use tracing::info;

use crate::forecast::{build_forecasts, Locale};
use crate::opendota::MatchSource;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(
    rename_rule = "lowercase",
    description = "These commands are supported:"
)]
pub enum Command {
    #[command(description = "about this bot.")]
    Start,
    #[command(description = "display this text.")]
    Help,
    #[command(description = "forecasts for the latest pro matches.")]
    Forecast,
    #[command(rename = "прогноз", hide)]
    Prognoz,
}

/// Shared, immutable state injected into every handler.
pub struct BotContext {
    pub source: Arc<dyn MatchSource>,
    pub locale: Locale,
}

/// Run the long-polling dispatcher until Ctrl-C.
pub async fn run(bot: Bot, ctx: BotContext) {
    let handler = Update::filter_message()
        .filter_command::<Command>()
        .endpoint(answer);

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![Arc::new(ctx)])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}

async fn answer(bot: Bot, msg: Message, cmd: Command, ctx: Arc<BotContext>) -> ResponseResult<()> {
    info!("Command {:?} from chat {}", cmd, msg.chat.id.0);
    let locale = ctx.locale;

    match cmd {
        Command::Start => {
            bot.send_message(msg.chat.id, locale.start_text()).await?;
        }
        Command::Help => {
            bot.send_message(msg.chat.id, locale.help_text()).await?;
        }
        Command::Forecast | Command::Prognoz => {
            bot.send_message(msg.chat.id, locale.please_wait()).await?;

            let forecasts = build_forecasts(ctx.source.as_ref(), locale).await;
            if forecasts.is_empty() {
                bot.send_message(msg.chat.id, locale.no_matches()).await?;
            }
            for text in forecasts {
                bot.send_message(msg.chat.id, text).await?;
            }
            info!("Forecasts sent to chat {}", msg.chat.id.0);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("/start", "dota_bot").unwrap(), Command::Start);
        assert_eq!(Command::parse("/help@dota_bot", "dota_bot").unwrap(), Command::Help);
        assert_eq!(Command::parse("/forecast", "dota_bot").unwrap(), Command::Forecast);
        assert_eq!(Command::parse("/прогноз", "dota_bot").unwrap(), Command::Prognoz);
        assert!(Command::parse("/bet", "dota_bot").is_err());
    }

    #[test]
    fn test_localized_alias_is_hidden_from_descriptions() {
        let descriptions = Command::descriptions().to_string();
        assert!(descriptions.contains("/forecast"));
        assert!(!descriptions.contains("/прогноз"));
    }
}
