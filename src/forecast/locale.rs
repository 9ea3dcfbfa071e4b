//! User-visible text for every supported reply language.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Ru,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unsupported locale '{0}' (expected 'en' or 'ru')")]
pub struct LocaleParseError(pub String);

impl FromStr for Locale {
    type Err = LocaleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "ru" | "russian" => Ok(Locale::Ru),
            other => Err(LocaleParseError(other.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Locale::En => "en",
            Locale::Ru => "ru",
        })
    }
}

impl Locale {
    pub fn radiant(self) -> &'static str {
        "Radiant"
    }

    pub fn dire(self) -> &'static str {
        "Dire"
    }

    pub fn draw(self) -> &'static str {
        match self {
            Locale::En => "Draw",
            Locale::Ru => "Ничья",
        }
    }

    /// Placeholder form for a side without a team id.
    pub fn no_form(self) -> &'static str {
        "N/A"
    }

    pub fn bet_recommended(self) -> &'static str {
        match self {
            Locale::En => "Bet recommended",
            Locale::Ru => "Ставить можно",
        }
    }

    pub fn better_skip(self) -> &'static str {
        match self {
            Locale::En => "Better to skip",
            Locale::Ru => "Лучше пропустить",
        }
    }

    pub fn match_label(self) -> &'static str {
        match self {
            Locale::En => "Match",
            Locale::Ru => "Матч",
        }
    }

    pub fn league_label(self) -> &'static str {
        match self {
            Locale::En => "League",
            Locale::Ru => "Турнир",
        }
    }

    pub fn forecast_label(self) -> &'static str {
        match self {
            Locale::En => "Forecast: Winner will be",
            Locale::Ru => "Прогноз: победит",
        }
    }

    pub fn form_label(self) -> &'static str {
        match self {
            Locale::En => "Team form",
            Locale::Ru => "Форма команд",
        }
    }

    pub fn recommendation_label(self) -> &'static str {
        match self {
            Locale::En => "Recommendation",
            Locale::Ru => "Рекомендация",
        }
    }

    pub fn please_wait(self) -> &'static str {
        match self {
            Locale::En => "Collecting forecasts, please wait...",
            Locale::Ru => "Собираю прогнозы, подожди...",
        }
    }

    pub fn no_matches(self) -> &'static str {
        match self {
            Locale::En => "No recent pro matches found, try again later.",
            Locale::Ru => "Свежих профессиональных матчей не нашлось, попробуй позже.",
        }
    }

    pub fn start_text(self) -> &'static str {
        match self {
            Locale::En => {
                "Hi! I am a forecast bot for Dota 2 matches.\n\n\
                 Available commands:\n\
                 /forecast - forecasts for the latest matches\n\
                 /help - list of commands"
            }
            Locale::Ru => {
                "Привет! Я бот-прогнозист для матчей Dota 2.\n\n\
                 Доступные команды:\n\
                 /forecast (/прогноз) - прогноз на ближайшие матчи\n\
                 /help - список команд"
            }
        }
    }

    pub fn help_text(self) -> &'static str {
        match self {
            Locale::En => {
                "Available commands:\n\
                 /start - about this bot\n\
                 /forecast - match forecasts\n\
                 /help - list of commands"
            }
            Locale::Ru => {
                "Доступные команды:\n\
                 /start - информация о боте\n\
                 /forecast (/прогноз) - прогнозы на матчи\n\
                 /help - список команд"
            }
        }
    }
}
