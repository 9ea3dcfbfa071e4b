use super::locale::Locale;
use super::predictor::Prediction;

/// Everything rendered for one match.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchCard {
    pub radiant_name: String,
    pub dire_name: String,
    pub league: Option<String>,
    pub radiant_form: String,
    pub dire_form: String,
    pub prediction: Prediction,
}

pub fn compose(locale: Locale, card: &MatchCard) -> String {
    let mut text = format!(
        "{}: {} vs {}\n",
        locale.match_label(),
        card.radiant_name,
        card.dire_name
    );
    if let Some(league) = &card.league {
        text.push_str(&format!("{}: {}\n", locale.league_label(), league));
    }
    text.push_str(&format!(
        "{} {} ({}%)\n{}:\n{}: {}\n{}: {}\n{}: {}\n",
        locale.forecast_label(),
        card.prediction.winner.label(locale),
        card.prediction.confidence,
        locale.form_label(),
        card.radiant_name,
        card.radiant_form,
        card.dire_name,
        card.dire_form,
        locale.recommendation_label(),
        card.prediction.recommendation().label(locale),
    ));
    text
}
