pub mod form;
pub mod locale;
pub mod message;
pub mod predictor;

pub use form::analyze_form;
pub use locale::Locale;
pub use message::{compose, MatchCard};
pub use predictor::predict;

use tracing::{debug, info};

use crate::opendota::models::{known_team, non_blank};
use crate::opendota::{MatchSource, ProMatch};

/// Compose one forecast message per recent pro match, in API order.
///
/// Requests are issued one at a time. An empty match list gives an empty
/// vector.
pub async fn build_forecasts(source: &dyn MatchSource, locale: Locale) -> Vec<String> {
    let matches = source.pro_matches().await;
    info!("{} returned {} pro match(es)", source.name(), matches.len());

    let mut messages = Vec::with_capacity(matches.len());
    for m in &matches {
        let card = match_card(source, locale, m).await;
        debug!(
            "Forecast {:?}: {} [{}] vs {} [{}] -> {:?} {}%",
            m.match_id,
            card.radiant_name,
            card.radiant_form,
            card.dire_name,
            card.dire_form,
            card.prediction.winner,
            card.prediction.confidence
        );
        messages.push(compose(locale, &card));
    }
    messages
}

async fn match_card(source: &dyn MatchSource, locale: Locale, m: &ProMatch) -> MatchCard {
    let radiant_id = known_team(m.radiant_team_id);
    let dire_id = known_team(m.dire_team_id);

    let radiant_name =
        display_name(source, m.radiant_name.as_deref(), radiant_id, locale.radiant()).await;
    let dire_name = display_name(source, m.dire_name.as_deref(), dire_id, locale.dire()).await;

    let radiant_form = team_form(source, radiant_id, locale).await;
    let dire_form = team_form(source, dire_id, locale).await;
    let prediction = predict(&radiant_form, &dire_form);

    MatchCard {
        radiant_name,
        dire_name,
        league: non_blank(m.league_name.as_deref()).map(str::to_string),
        radiant_form,
        dire_form,
        prediction,
    }
}

async fn team_form(source: &dyn MatchSource, team_id: Option<u64>, locale: Locale) -> String {
    match team_id {
        Some(id) => analyze_form(&source.team_matches(id).await),
        None => locale.no_form().to_string(),
    }
}

/// Record name, then profile name when the record has none, then the side name.
async fn display_name(
    source: &dyn MatchSource,
    name: Option<&str>,
    team_id: Option<u64>,
    fallback: &str,
) -> String {
    if let Some(name) = non_blank(name) {
        return name.to_string();
    }
    if let Some(id) = team_id {
        if let Some(profile) = source.team_profile(id).await {
            if let Some(name) = profile.display_name() {
                return name.to_string();
            }
        }
    }
    fallback.to_string()
}
