//! Win/loss form of a team over its latest matches.

use crate::opendota::{TeamMatch, FORM_WINDOW};

/// Build the form string for a team, e.g. `"W-L-W"`.
///
/// `matches` is most-recent-first; the output keeps that order and looks at
/// no more than [`FORM_WINDOW`] records. Empty input gives an empty string.
pub fn analyze_form(matches: &[TeamMatch]) -> String {
    matches
        .iter()
        .take(FORM_WINDOW)
        .map(|m| if m.team_won() { "W" } else { "L" })
        .collect::<Vec<_>>()
        .join("-")
}

/// Number of wins in a form string.
pub fn wins(form: &str) -> u32 {
    form.chars().filter(|&c| c == 'W').count() as u32
}
