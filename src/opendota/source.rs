use async_trait::async_trait;

use super::models::{ProMatch, TeamMatch, TeamProfile};

/// Read-only source of match data.
///
/// Implementations never fail: an unavailable upstream is reported as an
/// empty list or `None`, and callers treat that as "no data".
#[async_trait]
pub trait MatchSource: Send + Sync {
    /// Most recent professional matches, at most [`super::FORM_WINDOW`].
    async fn pro_matches(&self) -> Vec<ProMatch>;

    /// A team's most recent matches, most-recent-first, at most [`super::FORM_WINDOW`].
    async fn team_matches(&self, team_id: u64) -> Vec<TeamMatch>;

    /// A team's profile.
    async fn team_profile(&self, team_id: u64) -> Option<TeamProfile>;

    /// Human-readable name for logging.
    fn name(&self) -> &str;
}
