use serde::{Deserialize, Serialize};

/// Entry of `GET /proMatches`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProMatch {
    pub match_id: Option<u64>,
    pub radiant_team_id: Option<u64>,
    pub radiant_name: Option<String>,
    pub dire_team_id: Option<u64>,
    pub dire_name: Option<String>,
    pub league_name: Option<String>,
}

/// Entry of `GET /teams/{team_id}/matches`, seen from the queried team.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamMatch {
    pub match_id: Option<u64>,
    /// Whether the queried team played on the radiant side
    pub radiant: Option<bool>,
    pub radiant_win: Option<bool>,
    pub opposing_team_name: Option<String>,
    pub league_name: Option<String>,
}

impl TeamMatch {
    /// Whether the queried team won. Missing flags count as `false`.
    pub fn team_won(&self) -> bool {
        self.radiant.unwrap_or(false) == self.radiant_win.unwrap_or(false)
    }
}

/// Response of `GET /teams/{team_id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamProfile {
    pub team_id: Option<u64>,
    pub name: Option<String>,
    pub tag: Option<String>,
    pub rating: Option<f64>,
    pub wins: Option<u32>,
    pub losses: Option<u32>,
}

impl TeamProfile {
    /// Best display name: `name`, then `tag`, ignoring blanks.
    pub fn display_name(&self) -> Option<&str> {
        non_blank(self.name.as_deref()).or_else(|| non_blank(self.tag.as_deref()))
    }
}

/// A team id usable for lookups; OpenDota reports "no team" as null or 0.
pub fn known_team(id: Option<u64>) -> Option<u64> {
    id.filter(|&id| id != 0)
}

pub(crate) fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}
