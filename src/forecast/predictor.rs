//! Linear win-count heuristic over two team forms.
//!
//! Each side scores one point per `W` in its form. The radiant share of the
//! combined score, floored to a whole percent, decides the pick; an exact
//! 50% goes to radiant. With no wins on either side the result is a draw at
//! 50%.

use super::form::wins;
use super::locale::Locale;

/// Confidence at or above which a bet is recommended.
pub const BET_THRESHOLD: u8 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Radiant,
    Dire,
    Draw,
}

impl Side {
    pub fn label(self, locale: Locale) -> &'static str {
        match self {
            Side::Radiant => locale.radiant(),
            Side::Dire => locale.dire(),
            Side::Draw => locale.draw(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    Bet,
    Skip,
}

impl Recommendation {
    pub fn label(self, locale: Locale) -> &'static str {
        match self {
            Recommendation::Bet => locale.bet_recommended(),
            Recommendation::Skip => locale.better_skip(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prediction {
    pub winner: Side,
    /// Whole percent, 0–100
    pub confidence: u8,
}

impl Prediction {
    pub fn recommendation(&self) -> Recommendation {
        if self.confidence >= BET_THRESHOLD {
            Recommendation::Bet
        } else {
            Recommendation::Skip
        }
    }
}

pub fn predict(radiant_form: &str, dire_form: &str) -> Prediction {
    let radiant = wins(radiant_form);
    let dire = wins(dire_form);
    let total = radiant + dire;

    if total == 0 {
        return Prediction {
            winner: Side::Draw,
            confidence: 50,
        };
    }

    let radiant_pct = (radiant * 100 / total) as u8;
    if radiant_pct >= 50 {
        Prediction {
            winner: Side::Radiant,
            confidence: radiant_pct,
        }
    } else {
        Prediction {
            winner: Side::Dire,
            confidence: 100 - radiant_pct,
        }
    }
}
