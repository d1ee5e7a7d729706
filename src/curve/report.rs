use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of a curve calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveReport {
    pub lands: i64,
    /// Non-land, non-reserved slots: `deck_size - lands - extra`.
    pub spells: i64,
    /// Reserved cards.
    pub extra: i64,
    pub deck_size: i64,
    /// Card count per mana cost, indexed by cost. Always holds slot 0.
    pub curve: Vec<i64>,
}

impl CurveReport {
    /// Cards placed on the curve.
    pub fn spell_slots(&self) -> i64 {
        self.curve.iter().sum()
    }

    /// Lands, reserved cards and curve cards together.
    pub fn total(&self) -> i64 {
        self.lands
            .saturating_add(self.extra)
            .saturating_add(self.spell_slots())
    }

    /// (cost, count) pairs worth showing: cost 0 only when it holds cards.
    pub fn drops(&self) -> impl Iterator<Item = (usize, i64)> + '_ {
        self.curve
            .iter()
            .copied()
            .enumerate()
            .filter(|&(cost, count)| cost > 0 || count != 0)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for CurveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Deck Stats")?;
        writeln!(f, "Lands:     {:>2}", self.lands)?;
        writeln!(f, "Spells:    {:>2}", self.spells)?;
        writeln!(f, "Reserved:  {:>2}", self.extra)?;
        writeln!(f)?;
        writeln!(f, "Curve:")?;
        for (cost, count) in self.drops() {
            writeln!(f, "{:>3} drops:{:>3}", cost, count)?;
        }
        writeln!(f)?;
        write!(f, "Total:     {:>2}", self.deck_size)
    }
}
