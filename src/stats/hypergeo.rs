use crate::stats::factorial::Factorials;
use std::sync::Arc;

/// Probability distribution over one axis of the hypergeometric law.
pub type Distribution = Vec<f64>;

fn clamp(min: i64, value: i64, max: i64) -> i64 {
    min.max(value.min(max))
}

/// Hypergeometric distribution engine.
///
/// Both views evaluate the same mass function
/// `P(cards | pool, hand, deck)`, the chance of drawing exactly `cards`
/// successes in a `hand`-card sample from a `deck` holding `pool` successes.
/// `card_chance` sweeps `cards`, `pool_chance` sweeps `pool`.
#[derive(Debug, Clone, Default)]
pub struct Hypergeometric {
    factorials: Arc<Factorials>,
}

impl Hypergeometric {
    pub fn new() -> Self {
        Self::with_factorials(Arc::new(Factorials::new()))
    }

    /// Build an engine over an existing factorial table.
    pub fn with_factorials(factorials: Arc<Factorials>) -> Self {
        Hypergeometric { factorials }
    }

    pub fn factorials(&self) -> &Arc<Factorials> {
        &self.factorials
    }

    /// Distribution of the number of successes drawn, indexed `0..=hand`.
    pub fn card_chance(&self, pool: i64, hand: i64, deck: i64) -> Distribution {
        let deck = deck.max(0);
        let hand = clamp(0, hand, deck);
        let pool = clamp(0, pool, deck);

        (0..=hand)
            .map(|cards| self.mass(cards, pool, hand, deck))
            .collect()
    }

    /// Likelihood of drawing exactly `cards` successes for every possible
    /// pool size, indexed `0..=deck`.
    pub fn pool_chance(&self, cards: i64, hand: i64, deck: i64) -> Distribution {
        let deck = deck.max(0);
        let hand = clamp(0, hand, deck);
        let cards = clamp(0, cards, hand);

        (0..=deck)
            .map(|pool| self.mass(cards, pool, hand, deck))
            .collect()
    }

    fn mass(&self, cards: i64, pool: i64, hand: i64, deck: i64) -> f64 {
        let rest = deck - pool - hand + cards;
        if rest < 0 || hand < cards || pool < cards {
            // impossible draw
            return 0.0;
        }

        let f = |n| self.factorials.get(n);
        let numerator = f(pool) * f(hand) * f(deck - pool) * f(deck - hand);
        let denominator = f(rest) * f(deck) * f(cards) * f(hand - cards) * f(pool - cards);
        if numerator.is_finite() && denominator.is_finite() {
            return numerator / denominator;
        }

        let ln = |n| self.factorials.ln(n);
        let numerator = ln(pool) + ln(hand) + ln(deck - pool) + ln(deck - hand);
        let denominator = ln(rest) + ln(deck) + ln(cards) + ln(hand - cards) + ln(pool - cards);
        (numerator - denominator).exp()
    }
}
