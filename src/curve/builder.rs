use crate::curve::config::{Config, ConfigOverrides, DEFAULTS};
use crate::curve::report::CurveReport;
use crate::stats::{optimal, Hypergeometric};
use rayon::prelude::*;

/// Most likely land count for every (turn, cards seen) pair.
///
/// Row `turn` corresponds to `hand_size - 2 + turn` cards drawn and has one
/// column per card count from 0 through `turn + hand_size - 1`. The cell is
/// the pool size under which drawing exactly that many successes is most
/// probable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<i64>>,
}

impl Grid {
    pub fn build(engine: &Hypergeometric, deck_size: i64, hand_size: i64) -> Self {
        let first_draw = hand_size.saturating_sub(2);
        let turns = if first_draw <= deck_size {
            deck_size.saturating_sub(first_draw).saturating_add(1)
        } else {
            0
        };

        // every row reads factorials up to deck_size
        engine.factorials().warm(deck_size);

        let rows: Vec<Vec<i64>> = (0..turns)
            .into_par_iter()
            .map(|turn| {
                let draws = first_draw + turn;
                (0..=turn + hand_size - 1)
                    .map(|cards| optimal(&engine.pool_chance(cards, draws, deck_size)) as i64)
                    .collect::<Vec<i64>>()
            })
            .collect();

        Grid { rows }
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, turn: usize) -> Option<&[i64]> {
        self.rows.get(turn).map(Vec::as_slice)
    }

    pub fn get(&self, turn: usize, cards: usize) -> Option<i64> {
        self.rows.get(turn).and_then(|row| row.get(cards)).copied()
    }
}

/// Running totals for one cost slot.
#[derive(Debug, Clone, Copy, Default)]
struct Slot {
    cards: usize,
    rawpool: i64,
}

/// Greedy mana curve construction over a shared distribution engine.
#[derive(Debug, Clone, Default)]
pub struct CurveBuilder {
    engine: Hypergeometric,
}

impl CurveBuilder {
    pub fn new() -> Self {
        Self::with_engine(Hypergeometric::new())
    }

    pub fn with_engine(engine: Hypergeometric) -> Self {
        CurveBuilder { engine }
    }

    pub fn engine(&self) -> &Hypergeometric {
        &self.engine
    }

    /// Cost slots to credit on a turn with `mana` available.
    fn cost_slots(mana: i64, max_cost: i64) -> Vec<usize> {
        if max_cost <= 0 {
            vec![0]
        } else if mana <= max_cost {
            vec![mana as usize]
        } else {
            let mut slots = vec![max_cost as usize, (mana - max_cost) as usize];
            slots.sort_unstable_by(|a, b| b.cmp(a));
            slots
        }
    }

    /// Mana most likely available on `turn` after `draws` cards.
    fn mana_available(&self, land: i64, turn: i64, draws: i64, deck_size: i64) -> i64 {
        if land > 0 {
            let drawn = optimal(&self.engine.card_chance(land, draws, deck_size)) as i64;
            land.min(turn).min(drawn)
        } else {
            turn.min(DEFAULTS.hs_mana_max)
        }
    }

    /// Build the curve for `config`.
    ///
    /// Walks turns from 1, crediting the cost slots this turn's mana can pay
    /// for. Each credit looks up how large the pool at that slot would have
    /// to be for its card count to be the likeliest draw; the growth over the
    /// slot's previous pool is first spent against the raise budget and only
    /// reaches the curve once the budget is gone. A slot whose card count
    /// runs past its grid row stalls the allocation: later turns still visit
    /// their slots but nothing grows. Stops when the deck is full or the draws
    /// run past the deck.
    pub fn deck_stats(&self, config: &Config) -> CurveReport {
        let Config {
            land,
            raise_curve,
            max_cost,
            reserved,
            deck_size,
            hand_size,
        } = *config;

        let grid = Grid::build(&self.engine, deck_size, hand_size);
        log::debug!(
            "built {} grid rows for deck_size={} hand_size={}",
            grid.rows(),
            deck_size,
            hand_size
        );

        let mut curve: Vec<i64> = vec![0];
        let mut slots: Vec<Slot> = Vec::new();
        let mut budget = raise_curve.max(0);
        let mut total = land.saturating_add(reserved);
        let mut turn: i64 = 1;
        let mut draws = hand_size.saturating_sub(1);
        let mut stalled = false;

        while draws <= deck_size && total < deck_size {
            let mana = self.mana_available(land, turn, draws, deck_size);

            for cost in Self::cost_slots(mana, max_cost) {
                if slots.len() <= cost {
                    slots.resize(cost + 1, Slot::default());
                }
                if curve.len() <= cost {
                    curve.resize(cost + 1, 0);
                }

                let slot = &mut slots[cost];
                slot.cards += 1;
                if stalled {
                    continue;
                }

                let Some(pool) = grid.get(turn as usize, slot.cards) else {
                    log::debug!(
                        "turn {}: slot {} holds {} cards, past the grid; curve is final",
                        turn,
                        cost,
                        slot.cards
                    );
                    stalled = true;
                    continue;
                };

                let room = deck_size.saturating_sub(total);
                let mut pooldiff = (pool - slot.rawpool).min(room).max(0);
                slot.rawpool = slot.rawpool.max(pool);

                if pooldiff >= budget {
                    pooldiff -= budget;
                    budget = 0;
                    total += pooldiff;
                    curve[cost] += pooldiff;
                } else {
                    budget -= pooldiff;
                }
            }

            log::trace!("turn {}: mana={} total={} budget={}", turn, mana, total, budget);
            turn += 1;
            draws += 1;
        }

        CurveReport {
            lands: land,
            spells: deck_size.saturating_sub(land).saturating_sub(reserved),
            extra: reserved,
            deck_size,
            curve,
        }
    }

    /// Build the curve for the defaults with `overrides` applied.
    pub fn deck_stats_with(&self, overrides: ConfigOverrides) -> CurveReport {
        self.deck_stats(&Config::default().with(overrides))
    }
}

/// Build the curve for `config` with a fresh engine.
pub fn deck_stats(config: &Config) -> CurveReport {
    CurveBuilder::new().deck_stats(config)
}
