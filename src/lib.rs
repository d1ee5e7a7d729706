pub mod curve;
pub mod stats;

pub use curve::{deck_stats, Config, ConfigOverrides, CurveBuilder, CurveReport, Preset, DEFAULTS};
pub use stats::{optimal, Factorials, Hypergeometric};

#[cfg(test)]
mod integration_tests;
