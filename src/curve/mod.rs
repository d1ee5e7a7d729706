pub mod builder;
pub mod config;
pub mod report;

pub use builder::{deck_stats, CurveBuilder, Grid};
pub use config::{Config, ConfigError, ConfigOverrides, Defaults, Preset, DEFAULTS};
pub use report::CurveReport;
