use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Deck size must be positive, got {0}")]
    NonPositiveDeck(i64),
    #[error("Hand size must be positive, got {0}")]
    NonPositiveHand(i64),
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: i64 },
    #[error("{land} lands do not fit in a {deck_size} card deck")]
    LandExceedsDeck { land: i64, deck_size: i64 },
    #[error("{land} lands and {reserved} reserved cards exceed a {deck_size} card deck")]
    Overcommitted {
        land: i64,
        reserved: i64,
        deck_size: i64,
    },
}

/// Process-wide default values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Defaults {
    pub deck_size: i64,
    pub land: i64,
    pub raise_curve: i64,
    /// Declared for completeness; no calculation reads it.
    pub variance: i64,
    pub reserved: i64,
    pub max_cost: i64,
    pub hand_size: i64,
    /// Mana ceiling used when a deck runs no lands at all.
    pub hs_mana_max: i64,
}

pub const DEFAULTS: Defaults = Defaults {
    deck_size: 60,
    land: 24,
    raise_curve: 6,
    variance: 1,
    reserved: 12,
    max_cost: 6,
    hand_size: 7,
    hs_mana_max: 10,
};

/// Inputs to a curve calculation.
///
/// Fields are signed so that out-of-range values survive parsing and get
/// clamped by the calculation instead of rejected. See [`Config::validate`]
/// for the strict alternative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub land: i64,
    pub raise_curve: i64,
    /// Highest cost slot to fill. 0 routes everything to slot 0.
    pub max_cost: i64,
    pub reserved: i64,
    pub deck_size: i64,
    pub hand_size: i64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            land: DEFAULTS.land,
            raise_curve: DEFAULTS.raise_curve,
            max_cost: DEFAULTS.max_cost,
            reserved: DEFAULTS.reserved,
            deck_size: DEFAULTS.deck_size,
            hand_size: DEFAULTS.hand_size,
        }
    }
}

/// Optional replacements for each [`Config`] field; `None` keeps the base value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub land: Option<i64>,
    pub raise_curve: Option<i64>,
    pub max_cost: Option<i64>,
    pub reserved: Option<i64>,
    pub deck_size: Option<i64>,
    pub hand_size: Option<i64>,
}

impl ConfigOverrides {
    /// Build from values given in calculation order:
    /// land, raise curve, max cost, reserved, deck size, hand size.
    /// Missing trailing values stay `None`, extra values are ignored.
    pub fn from_positional(values: &[Option<i64>]) -> Self {
        let at = |i: usize| values.get(i).copied().flatten();
        ConfigOverrides {
            land: at(0),
            raise_curve: at(1),
            max_cost: at(2),
            reserved: at(3),
            deck_size: at(4),
            hand_size: at(5),
        }
    }
}

impl Config {
    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Apply overrides on top of this config.
    pub fn with(self, overrides: ConfigOverrides) -> Self {
        Config {
            land: overrides.land.unwrap_or(self.land),
            raise_curve: overrides.raise_curve.unwrap_or(self.raise_curve),
            max_cost: overrides.max_cost.unwrap_or(self.max_cost),
            reserved: overrides.reserved.unwrap_or(self.reserved),
            deck_size: overrides.deck_size.unwrap_or(self.deck_size),
            hand_size: overrides.hand_size.unwrap_or(self.hand_size),
        }
    }

    /// Reject configurations the calculation would otherwise clamp.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.deck_size <= 0 {
            return Err(ConfigError::NonPositiveDeck(self.deck_size));
        }
        if self.hand_size <= 0 {
            return Err(ConfigError::NonPositiveHand(self.hand_size));
        }
        for (field, value) in [
            ("land", self.land),
            ("raise curve", self.raise_curve),
            ("max cost", self.max_cost),
            ("reserved", self.reserved),
        ] {
            if value < 0 {
                return Err(ConfigError::Negative { field, value });
            }
        }
        if self.land > self.deck_size {
            return Err(ConfigError::LandExceedsDeck {
                land: self.land,
                deck_size: self.deck_size,
            });
        }
        if self.land.saturating_add(self.reserved) > self.deck_size {
            return Err(ConfigError::Overcommitted {
                land: self.land,
                reserved: self.reserved,
                deck_size: self.deck_size,
            });
        }
        Ok(())
    }
}

/// Canned deck archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Aggro,
    Midrange,
    Control,
    Limited,
    Clear,
}

impl Preset {
    pub const ALL: [Preset; 5] = [
        Preset::Aggro,
        Preset::Midrange,
        Preset::Control,
        Preset::Limited,
        Preset::Clear,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Aggro => "aggro",
            Preset::Midrange => "midrange",
            Preset::Control => "control",
            Preset::Limited => "limited",
            Preset::Clear => "clear",
        }
    }

    /// Overrides applied on top of the defaults. Fields a preset leaves
    /// blank fall back to the defaults.
    pub fn overrides(&self) -> ConfigOverrides {
        match self {
            Preset::Aggro => ConfigOverrides {
                deck_size: Some(60),
                land: Some(20),
                raise_curve: Some(0),
                reserved: Some(7),
                max_cost: Some(2),
                hand_size: None,
            },
            Preset::Midrange => ConfigOverrides {
                deck_size: Some(DEFAULTS.deck_size),
                land: Some(DEFAULTS.land),
                raise_curve: Some(DEFAULTS.raise_curve),
                reserved: Some(DEFAULTS.reserved),
                ..ConfigOverrides::default()
            },
            Preset::Control => ConfigOverrides {
                deck_size: Some(60),
                land: Some(27),
                raise_curve: Some(3),
                reserved: Some(7),
                ..ConfigOverrides::default()
            },
            Preset::Limited => ConfigOverrides {
                deck_size: Some(40),
                land: Some(15),
                raise_curve: Some(4),
                reserved: Some(2),
                ..ConfigOverrides::default()
            },
            Preset::Clear => ConfigOverrides::default(),
        }
    }

    pub fn config(&self) -> Config {
        Config::default().with(self.overrides())
    }

    pub fn description(&self) -> &'static str {
        match self {
            Preset::Aggro => {
                "Aggro Decks (Fast and Aggressive)\n \
                 *Mulligans for explosive hands.\n \
                 *Uses small amounts of removal.\n \
                 *Strong against control, and weak to midrange.\n \
                 *Reserves cards for removal or tempo."
            }
            Preset::Midrange => {
                "Midrange Decks (Consistent and Powerful)\n \
                 *Usually combines a balance of creatures and controlling spells.\n \
                 *May take hands without first-turn plays.\n \
                 *Strong against aggro, and weak to control.\n \
                 *Reserves cards for removal, tempo, or utility."
            }
            Preset::Control => {
                "Control Decks (Slow and Inevitable)\n \
                 *Controls the game with counterspells and kill spells.\n \
                 *Uses very strong creatures or combos to win.\n \
                 *Strong against midrange, weak to aggro.\n \
                 *Reserves cards for ending the game."
            }
            Preset::Limited => {
                "Limited Decks (formats with 40 card deck limits)\n \
                 *Uses few one cost creatures, or none.\n \
                 *Keeps the mana curve high due to limited card access.\n \
                 *Usually plays a midrange strategy.\n \
                 *Reserves cards for ending the game."
            }
            Preset::Clear => "Clear All Fields",
        }
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let names: Vec<&str> = Preset::ALL.iter().map(Preset::name).collect();
                format!("unknown preset '{}', expected one of: {}", s, names.join(", "))
            })
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_table() {
        let config = Config::default();
        assert_eq!(config.deck_size, 60);
        assert_eq!(config.land, 24);
        assert_eq!(config.raise_curve, 6);
        assert_eq!(config.reserved, 12);
        assert_eq!(config.max_cost, 6);
        assert_eq!(config.hand_size, 7);
        assert_eq!(DEFAULTS.hs_mana_max, 10);
        assert_eq!(DEFAULTS.variance, 1);
    }

    #[test]
    fn test_load_config_file() {
        let config = Config::from_file("config.json").expect("Failed to load config");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"land": 17, "deckSize": 40}"#).expect("valid json");
        assert_eq!(config.land, 17);
        assert_eq!(config.deck_size, 40);
        assert_eq!(config.reserved, DEFAULTS.reserved);
        assert_eq!(config.hand_size, DEFAULTS.hand_size);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = Config::from_file("does-not-exist.json");
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }

    #[test]
    fn test_bad_json_is_json_error() {
        let result: Result<Config, ConfigError> =
            serde_json::from_str::<Config>("{ land: }").map_err(ConfigError::from);
        assert!(matches!(result, Err(ConfigError::JsonError(_))));
    }

    #[test]
    fn test_positional_overrides() {
        let overrides = ConfigOverrides::from_positional(&[Some(20), None, Some(2)]);
        let config = Config::default().with(overrides);
        assert_eq!(config.land, 20);
        assert_eq!(config.raise_curve, DEFAULTS.raise_curve);
        assert_eq!(config.max_cost, 2);
        assert_eq!(config.deck_size, DEFAULTS.deck_size);
    }

    #[test]
    fn test_validate_accepts_defaults_and_presets() {
        assert!(Config::default().validate().is_ok());
        for preset in Preset::ALL {
            assert!(preset.config().validate().is_ok(), "{} should validate", preset);
        }
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad = |overrides: ConfigOverrides| Config::default().with(overrides).validate();

        assert!(matches!(
            bad(ConfigOverrides { deck_size: Some(0), ..Default::default() }),
            Err(ConfigError::NonPositiveDeck(0))
        ));
        assert!(matches!(
            bad(ConfigOverrides { hand_size: Some(-1), ..Default::default() }),
            Err(ConfigError::NonPositiveHand(-1))
        ));
        assert!(matches!(
            bad(ConfigOverrides { reserved: Some(-2), ..Default::default() }),
            Err(ConfigError::Negative { field: "reserved", value: -2 })
        ));
        assert!(matches!(
            bad(ConfigOverrides { land: Some(61), ..Default::default() }),
            Err(ConfigError::LandExceedsDeck { land: 61, deck_size: 60 })
        ));
        assert!(matches!(
            bad(ConfigOverrides { land: Some(50), ..Default::default() }),
            Err(ConfigError::Overcommitted { .. })
        ));
    }

    #[test]
    fn test_validate_handles_extreme_values() {
        let config = Config {
            reserved: i64::MAX,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Overcommitted { .. })));
    }

    #[test]
    fn test_preset_values() {
        let aggro = Preset::Aggro.config();
        assert_eq!((aggro.land, aggro.raise_curve, aggro.max_cost, aggro.reserved), (20, 0, 2, 7));

        let control = Preset::Control.config();
        assert_eq!(control.land, 27);
        assert_eq!(control.max_cost, DEFAULTS.max_cost);

        let limited = Preset::Limited.config();
        assert_eq!(limited.deck_size, 40);
        assert_eq!(limited.hand_size, DEFAULTS.hand_size);

        assert_eq!(Preset::Midrange.config(), Config::default());
        assert_eq!(Preset::Clear.config(), Config::default());
    }

    #[test]
    fn test_preset_from_str() {
        assert_eq!("aggro".parse::<Preset>(), Ok(Preset::Aggro));
        assert_eq!("Limited".parse::<Preset>(), Ok(Preset::Limited));
        for preset in Preset::ALL {
            assert_eq!(preset.to_string().parse::<Preset>(), Ok(preset));
        }
        let err = "tempo".parse::<Preset>().unwrap_err();
        assert!(err.contains("midrange"), "error should list presets: {}", err);
    }
}
