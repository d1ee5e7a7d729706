//! Integration tests for the mana curve calculator
//! Runs full calculations from config files and presets and checks the report invariants

use crate::curve::{deck_stats, Config, ConfigOverrides, CurveBuilder, Preset};
use crate::stats::{optimal, Hypergeometric};

#[test]
fn test_config_file_matches_defaults() {
    let config = Config::from_file("config.json").expect("Failed to load config");
    let from_file = deck_stats(&config);
    let from_defaults = CurveBuilder::new().deck_stats_with(ConfigOverrides::default());

    assert_eq!(from_file, from_defaults, "config.json holds the default values");
    assert_eq!(from_file.spells, 24);
}

#[test]
fn test_every_preset_fits_its_deck() {
    let builder = CurveBuilder::new();

    for preset in Preset::ALL {
        let config = preset.config();
        let report = builder.deck_stats(&config);

        assert_eq!(report.lands, config.land, "{}", preset);
        assert_eq!(report.extra, config.reserved, "{}", preset);
        assert_eq!(report.spells, config.deck_size - config.land - config.reserved);
        assert!(report.total() <= report.deck_size, "{} overflows its deck", preset);
        assert!(report.curve.iter().all(|&count| count >= 0), "{}", preset);
        assert!(
            report.curve.len() as i64 <= config.max_cost + 1,
            "{} uses slots above its max cost: {:?}",
            preset,
            report.curve
        );
    }
}

#[test]
fn test_invariant_holds_across_inputs() {
    let builder = CurveBuilder::new();

    for deck_size in [20, 40, 60] {
        for land in [0, 17, 24] {
            for reserved in [0, 12] {
                for max_cost in [0, 2, 6] {
                    for raise_curve in [0, 6] {
                        let config = Config {
                            land,
                            raise_curve,
                            max_cost,
                            reserved,
                            deck_size,
                            hand_size: 7,
                        };
                        if land + reserved > deck_size {
                            continue;
                        }
                        let report = builder.deck_stats(&config);
                        assert!(
                            report.total() <= deck_size,
                            "{:?} produced {:?}",
                            config,
                            report
                        );
                        assert!(report.curve.iter().all(|&count| count >= 0), "{:?}", config);
                    }
                }
            }
        }
    }
}

#[test]
fn test_same_config_produces_same_report() {
    let builder = CurveBuilder::new();
    let config = Preset::Limited.config();

    let results: Vec<_> = (0..5).map(|_| builder.deck_stats(&config)).collect();
    for result in &results[1..] {
        assert_eq!(&results[0], result);
    }
}

#[test]
fn test_commander_sized_deck() {
    let config = Config {
        land: 38,
        raise_curve: 6,
        max_cost: 7,
        reserved: 20,
        deck_size: 100,
        hand_size: 7,
    };
    let report = deck_stats(&config);

    assert_eq!(report.spells, 42);
    assert!(report.total() <= 100);
    assert!(report.curve.iter().sum::<i64>() > 0, "Large decks should still get a curve");
}

#[test]
fn test_opening_hand_mode() {
    let engine = Hypergeometric::new();
    let dist = engine.card_chance(24, 7, 60);

    assert_eq!(dist.len(), 8);
    assert!((dist.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    assert_eq!(optimal(&dist), 3);
}

#[test]
fn test_report_renders_as_text_and_json() {
    let report = deck_stats(&Preset::Aggro.config());

    let text = report.to_string();
    assert!(text.starts_with("Deck Stats\n"));
    assert!(text.contains("Spells:    33"));
    assert!(text.ends_with("Total:     60"));

    let json = report.to_json().expect("Failed to encode report");
    assert!(json.contains("\"deckSize\": 60"));
}
