use clap::{Parser, Subcommand};
use mana_curve::{Config, ConfigOverrides, CurveBuilder, CurveReport, Preset};

#[derive(Parser)]
#[command(name = "mana-curve")]
#[command(about = "Hypergeometric mana curve calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Print the report as JSON
    #[arg(short, long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a curve from positional values (default values fill the gaps)
    #[command(allow_negative_numbers = true)]
    Stats {
        /// LAND RAISE_CURVE MAX_COST RESERVED DECK_SIZE HAND_SIZE
        values: Vec<String>,

        /// JSON config file to start from instead of the defaults
        #[arg(short, long)]
        config: Option<String>,

        /// Reject out-of-range values instead of clamping them
        #[arg(long)]
        strict: bool,
    },

    /// Build a curve for a preset archetype
    Preset {
        /// aggro, midrange, control, limited or clear
        name: Preset,
    },

    /// List the preset archetypes
    Presets,

    /// Compare the curves of two presets
    Compare {
        /// First preset
        first: Preset,

        /// Second preset
        second: Preset,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let builder = CurveBuilder::new();

    match cli.command {
        Some(Commands::Stats {
            values,
            config,
            strict,
        }) => {
            let base = match config {
                Some(path) => match Config::from_file(&path) {
                    Ok(config) => config,
                    Err(e) => {
                        eprintln!("✗ Failed to load config '{}': {}", path, e);
                        std::process::exit(1);
                    }
                },
                None => Config::default(),
            };
            let parsed: Vec<Option<i64>> = values.iter().map(|raw| parse_value(raw)).collect();
            let config = base.with(ConfigOverrides::from_positional(&parsed));
            if strict {
                if let Err(e) = config.validate() {
                    eprintln!("✗ Invalid configuration: {}", e);
                    std::process::exit(1);
                }
            }
            run_stats(&builder, &config, cli.json);
        }
        Some(Commands::Preset { name }) => {
            run_stats(&builder, &name.config(), cli.json);
        }
        Some(Commands::Presets) => list_presets(),
        Some(Commands::Compare { first, second }) => compare_presets(&builder, first, second),
        None => run_stats(&builder, &Config::default(), cli.json),
    }
}

/// Read a numeric argument. Anything unreadable counts as not supplied.
fn parse_value(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return Some(value);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value.trunc() as i64),
        _ => {
            log::warn!("ignoring malformed value '{}', using the default", raw);
            None
        }
    }
}

fn build(builder: &CurveBuilder, config: &Config) -> CurveReport {
    let start = std::time::Instant::now();
    let report = builder.deck_stats(config);
    log::info!("computed curve for {:?} in {:.2?}", config, start.elapsed());
    report
}

fn run_stats(builder: &CurveBuilder, config: &Config, json: bool) {
    let report = build(builder, config);

    if json {
        match report.to_json() {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("✗ Failed to encode report: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        println!("{}", report);
    }
}

fn list_presets() {
    println!("\n=== Presets ===\n");
    println!(
        "{:10} {:>5} {:>5} {:>6} {:>8} {:>8}",
        "Name", "Deck", "Land", "Raise", "MaxCost", "Reserved"
    );
    println!("{:-<47}", "");
    for preset in Preset::ALL {
        let c = preset.config();
        println!(
            "{:10} {:>5} {:>5} {:>6} {:>8} {:>8}",
            preset.name(),
            c.deck_size,
            c.land,
            c.raise_curve,
            c.max_cost,
            c.reserved
        );
    }
    println!();
    for preset in Preset::ALL {
        println!("{}:\n {}\n", preset.name(), preset.description());
    }
}

fn compare_presets(builder: &CurveBuilder, first: Preset, second: Preset) {
    let a = build(builder, &first.config());
    let b = build(builder, &second.config());

    println!("\n=== Curve Comparison ===\n");
    println!("{:20} {:>10} {:>10}", "Metric", first.name(), second.name());
    println!("{:-<42}", "");
    println!("{:20} {:>10} {:>10}", "Deck size", a.deck_size, b.deck_size);
    println!("{:20} {:>10} {:>10}", "Lands", a.lands, b.lands);
    println!("{:20} {:>10} {:>10}", "Spells", a.spells, b.spells);
    println!("{:20} {:>10} {:>10}", "Reserved", a.extra, b.extra);
    println!("{:-<42}", "");

    let slots = a.curve.len().max(b.curve.len());
    for cost in 0..slots {
        let left = a.curve.get(cost).copied().unwrap_or(0);
        let right = b.curve.get(cost).copied().unwrap_or(0);
        if cost == 0 && left == 0 && right == 0 {
            continue;
        }
        println!("{:20} {:>10} {:>10}", format!("{} drops", cost), left, right);
    }
    println!("{:-<42}", "");
    println!("{:20} {:>10} {:>10}", "Curve cards", a.spell_slots(), b.spell_slots());
    println!("{:20} {:>10} {:>10}", "Total", a.total(), b.total());
}
