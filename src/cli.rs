//! Command-line adapter around the premium model

use anyhow::{Context, Result};
use clap::Parser;
use fuzzy_premium::{InferenceEngine, Inputs};

/// Fuzzy premium - monthly insurance price from four health indicators
#[derive(Parser, Debug)]
#[command(name = "fuzzy-premium")]
#[command(
    version,
    allow_negative_numbers = true,
    about = "Calculates a monthly insurance premium from BMI, blood pressure, cholesterol and cigarettes per day",
    after_help = "\
Examples:
  fuzzy-premium 22 100 180 0            Healthy non-smoker
  fuzzy-premium 32 160 280 10           High risk smoker
  fuzzy-premium 28 130 250 5 --explain  Show how every rule fired"
)]
pub struct Cli {
    /// Body-mass index
    pub bmi: i64,

    /// Blood pressure in mmHg
    pub blood_pressure: i64,

    /// Cholesterol level in mg/dL
    pub cholesterol: i64,

    /// Cigarettes smoked per day
    pub cigarettes_per_day: i64,

    /// Log level (error, warn, info, debug, trace), overridden by RUST_LOG
    #[arg(long, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    /// Print the weight and output of every rule after the premium
    #[arg(long)]
    pub explain: bool,
}

impl Cli {
    fn inputs(&self) -> Inputs {
        Inputs::new(
            self.bmi as f64,
            self.blood_pressure as f64,
            self.cholesterol as f64,
            self.cigarettes_per_day as f64,
        )
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let engine = InferenceEngine::standard().context("failed to build the premium model")?;
    let inputs = cli.inputs();
    let outputs = engine
        .eval(&inputs)
        .with_context(|| format!("cannot price {inputs:?}"))?;

    println!("€ {}", format_premium(outputs.value()));

    if cli.explain {
        for (i, (rule, firing)) in engine.rules().iter().zip(outputs.firings()).enumerate() {
            println!(
                "rule {}: weight {:.4}, output {:.4}: {rule}",
                i + 1,
                firing.weight,
                firing.output
            );
        }
    }

    Ok(())
}

/// Rounds to cents and keeps at least one fractional digit, e.g. `10.0` or `51.67`.
pub fn format_premium(value: f64) -> String {
    let rounded = (value * 100.).round() / 100.;

    if rounded.fract() == 0. {
        format!("{rounded:.1}")
    } else {
        format!("{rounded}")
    }
}

#[test]
fn test_format_premium() {
    assert_eq!(format_premium(10.), "10.0");
    assert_eq!(format_premium(9.999999999), "10.0");
    assert_eq!(format_premium(51.666503), "51.67");
    assert_eq!(format_premium(42.5), "42.5");
    assert_eq!(format_premium(0.), "0.0");
}

#[test]
fn test_parse_args() {
    let cli = Cli::try_parse_from(["fuzzy-premium", "22", "100", "180", "0"]).unwrap();

    assert_eq!(cli.inputs(), Inputs::new(22., 100., 180., 0.));
    assert_eq!(cli.log_level, "warn");
    assert!(!cli.explain);

    let cli = Cli::try_parse_from(["fuzzy-premium", "-3", "100", "180", "0", "--explain"]).unwrap();

    assert_eq!(cli.bmi, -3);
    assert!(cli.explain);
}

#[test]
fn test_rejects_bad_args() {
    assert!(Cli::try_parse_from(["fuzzy-premium", "22", "100", "180"]).is_err());
    assert!(Cli::try_parse_from(["fuzzy-premium", "22", "abc", "180", "0"]).is_err());
    assert!(Cli::try_parse_from(["fuzzy-premium", "22.5", "100", "180", "0"]).is_err());
}
