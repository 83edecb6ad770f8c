//! vto-size - command-line size recommendations
//!
//! Runs the recommender on measurements given as flags and prints one line per
//! category, or the JSON records the HTTP service returns when `--json` is set.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::debug;
use vto_common::{Measurements, SizeRecommendation};
use vto_size::{recommend, ConfidenceLevel};

/// Command-line arguments for vto-size
#[derive(Parser, Debug)]
#[command(name = "vto-size")]
#[command(about = "Recommend clothing sizes from body measurements (cm, kg)")]
#[command(version)]
struct Args {
    #[arg(long)]
    height: Option<f64>,

    /// Weight in kilograms
    #[arg(long)]
    weight: Option<f64>,

    #[arg(long)]
    bust: Option<f64>,

    #[arg(long)]
    waist: Option<f64>,

    #[arg(long)]
    hips: Option<f64>,

    #[arg(long)]
    inseam: Option<f64>,

    #[arg(long)]
    shoulder_width: Option<f64>,

    /// Print JSON records (with confidence level) instead of a table
    #[arg(long)]
    json: bool,
}

impl Args {
    fn measurements(&self) -> Measurements {
        Measurements {
            height: self.height,
            weight: self.weight,
            bust: self.bust,
            waist: self.waist,
            hips: self.hips,
            inseam: self.inseam,
            shoulder_width: self.shoulder_width,
        }
    }
}

/// JSON record: the service's recommendation plus its confidence level
#[derive(Serialize)]
struct Row<'a> {
    #[serde(flatten)]
    recommendation: &'a SizeRecommendation,
    level: ConfidenceLevel,
}

fn render_json(recommendations: &[SizeRecommendation]) -> Result<String> {
    let rows: Vec<Row<'_>> = recommendations
        .iter()
        .map(|recommendation| Row {
            recommendation,
            level: ConfidenceLevel::from_confidence(recommendation.confidence),
        })
        .collect();
    serde_json::to_string_pretty(&rows).context("Failed to encode recommendations")
}

fn render_table(recommendations: &[SizeRecommendation]) -> String {
    let mut out = format!("{:<10} {:<5} {:>10}  {}\n", "CATEGORY", "SIZE", "CONFIDENCE", "LEVEL");
    for rec in recommendations {
        out.push_str(&format!(
            "{:<10} {:<5} {:>10.2}  {}\n",
            rec.category.as_str(),
            rec.recommended_size.as_str(),
            rec.confidence,
            ConfidenceLevel::from_confidence(rec.confidence)
        ));
    }
    out
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let measurements = args.measurements();
    measurements
        .validate()
        .context("Measurements must be non-negative numbers")?;
    debug!(?measurements, "recommending sizes");

    let recommendations = recommend(&measurements);

    if args.json {
        println!("{}", render_json(&recommendations)?);
    } else {
        print!("{}", render_table(&recommendations));
    }

    Ok(())
}
