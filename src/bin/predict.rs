//! Salescast headless predictor
//!
//! Loads the fitted model and scaler, prints one sales prediction and exits.
//! Suitable for scripting or for machines without a display.
//!
//! # Usage
//! ```sh
//! ARTIFACT_DIR=artifacts cargo run --bin predict -- --tv 150 --radio 25 --newspaper 60
//! ```
//!
//! # Environment Variables
//! - `ARTIFACT_DIR` - Directory holding both artifacts (default: `.`)
//! - `MODEL_FILE` - Model artifact filename (default: `linear_regression_model.json`)
//! - `SCALER_FILE` - Scaler artifact filename (default: `scaler.json`)

use anyhow::{Context, Result};
use clap::Parser;
use salescast::application::ml::{LinearSalesPredictor, SalesPredictor};
use salescast::config::ArtifactConfig;
use salescast::domain::input_bounds::{NEWSPAPER_BOUNDS, RADIO_BOUNDS, TV_BOUNDS};
use salescast::domain::ml::AdSpend;
use salescast::domain::sales::SalesEstimate;
use salescast::infrastructure::logging::init_logging;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TV investment, 0 to 300
    #[arg(long, default_value_t = TV_BOUNDS.default)]
    tv: f64,

    /// Radio investment, 0 to 50
    #[arg(long, default_value_t = RADIO_BOUNDS.default)]
    radio: f64,

    /// Newspaper investment, 0 to 120
    #[arg(long, default_value_t = NEWSPAPER_BOUNDS.default)]
    newspaper: f64,

    /// Directory holding both artifacts (overrides ARTIFACT_DIR)
    #[arg(long)]
    artifact_dir: Option<PathBuf>,

    /// Model artifact filename (overrides MODEL_FILE)
    #[arg(long)]
    model_file: Option<String>,

    /// Scaler artifact filename (overrides SCALER_FILE)
    #[arg(long)]
    scaler_file: Option<String>,

    /// Print a JSON object instead of the formatted line
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct PredictionOutput {
    tv: f64,
    radio: f64,
    newspaper: f64,
    prediction: f64,
    formatted: String,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_logging(None);

    let args = Args::parse();

    let mut config = ArtifactConfig::from_env()?;
    if let Some(dir) = &args.artifact_dir {
        config = config.with_artifact_dir(dir);
    }
    if let Some(file) = args.model_file {
        config.model_file = file;
    }
    if let Some(file) = args.scaler_file {
        config.scaler_file = file;
    }

    let spend = AdSpend::validated(args.tv, args.radio, args.newspaper)?;

    let predictor = LinearSalesPredictor::load(config.model_path(), config.scaler_path())
        .context("Cannot serve predictions without the model and scaler artifacts")?;
    info!("Using {} {}", predictor.name(), predictor.version());

    let estimate = SalesEstimate::new(predictor.predict(&spend));

    if args.json {
        let output = PredictionOutput {
            tv: spend.tv,
            radio: spend.radio,
            newspaper: spend.newspaper,
            prediction: estimate.raw,
            formatted: estimate.formatted(),
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("Expected sales prediction: {}", estimate);
    }

    Ok(())
}
