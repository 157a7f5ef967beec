// Style recommendation CLI
//
// Reads a recommendation request (or an array of them) as JSON from a file
// or stdin and prints the recommendation JSON to stdout.
//
// Usage: cargo run --features cli --bin style-recommend -- [request.json|-] [--config engine.json]
// The config path can also come from STYLE_CONFIG.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::PathBuf;
use style_scorer_rust::{EngineConfig, RecommendationRequest, StyleEngine};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "style_scorer_rust=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut input: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = std::env::var("STYLE_CONFIG").ok().map(PathBuf::from);

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().context("--config needs a path")?;
                config_path = Some(PathBuf::from(path));
            }
            "-" => input = None,
            _ => input = Some(PathBuf::from(arg)),
        }
    }

    let config = match &config_path {
        Some(path) => {
            tracing::info!("Loading engine config: {:?}", path);
            EngineConfig::from_json_file(path)?
        }
        None => EngineConfig::default(),
    };
    let engine = StyleEngine::with_config(config).map_err(|e| anyhow::anyhow!(e.user_message()))?;

    let raw = match &input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read request: {:?}", path))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read request from stdin")?;
            buffer
        }
    };

    let value: serde_json::Value =
        serde_json::from_str(&raw).context("Request is not valid JSON")?;

    let output = if value.is_array() {
        let requests: Vec<RecommendationRequest> =
            serde_json::from_value(value).context("Failed to parse request array")?;
        tracing::info!("Scoring {} requests", requests.len());
        serde_json::to_string_pretty(&engine.recommend_batch(&requests))?
    } else {
        let request: RecommendationRequest =
            serde_json::from_value(value).context("Failed to parse request")?;
        serde_json::to_string_pretty(&engine.recommend(&request))?
    };

    println!("{}", output);
    Ok(())
}
