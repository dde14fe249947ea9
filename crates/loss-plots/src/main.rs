// File: crates/loss-plots/src/main.rs
// Summary: Renders the classification and regression loss charts into the working directory.

use anyhow::{Context, Result};
use loss_plots::ChartGenerator;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let generator = ChartGenerator::new();

    let out = generator
        .build_classification_chart()
        .context("failed to render classification chart")?;
    println!("Wrote {}", out.display());

    let out = generator
        .build_regression_chart()
        .context("failed to render regression chart")?;
    println!("Wrote {}", out.display());

    Ok(())
}
