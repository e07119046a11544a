use std::{fs, path::PathBuf};

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use reconstruct_core::{ShareFile, interpolate_at_zero};

mod file_utils;

fn install_tracing() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{
        EnvFilter,
        fmt::{self},
    };

    let fmt_layer = fmt::layer().with_target(false).with_line_number(false);
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}

/// Reconstructs a Shamir-shared secret from a JSON share file.
#[derive(Debug, Parser)]
struct CliArgs {
    /// Path to the JSON file holding the encoded shares
    shares_path: PathBuf,
}

fn main() -> Result<()> {
    install_tracing();
    color_eyre::install()?;
    let args = CliArgs::parse();

    file_utils::check_file_exists(&args.shares_path)?;
    let contents = fs::read_to_string(&args.shares_path)
        .with_context(|| format!("while reading {}", args.shares_path.display()))?;
    let share_file: ShareFile =
        serde_json::from_str(&contents).context("while parsing the share file")?;
    let points = share_file
        .select_points()
        .context("while decoding shares")?;
    tracing::info!(
        "using {} of {} shares for interpolation",
        points.len(),
        share_file.shares.len()
    );
    let secret = interpolate_at_zero(&points).context("while reconstructing the secret")?;
    println!("{secret}");
    Ok(())
}
