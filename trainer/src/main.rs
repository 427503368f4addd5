use anyhow::Result;
use clap::Parser;
use tracing::info;

use trainer::{load_config, run_session, Args, Config};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut cfg = match &args.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    cfg.apply_args(&args);
    info!(stage = %cfg.stage, seconds = cfg.seconds, dt = cfg.dt, "Trainer config loaded");

    let report = run_session(&cfg)?;
    info!(?report, "Session report");
    Ok(())
}
