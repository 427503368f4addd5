use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "nbl-trainer")]
#[command(about = "Headless neutral buoyancy pool trainer", long_about = None)]
pub struct Args {
    /// Session config (TOML). Built-in defaults when omitted.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Built-in stage name (`pool`, `repair`); overrides the config file
    #[arg(long)]
    pub stage: Option<String>,
    /// Simulated session length in seconds
    #[arg(long)]
    pub seconds: Option<f32>,
    /// Fixed frame delta in seconds
    #[arg(long)]
    pub dt: Option<f32>,
}
