use std::path::Path;

use anyhow::{ensure, Context, Result};
use hydro::{builtins::builtin_stage, HydroConfig, StageSpec};
use serde::{Deserialize, Serialize};

use crate::script::{demo_script, ScriptStep};
use crate::Args;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Built-in stage to load unless `custom_stage` is given.
    pub stage: String,
    pub custom_stage: Option<StageSpec>,
    pub seconds: f32,
    pub dt: f32,
    /// Log a telemetry line every this many frames (0 disables).
    pub telemetry_every: u32,
    pub physics: HydroConfig,
    pub script: Vec<ScriptStep>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stage: "pool".to_string(),
            custom_stage: None,
            seconds: 30.0,
            dt: 1.0 / 60.0,
            telemetry_every: 60,
            physics: HydroConfig::default(),
            script: demo_script(),
        }
    }
}

impl Config {
    /// CLI flags win over file values.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(stage) = &args.stage {
            self.stage = stage.clone();
            self.custom_stage = None;
        }
        if let Some(seconds) = args.seconds {
            self.seconds = seconds;
        }
        if let Some(dt) = args.dt {
            self.dt = dt;
        }
    }

    pub fn resolve_stage(&self) -> Result<StageSpec> {
        let stage = match &self.custom_stage {
            Some(custom) => custom.clone(),
            None => builtin_stage(&self.stage)?,
        };
        stage.validate().with_context(|| format!("stage `{}`", stage.name))?;
        Ok(stage)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.seconds.is_finite() && self.seconds >= 0.0, "seconds must be non-negative, got {}", self.seconds);
        ensure!(self.dt.is_finite() && self.dt > 0.0, "dt must be positive, got {}", self.dt);
        self.physics.validate().context("physics")?;
        self.resolve_stage()?;
        Ok(())
    }
}

pub fn parse_config(text: &str) -> Result<Config> {
    let cfg: Config = toml::from_str(text).context("parsing config TOML")?;
    Ok(cfg)
}

/// Read and validate a config file.
pub fn load_config(path: &Path) -> Result<Config> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg = parse_config(&text).with_context(|| format!("in {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
