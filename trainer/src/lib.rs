//! Headless host for the pool trainer: owns per-stage simulation state,
//! replays input scripts, and resolves the trainee rig against the stage.

mod args;
pub use args::Args;
mod config;
pub use config::{load_config, parse_config, Config};
pub mod rig;
pub mod script;
pub use script::{facing_from_yaw, FrameInput, ScriptPlayer, ScriptStep};
mod session;
pub use session::{run_session, FrameReport, SessionReport, TrainingSession};
