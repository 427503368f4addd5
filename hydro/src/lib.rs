//! Buoyancy and swim physics for a neutral-buoyancy training pool.
//!
//! This crate intentionally avoids any engine types. It exposes two frame
//! integrators (vertical buoyancy, planar swimming), the procedural current
//! they swim through, and a serializable stage schema the host can load.

mod math;
pub use math::{sanitize_dt, smoothstep, Aabb3, PlanarBox, VerticalBounds, FALLBACK_DT};
mod spec;
pub use spec::StageSpec;

pub mod builtins;

mod ballast;
pub use ballast::Ballast;
mod commands;
pub use commands::MoveCommands;

pub mod trainee_physics;
pub use trainee_physics::{
    current_at, step_horizontal, step_horizontal_dbg, step_vertical, value_noise2,
    HorizontalInputs, HorizontalState, HorizontalStepDebug, VerticalInputs, VerticalState,
    VerticalStep,
};

mod body_specs;
pub use body_specs::{
    ConfigError, CouplingSpec, CurrentSpec, HorizontalSpec, HydroConfig, VerticalSpec,
};
pub use body_specs::presets;
