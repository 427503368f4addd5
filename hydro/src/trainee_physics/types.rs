use bevy_math::{Vec2, Vec3};

use crate::{MoveCommands, PlanarBox, VerticalBounds};

/// One vertical integration request. Pure data; see [`super::step_vertical`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalInputs {
    pub dt: f32,
    /// Current head height (m, larger is higher).
    pub y: f32,
    pub vy: f32,
    pub ballast_units: u32,
    pub bounds: VerticalBounds,
    /// Simulation clock (s), phases the micro-buoyancy oscillation.
    pub time: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalStep {
    pub new_y: f32,
    pub new_vy: f32,
    /// Body + suit + equipment + ballast (kg).
    pub total_mass: f32,
}

/// Per-stage vertical state, owned by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalState {
    pub depth_position: f32,
    pub vertical_velocity: f32,
    pub elapsed_time: f32,
}

impl VerticalState {
    pub fn at_rest(depth_position: f32) -> Self {
        Self { depth_position, vertical_velocity: 0.0, elapsed_time: 0.0 }
    }
}

/// One planar integration request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalInputs {
    pub dt: f32,
    /// World-space look direction; only its XZ projection is used.
    pub facing: Vec3,
    pub commands: MoveCommands,
    /// Coupled body mass from the vertical model. `None` uses `HorizontalSpec::mass`.
    pub eff_mass: Option<f32>,
    /// Trainee position in world (x, z), where the current is sampled.
    pub position: Vec2,
    pub time: f32,
    /// Walls that damp the ambient current.
    pub bounds: Option<PlanarBox>,
}

/// Per-stage planar state, owned by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalState {
    /// World velocity; `x` is world X, `y` is world Z.
    pub velocity: Vec2,
    /// Smoothed propulsive force (N).
    pub thrust: f32,
    /// Smoothed heading used to estimate yaw rate.
    pub heading: Vec3,
}

impl Default for HorizontalState {
    fn default() -> Self {
        Self { velocity: Vec2::ZERO, thrust: 0.0, heading: Vec3::NEG_Z }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HorizontalStepDebug {
    pub dt: f32,
    // Facing basis (world XZ)
    pub forward: Vec2,
    pub right: Vec2,
    // Ambient flow and fluid-relative velocity
    pub flow: Vec2,
    pub rel: Vec2,
    pub v_fwd: f32,
    pub v_side: f32,
    // Propulsion
    pub thrust_target: f32,
    pub thrust: f32,
    // Turning
    pub yaw_rate: f32,
    pub turn_factor: f32,
    // Forces and inertia
    pub drag_fwd: f32,
    pub drag_side: f32,
    pub mass_fwd: f32,
    pub mass_side: f32,
    pub acc_fwd: f32,
    pub acc_side: f32,
    // Limits
    pub clamped_fwd: bool,
    pub clamped_side: bool,
    pub deadband_snap: bool,
}
