use bevy_math::{Vec2, Vec3};

use super::current::current_at;
use super::terms::{added_mass, quadratic_drag};
use super::types::{HorizontalInputs, HorizontalState, HorizontalStepDebug};
use super::util::{ema_update, facing_basis, guarded_mass, planar, DEFAULT_FACING};
use crate::math::sanitize_dt;
use crate::HorizontalSpec;

/// Planar swim step: smoothed thrust along the facing basis against
/// quadratic drag relative to the ambient current.
/// See `step_horizontal_dbg` for the telemetry variant.
///
/// Returns this frame's world displacement (`x` is world X, `y` is world Z).
/// Applying it and resolving collisions is the caller's job.
pub fn step_horizontal(
    spec: &HorizontalSpec,
    inputs: &HorizontalInputs,
    state: &mut HorizontalState,
) -> Vec2 {
    step_horizontal_dbg(spec, inputs, state, None)
}

/// Variant of `step_horizontal` that fills out an optional debug telemetry struct.
pub fn step_horizontal_dbg(
    spec: &HorizontalSpec,
    inputs: &HorizontalInputs,
    state: &mut HorizontalState,
    mut dbg: Option<&mut HorizontalStepDebug>,
) -> Vec2 {
    let dt = sanitize_dt(inputs.dt);

    if !state.velocity.is_finite() || !state.thrust.is_finite() || !state.heading.is_finite() {
        tracing::debug!(?state, "non-finite planar state; resetting");
        *state = HorizontalState::default();
    }

    // Facing basis in the world XZ plane
    let (fwd3, right3) = facing_basis(inputs.facing);
    let fwd = planar(fwd3);
    let right = planar(right3);

    // Propulsion ramps toward the commanded level instead of jumping
    let (cmd_fwd, cmd_side) = inputs.commands.axes();
    let thrust_target = if inputs.commands.has_direction() {
        spec.thrust_n * if inputs.commands.boost { spec.boost } else { 1.0 }
    } else {
        0.0
    };
    state.thrust = ema_update(state.thrust, thrust_target, dt, spec.thrust_rise_tau);

    // A lost position samples still water; a broken clock restarts at zero
    let time = if inputs.time.is_finite() { inputs.time } else { 0.0 };
    let flow = if inputs.position.is_finite() {
        current_at(&spec.current, inputs.position, time, inputs.bounds.as_ref())
    } else {
        tracing::debug!(position = ?inputs.position, "non-finite planar position; no current");
        Vec2::ZERO
    };

    // Fluid-relative velocity in the facing basis
    let rel = state.velocity - flow;
    let v_fwd = rel.dot(fwd);
    let v_side = rel.dot(right);

    // Turning stiffens drag in proportion to yaw rate
    let cos_turn = state.heading.dot(fwd3).clamp(-1.0, 1.0);
    let turn_angle = cos_turn.acos();
    state.heading = state.heading.lerp(fwd3, spec.heading_blend);
    if state.heading.length_squared() < 1e-12 {
        state.heading = DEFAULT_FACING;
    }
    let yaw_rate = turn_angle / dt.max(1e-6);
    let turn_factor = 1.0 + spec.turn_damp_k * yaw_rate;

    let rho = spec.rho;
    let drag_fwd = quadratic_drag(rho, spec.cd_fwd, spec.area_fwd, v_fwd) * turn_factor;
    let drag_side = quadratic_drag(rho, spec.cd_side, spec.area_side, v_side) * turn_factor;

    let mass = guarded_mass(inputs.eff_mass, spec.mass);
    if Some(mass) != inputs.eff_mass && inputs.eff_mass.is_some() {
        tracing::debug!(eff_mass = ?inputs.eff_mass, mass, "degenerate planar mass; guarded");
    }
    let mass_fwd = added_mass(mass, spec.ca_fwd, rho, spec.volume);
    let mass_side = added_mass(mass, spec.ca_side, rho, spec.volume);

    let acc_fwd = (state.thrust * cmd_fwd - drag_fwd) / mass_fwd;
    let acc_side = (state.thrust * cmd_side - drag_side) / mass_side;

    state.velocity += (fwd * acc_fwd + right * acc_side) * dt;

    // Speed limits apply in the facing basis, so they follow the trainee's turns
    let vf = state.velocity.dot(fwd);
    let vs = state.velocity.dot(right);
    let cf = clamp_speed(vf, spec.vmax_fwd);
    let cs = clamp_speed(vs, spec.vmax_side);
    state.velocity = fwd * cf + right * cs;
    if !state.velocity.is_finite() {
        tracing::debug!(velocity = ?state.velocity, "non-finite planar velocity; stopping");
        state.velocity = Vec2::ZERO;
    }

    let deadband_snap = state.velocity.length() < spec.deadband_v;
    if deadband_snap {
        state.velocity = Vec2::ZERO;
    }

    if let Some(d) = dbg.as_mut() {
        d.dt = dt;
        d.forward = fwd;
        d.right = right;
        d.flow = flow;
        d.rel = rel;
        d.v_fwd = v_fwd;
        d.v_side = v_side;
        d.thrust_target = thrust_target;
        d.thrust = state.thrust;
        d.yaw_rate = yaw_rate;
        d.turn_factor = turn_factor;
        d.drag_fwd = drag_fwd;
        d.drag_side = drag_side;
        d.mass_fwd = mass_fwd;
        d.mass_side = mass_side;
        d.acc_fwd = acc_fwd;
        d.acc_side = acc_side;
        d.clamped_fwd = cf != vf;
        d.clamped_side = cs != vs;
        d.deadband_snap = deadband_snap;
    }

    state.velocity * dt
}

/// Symmetric speed limit; a negative or NaN limit stops the axis.
fn clamp_speed(v: f32, vmax: f32) -> f32 {
    let vmax = vmax.max(0.0);
    v.max(-vmax).min(vmax)
}
