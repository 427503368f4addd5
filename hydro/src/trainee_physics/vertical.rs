use super::terms::{added_mass, buoyant_force, buoyant_volume, quadratic_drag, total_mass};
use super::types::{VerticalInputs, VerticalState, VerticalStep};
use super::util::MIN_MASS;
use crate::math::sanitize_dt;
use crate::{VerticalBounds, VerticalSpec};

/// Integrate one step of vertical motion from buoyancy against weight,
/// damped by quadratic drag and linear damping.
///
/// Semi-implicit Euler: velocity is updated first and the new velocity moves
/// the position. The result is clamped into `bounds`; hitting a bound stops
/// any velocity that points further out of range. No internal state, so
/// identical inputs give bit-identical outputs.
pub fn step_vertical(spec: &VerticalSpec, inputs: VerticalInputs) -> VerticalStep {
    let dt = sanitize_dt(inputs.dt);
    let VerticalBounds { min_y, max_y } = inputs.bounds;

    let y = if inputs.y.is_finite() {
        inputs.y
    } else {
        tracing::debug!(y = inputs.y, "non-finite height; resetting to floor");
        if min_y.is_finite() { min_y } else { 0.0 }
    };
    let vy = if inputs.vy.is_finite() { inputs.vy } else { 0.0 };
    let time = if inputs.time.is_finite() { inputs.time } else { 0.0 };

    let m = total_mass(spec, inputs.ballast_units);
    let rho = spec.rho;
    let m_eff = added_mass(m, spec.ca, rho, spec.rigid_volume()).max(MIN_MASS);

    let buoyancy = buoyant_force(rho, spec.g, buoyant_volume(spec, time));
    let weight = m * spec.g;
    let drag = quadratic_drag(rho, spec.cd, spec.area, vy);
    let damping = spec.linear_damp * vy;

    let a = (buoyancy - weight - drag - damping) / m_eff;

    let mut new_vy = vy + a * dt;
    let mut new_y = y + new_vy * dt;
    if !new_vy.is_finite() || !new_y.is_finite() {
        tracing::debug!(a, "non-finite vertical step; holding position");
        new_vy = 0.0;
        new_y = y;
    }

    if new_y < min_y {
        new_y = min_y;
        if new_vy < 0.0 {
            new_vy = 0.0;
        }
    } else if new_y > max_y {
        new_y = max_y;
        if new_vy > 0.0 {
            new_vy = 0.0;
        }
    }

    VerticalStep { new_y, new_vy, total_mass: m }
}

impl VerticalState {
    /// Advance the owned clock by `dt` and integrate one step in place.
    pub fn step(
        &mut self,
        spec: &VerticalSpec,
        dt: f32,
        ballast_units: u32,
        bounds: VerticalBounds,
    ) -> VerticalStep {
        let dt = sanitize_dt(dt);
        self.elapsed_time += dt;
        let out = step_vertical(
            spec,
            VerticalInputs {
                dt,
                y: self.depth_position,
                vy: self.vertical_velocity,
                ballast_units,
                bounds,
                time: self.elapsed_time,
            },
        );
        self.depth_position = out.new_y;
        self.vertical_velocity = out.new_vy;
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(y: f32, vy: f32, ballast_units: u32) -> VerticalInputs {
        VerticalInputs {
            dt: 1.0 / 60.0,
            y,
            vy,
            ballast_units,
            bounds: VerticalBounds::new(1.75, 12.0),
            time: 0.0,
        }
    }

    #[test]
    fn unweighted_trainee_barely_moves() {
        let spec = VerticalSpec::default();
        let out = step_vertical(&spec, inputs(2.0, 0.0, 0));
        assert!((out.new_y - 2.0).abs() < 0.003, "new_y={}", out.new_y);
        assert!(out.new_vy.abs() < 0.01, "new_vy={}", out.new_vy);
        assert!((out.total_mass - 227.9).abs() < 1e-3);
    }

    #[test]
    fn ballast_sinks() {
        let spec = VerticalSpec::default();
        let out = step_vertical(&spec, inputs(2.0, 0.0, 10));
        assert!(out.new_vy < 0.0, "new_vy={}", out.new_vy);
        assert!((out.total_mass - 237.9).abs() < 1e-3);
    }

    #[test]
    fn floor_clamp_is_inelastic() {
        let spec = VerticalSpec::default();
        for vy in [-0.5_f32, -2.0, -10.0] {
            let out = step_vertical(&spec, inputs(1.751, vy, 3));
            assert_eq!(out.new_y, 1.75);
            assert_eq!(out.new_vy, 0.0);
        }
    }

    #[test]
    fn ceiling_clamp_is_inelastic() {
        let spec = VerticalSpec::default();
        for vy in [0.5_f32, 2.0, 10.0] {
            let out = step_vertical(&spec, inputs(11.999, vy, 0));
            assert_eq!(out.new_y, 12.0);
            assert_eq!(out.new_vy, 0.0);
        }
    }

    #[test]
    fn identical_inputs_are_bit_identical() {
        let spec = VerticalSpec::default();
        let i = VerticalInputs { time: 3.7, ..inputs(4.2, -0.31, 6) };
        let a = step_vertical(&spec, i);
        let b = step_vertical(&spec, i);
        assert_eq!(a.new_y.to_bits(), b.new_y.to_bits());
        assert_eq!(a.new_vy.to_bits(), b.new_vy.to_bits());
        assert_eq!(a.total_mass.to_bits(), b.total_mass.to_bits());
    }

    #[test]
    fn degenerate_dt_uses_fallback() {
        let spec = VerticalSpec::default();
        let reference = step_vertical(&spec, inputs(5.0, 0.2, 4));
        for dt in [f32::NAN, f32::INFINITY, 0.0, -1.0] {
            let out = step_vertical(&spec, VerticalInputs { dt, ..inputs(5.0, 0.2, 4) });
            assert_eq!(out, reference);
        }
    }

    #[test]
    fn non_finite_state_is_recovered() {
        let spec = VerticalSpec::default();
        let out = step_vertical(&spec, inputs(f32::NAN, f32::NAN, 0));
        assert!(out.new_y.is_finite() && out.new_vy.is_finite());
        assert!(out.new_y >= 1.75 && out.new_y <= 12.0);
    }

    #[test]
    fn non_finite_clock_stays_in_bounds() {
        let spec = VerticalSpec::default();
        for t in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            let out = step_vertical(&spec, VerticalInputs { time: t, ..inputs(2.0, 0.0, 0) });
            assert!(out.new_y.is_finite() && out.new_vy.is_finite(), "time {t} gave {out:?}");
            assert!(out.new_y >= 1.75 && out.new_y <= 12.0, "time {t} gave {out:?}");
        }
    }

    #[test]
    fn state_step_advances_clock() {
        let spec = VerticalSpec::default();
        let mut s = VerticalState::at_rest(3.0);
        s.step(&spec, 0.5, 0, VerticalBounds::open());
        s.step(&spec, f32::NAN, 0, VerticalBounds::open());
        assert!((s.elapsed_time - (0.5 + 1.0 / 60.0)).abs() < 1e-6);
    }
}
