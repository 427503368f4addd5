use crate::VerticalSpec;

// ----- Fluid forces -----

/// Quadratic drag opposing `v` (sign follows `v`).
#[inline]
pub(super) fn quadratic_drag(rho: f32, cd: f32, area: f32, v: f32) -> f32 {
    0.5 * rho * cd * area * v.abs() * v
}

/// Body mass plus the entrained fluid that accelerates with it.
#[inline]
pub(super) fn added_mass(mass: f32, ca: f32, rho: f32, volume: f32) -> f32 {
    mass + ca * rho * volume
}

#[inline]
pub(super) fn buoyant_force(rho: f32, g: f32, volume: f32) -> f32 {
    rho * g * volume
}

// ----- Vertical body terms -----

pub(super) fn total_mass(spec: &VerticalSpec, ballast_units: u32) -> f32 {
    spec.body_mass() + ballast_units as f32 * spec.ballast_step_kg
}

/// Displaced volume including the breathing/trim wobble.
pub(super) fn buoyant_volume(spec: &VerticalSpec, time: f32) -> f32 {
    let wobble_m3 = spec.micro_buoyancy_liters * 1e-3;
    spec.rigid_volume() + wobble_m3 * (std::f32::consts::TAU * spec.micro_hz * time).sin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_opposes_sign() {
        assert!(quadratic_drag(1000.0, 1.0, 0.5, 2.0) > 0.0);
        assert!(quadratic_drag(1000.0, 1.0, 0.5, -2.0) < 0.0);
        assert_eq!(quadratic_drag(1000.0, 1.0, 0.5, 0.0), 0.0);
    }

    #[test]
    fn volume_wobble_is_bounded() {
        let spec = VerticalSpec::default();
        let rigid = spec.rigid_volume();
        for i in 0..200 {
            let v = buoyant_volume(&spec, i as f32 * 0.37);
            assert!((v - rigid).abs() <= spec.micro_buoyancy_liters * 1e-3 + 1e-6);
        }
    }
}
