use bevy_math::Vec2;

use crate::math::smoothstep;
use crate::{CurrentSpec, PlanarBox};

// Lattice hash: fractional part of a scaled sine. Reproducible, not random.
#[inline]
fn hash(n: f32) -> f32 {
    let s = n.sin() * 43758.5453;
    s - s.floor()
}

#[inline]
fn lattice(xi: f32, yi: f32) -> f32 {
    hash(xi * 53.13 + yi * 91.17)
}

/// 2D value noise in `[0, 1)`: smoothstep-eased bilinear blend of the four
/// surrounding lattice values.
pub fn value_noise2(x: f32, y: f32) -> f32 {
    let xi = x.floor();
    let yi = y.floor();
    let xf = x - xi;
    let yf = y - yi;

    let s = lattice(xi, yi);
    let t = lattice(xi + 1.0, yi);
    let u = lattice(xi, yi + 1.0);
    let v = lattice(xi + 1.0, yi + 1.0);

    let sx = xf * xf * (3.0 - 2.0 * xf);
    let sy = yf * yf * (3.0 - 2.0 * yf);
    let low = s + (t - s) * sx;
    let high = u + (v - u) * sx;
    low + (high - low) * sy
}

/// Ambient water velocity at world `(x, z)` and sim time `time`.
///
/// Direction comes from a noise lookup, speed is a constant base with a slow
/// gust oscillation, and a second phase-shifted noise sample pushes the flow
/// sideways so currents never run in straight lines. Speed never exceeds
/// `base + gust`. Inside `bounds`, flow fades toward `wall_floor` of its open
/// value as the point approaches a wall.
pub fn current_at(spec: &CurrentSpec, pos: Vec2, time: f32, bounds: Option<&PlanarBox>) -> Vec2 {
    let ns = spec.noise_scale;
    let gust = spec.gust * (std::f32::consts::TAU * spec.freq * time + spec.gust_phase).sin();
    let speed = spec.base + gust;

    let ang = value_noise2(pos.x * ns, pos.y * ns) * std::f32::consts::TAU;
    let dir = Vec2::new(ang.cos(), ang.sin());
    let perp = dir.perp();

    let swirl = spec.swirl
        * (value_noise2((pos.x + 37.2) * ns * 0.7, (pos.y - 12.8) * ns * 0.7) - 0.5);

    let flow = (dir * speed + perp * swirl).clamp_length_max(spec.base + spec.gust);

    let wall = match bounds {
        Some(b) => smoothstep(0.0, spec.wall_damp_dist, b.edge_distance(pos)).max(spec.wall_floor),
        None => 1.0,
    };
    flow * wall
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noise_is_in_unit_range_and_reproducible() {
        for i in -40..40 {
            for j in -40..40 {
                let x = i as f32 * 0.37;
                let y = j as f32 * 0.53;
                let n = value_noise2(x, y);
                assert!((0.0..=1.0).contains(&n), "noise({x},{y})={n}");
                assert_eq!(n.to_bits(), value_noise2(x, y).to_bits());
            }
        }
    }

    #[test]
    fn noise_matches_lattice_at_integer_points() {
        assert_eq!(value_noise2(3.0, -2.0), lattice(3.0, -2.0));
    }

    #[test]
    fn still_water_has_no_flow() {
        let spec = CurrentSpec::still();
        assert_eq!(current_at(&spec, Vec2::new(4.0, -7.0), 12.0, None), Vec2::ZERO);
    }
}
