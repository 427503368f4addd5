use bevy_math::{Vec2, Vec3};

pub(super) const WORLD_UP: Vec3 = Vec3::Y;
/// Facing assumed when the viewer looks straight up or down.
pub(super) const DEFAULT_FACING: Vec3 = Vec3::NEG_Z;
/// Smallest mass any integrator divides by (kg).
pub(super) const MIN_MASS: f32 = 1e-6;

/// First-order lag of `prev` toward `target` with time constant `tau`.
#[inline]
pub(super) fn ema_update(prev: f32, target: f32, dt: f32, tau: f32) -> f32 {
    let a = 1.0 - (-dt / tau.max(1e-6)).exp();
    prev + (target - prev) * a
}

/// Horizontal unit forward and right vectors for a viewer direction.
/// Y is discarded; a degenerate (vertical or non-finite) view falls back to -Z.
pub(super) fn facing_basis(facing: Vec3) -> (Vec3, Vec3) {
    let flat = Vec3::new(facing.x, 0.0, facing.z);
    let fwd = if flat.length_squared() >= 1e-8 {
        flat.normalize()
    } else {
        DEFAULT_FACING
    };
    let right = fwd.cross(WORLD_UP).normalize();
    (fwd, right)
}

#[inline]
pub(super) fn planar(v: Vec3) -> Vec2 {
    Vec2::new(v.x, v.z)
}

/// Mass guard: non-finite values fall back, everything is floored.
#[inline]
pub(super) fn guarded_mass(mass: Option<f32>, fallback: f32) -> f32 {
    let m = mass.filter(|m| m.is_finite()).unwrap_or(fallback);
    if m.is_finite() { m.max(MIN_MASS) } else { MIN_MASS }
}
