use bevy_math::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Timestep substituted for non-finite or non-positive frame deltas.
pub const FALLBACK_DT: f32 = 1.0 / 60.0;

/// Replace a degenerate frame delta (tab switch, dropped frame) with
/// [`FALLBACK_DT`].
#[inline]
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 {
        dt
    } else {
        tracing::debug!(dt, "degenerate timestep; using fallback");
        FALLBACK_DT
    }
}

/// Hermite ramp from 0 at `edge0` to 1 at `edge1`.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0).max(1e-6)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Floor/ceiling limits for the vertical (head height) coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VerticalBounds {
    pub min_y: f32,
    pub max_y: f32,
}

impl VerticalBounds {
    pub const fn new(min_y: f32, max_y: f32) -> Self {
        Self { min_y, max_y }
    }

    /// Unbounded in both directions.
    pub const fn open() -> Self {
        Self { min_y: f32::NEG_INFINITY, max_y: f32::INFINITY }
    }
}

impl Default for VerticalBounds {
    fn default() -> Self {
        Self::open()
    }
}

/// Axis-aligned rectangle in the world XZ plane. `Vec2::x` is world X,
/// `Vec2::y` is world Z.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanarBox {
    pub min: Vec2,
    pub max: Vec2,
}

impl PlanarBox {
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Shortest distance from `p` to any edge, zero when outside.
    pub fn edge_distance(&self, p: Vec2) -> f32 {
        let dx = (p.x - self.min.x).min(self.max.x - p.x);
        let dz = (p.y - self.min.y).min(self.max.y - p.y);
        dx.min(dz).max(0.0)
    }

    /// Clamp `p` into the box shrunk by `inset` on every side.
    pub fn clamp_inset(&self, p: Vec2, inset: f32) -> Vec2 {
        Vec2::new(
            p.x.clamp(self.min.x + inset, (self.max.x - inset).max(self.min.x + inset)),
            p.y.clamp(self.min.y + inset, (self.max.y - inset).max(self.min.y + inset)),
        )
    }
}

/// World-space axis-aligned box used for collider volumes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb3 {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb3 {
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Grow horizontally by `radius` and vertically by `half_height`.
    pub fn expanded(&self, radius: f32, half_height: f32) -> Self {
        let pad = Vec3::new(radius, half_height, radius);
        Self { min: self.min - pad, max: self.max + pad }
    }

    /// Strict interior test (touching a face is not a hit).
    pub fn contains_strict(&self, p: Vec3) -> bool {
        p.x > self.min.x
            && p.x < self.max.x
            && p.y > self.min.y
            && p.y < self.max.y
            && p.z > self.min.z
            && p.z < self.max.z
    }
}
