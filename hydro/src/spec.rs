use bevy_math::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::body_specs::{require_positive, ConfigError};
use crate::math::{Aabb3, PlanarBox, VerticalBounds};

/// Physical layout of one training stage, independent of any renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageSpec {
    pub name: String,
    /// Spawn point of the trainee's head (eye) position.
    pub spawn_head: Vec3,
    pub player_height: f32,
    pub player_radius: f32,
    /// Lowest/highest allowed head height.
    pub head_bounds: VerticalBounds,
    /// Water volume footprint. Clamps the rig and damps currents near walls.
    pub pool: PlanarBox,
    /// Solid obstacles the rig may not enter.
    #[serde(default)]
    pub colliders: Vec<Aabb3>,
}

impl StageSpec {
    pub fn half_height(&self) -> f32 {
        self.player_height * 0.5
    }

    pub fn spawn_planar(&self) -> Vec2 {
        Vec2::new(self.spawn_head.x, self.spawn_head.z)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("stage.player_height", self.player_height)?;
        require_positive("stage.player_radius", self.player_radius)?;
        let VerticalBounds { min_y, max_y } = self.head_bounds;
        if min_y > max_y {
            return Err(ConfigError::InvertedBounds { what: "stage.head_bounds", min: min_y, max: max_y });
        }
        let r = self.player_radius;
        if self.pool.min.x + r > self.pool.max.x - r {
            return Err(ConfigError::InvertedBounds { what: "stage.pool.x", min: self.pool.min.x, max: self.pool.max.x });
        }
        if self.pool.min.y + r > self.pool.max.y - r {
            return Err(ConfigError::InvertedBounds { what: "stage.pool.z", min: self.pool.min.y, max: self.pool.max.y });
        }
        for c in &self.colliders {
            if c.min.cmpgt(c.max).any() {
                return Err(ConfigError::InvertedBounds { what: "stage.colliders", min: c.min.min_element(), max: c.max.max_element() });
            }
        }
        Ok(())
    }
}
