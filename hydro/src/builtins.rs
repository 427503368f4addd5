use bevy_math::{Vec2, Vec3};

use crate::{Aabb3, ConfigError, PlanarBox, StageSpec, VerticalBounds};

const PLAYER_HEIGHT: f32 = 1.75;
const PLAYER_RADIUS: f32 = 0.38;
const SPAWN_HEAD: Vec3 = Vec3::new(-1.02, 1.75, 15.06);
const CEILING_Y: f32 = 12.0;

fn pool_footprint() -> PlanarBox {
    // Water surface footprint plus a 1 m margin, as measured from the pool model.
    PlanarBox::new(Vec2::new(-13.0, -6.5), Vec2::new(11.0, 24.5))
}

/// Open pool, no obstacles. Floor sits below head height so a heavily
/// weighted trainee bottoms out a little under standing height.
pub fn pool_stage() -> StageSpec {
    StageSpec {
        name: "pool".to_string(),
        spawn_head: SPAWN_HEAD,
        player_height: PLAYER_HEIGHT,
        player_radius: PLAYER_RADIUS,
        head_bounds: VerticalBounds::new(1.5, CEILING_Y),
        pool: pool_footprint(),
        colliders: Vec::new(),
    }
}

/// Pool with a spacecraft mock-up docked near the spawn point for the repair
/// task. Head height never drops below standing height.
pub fn repair_stage() -> StageSpec {
    // Hull section centred on the repair ring, a few metres ahead of spawn.
    let ring = Vec3::new(-1.59, 0.0, 14.89);
    let hull = Aabb3::new(
        Vec3::new(ring.x - 2.5, 0.0, ring.z - 9.0),
        Vec3::new(ring.x + 2.5, 4.5, ring.z - 4.0),
    );
    StageSpec {
        name: "repair".to_string(),
        spawn_head: SPAWN_HEAD,
        player_height: PLAYER_HEIGHT,
        player_radius: PLAYER_RADIUS,
        head_bounds: VerticalBounds::new(1.75, CEILING_Y),
        pool: pool_footprint(),
        colliders: vec![hull],
    }
}

pub fn builtin_stage(name: &str) -> Result<StageSpec, ConfigError> {
    match name {
        "pool" => Ok(pool_stage()),
        "repair" => Ok(repair_stage()),
        other => Err(ConfigError::UnknownStage(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_name() {
        assert_eq!(builtin_stage("repair").map(|s| s.colliders.len()), Ok(1));
        assert!(matches!(builtin_stage("cupola"), Err(ConfigError::UnknownStage(_))));
    }

    #[test]
    fn spawn_is_clear_of_colliders() {
        for stage in [pool_stage(), repair_stage()] {
            assert!(stage.validate().is_ok());
            let centre = stage.spawn_head - Vec3::Y * stage.half_height();
            for c in &stage.colliders {
                let grown = c.expanded(stage.player_radius, stage.half_height());
                assert!(!grown.contains_strict(centre), "{} spawn inside collider", stage.name);
            }
        }
    }
}
