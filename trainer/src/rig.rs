use bevy_math::{Vec2, Vec3};
use hydro::StageSpec;

/// Which parts of a proposed move were refused this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RigMove {
    pub blocked_x: bool,
    pub blocked_z: bool,
    pub blocked_y: bool,
}

impl RigMove {
    pub fn any(&self) -> bool {
        self.blocked_x || self.blocked_z || self.blocked_y
    }
}

/// Capsule-shaped trainee body, tracked by its centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rig {
    pub centre: Vec3,
}

impl Rig {
    pub fn spawn(stage: &StageSpec) -> Self {
        let mut centre = stage.spawn_head - Vec3::Y * stage.half_height();
        let p = stage.pool.clamp_inset(stage.spawn_planar(), stage.player_radius);
        centre.x = p.x;
        centre.z = p.y;
        Self { centre }
    }

    pub fn head(&self, stage: &StageSpec) -> Vec3 {
        self.centre + Vec3::Y * stage.half_height()
    }

    pub fn planar(&self) -> Vec2 {
        Vec2::new(self.centre.x, self.centre.z)
    }

    fn collides(stage: &StageSpec, centre: Vec3) -> bool {
        stage
            .colliders
            .iter()
            .any(|c| c.expanded(stage.player_radius, stage.half_height()).contains_strict(centre))
    }

    fn clamp_to_pool(stage: &StageSpec, mut p: Vec3) -> Vec3 {
        let c = stage.pool.clamp_inset(Vec2::new(p.x, p.z), stage.player_radius);
        p.x = c.x;
        p.z = c.y;
        p
    }

    /// Move by `displacement` (world X/Z) one axis at a time, then to the head
    /// height `head_y`. Each axis is kept inside the pool and refused if it
    /// would enter a collider, so the trainee slides along obstacles.
    pub fn apply(&mut self, stage: &StageSpec, displacement: Vec2, head_y: f32) -> RigMove {
        let mut result = RigMove::default();
        let mut next = self.centre;

        if displacement.x.is_finite() {
            let mut try_x = next;
            try_x.x += displacement.x;
            let try_x = Self::clamp_to_pool(stage, try_x);
            if Self::collides(stage, try_x) {
                result.blocked_x = true;
            } else {
                next.x = try_x.x;
            }
        }

        if displacement.y.is_finite() {
            let mut try_z = next;
            try_z.z += displacement.y;
            let try_z = Self::clamp_to_pool(stage, try_z);
            if Self::collides(stage, try_z) {
                result.blocked_z = true;
            } else {
                next.z = try_z.z;
            }
        }

        let bounds = stage.head_bounds;
        if head_y.is_finite() {
            let head = head_y.max(bounds.min_y).min(bounds.max_y);
            let mut try_y = next;
            try_y.y = head - stage.half_height();
            if Self::collides(stage, try_y) {
                result.blocked_y = true;
            } else {
                next.y = try_y.y;
            }
        }

        self.centre = next;
        result
    }
}
