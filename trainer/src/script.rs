use bevy_math::Vec3;
use hydro::MoveCommands;
use serde::{Deserialize, Serialize};

/// One keyframe of a scripted session. Once the clock passes `at`, the held
/// keys are replaced, the view turns to `yaw_deg` (if given) and `ballast`
/// adjust actions are applied once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptStep {
    pub at: f32,
    #[serde(default)]
    pub keys: Vec<String>,
    /// Heading in degrees clockwise from -Z when viewed from above.
    #[serde(default)]
    pub yaw_deg: Option<f32>,
    /// Signed ballast adjust actions (+ adds a unit, - removes one).
    #[serde(default)]
    pub ballast: i32,
}

impl ScriptStep {
    fn new(at: f32, keys: &[&str]) -> Self {
        Self { at, keys: keys.iter().map(|k| k.to_string()).collect(), yaw_deg: None, ballast: 0 }
    }

    fn yaw(mut self, deg: f32) -> Self {
        self.yaw_deg = Some(deg);
        self
    }

    fn ballast(mut self, delta: i32) -> Self {
        self.ballast = delta;
        self
    }
}

/// Trim heavy, swim to the far end, turn, strafe, then float up.
pub fn demo_script() -> Vec<ScriptStep> {
    vec![
        ScriptStep::new(0.0, &[]).ballast(6),
        ScriptStep::new(2.0, &["KeyW"]),
        ScriptStep::new(6.0, &["KeyW", "ShiftLeft"]).yaw(45.0),
        ScriptStep::new(10.0, &["KeyD"]).yaw(90.0),
        ScriptStep::new(14.0, &[]).ballast(-10),
        ScriptStep::new(20.0, &["KeyS"]).yaw(180.0),
        ScriptStep::new(24.0, &[]),
    ]
}

/// Heading from a yaw angle; 0 looks down -Z, 90 looks down +X.
pub fn facing_from_yaw(yaw_deg: f32) -> Vec3 {
    let yaw = yaw_deg.to_radians();
    Vec3::new(yaw.sin(), 0.0, -yaw.cos())
}

/// Everything the host hands the simulation for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    pub facing: Vec3,
    pub commands: MoveCommands,
    pub ballast_delta: i32,
}

impl Default for FrameInput {
    fn default() -> Self {
        Self { facing: Vec3::NEG_Z, commands: MoveCommands::default(), ballast_delta: 0 }
    }
}

/// Replays a script against the simulation clock.
#[derive(Debug, Clone)]
pub struct ScriptPlayer {
    steps: Vec<ScriptStep>,
    next: usize,
    held: MoveCommands,
    yaw_deg: f32,
}

impl ScriptPlayer {
    pub fn new(mut steps: Vec<ScriptStep>) -> Self {
        steps.sort_by(|a, b| a.at.total_cmp(&b.at));
        Self { steps, next: 0, held: MoveCommands::default(), yaw_deg: 0.0 }
    }

    /// Input for a frame starting at `time`. Every step whose `at` has passed
    /// since the previous call fires in order.
    pub fn input_at(&mut self, time: f32) -> FrameInput {
        let mut ballast_delta = 0;
        while let Some(step) = self.steps.get(self.next) {
            if step.at > time {
                break;
            }
            self.held = MoveCommands::from_key_codes(step.keys.iter().map(String::as_str));
            if let Some(yaw) = step.yaw_deg {
                self.yaw_deg = yaw;
            }
            ballast_delta += step.ballast;
            self.next += 1;
        }
        FrameInput { facing: facing_from_yaw(self.yaw_deg), commands: self.held, ballast_delta }
    }

    pub fn finished(&self) -> bool {
        self.next >= self.steps.len()
    }
}
