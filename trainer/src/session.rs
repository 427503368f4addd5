use anyhow::Result;
use bevy_math::{Vec2, Vec3};
use hydro::{
    sanitize_dt, step_horizontal_dbg, Ballast, HorizontalInputs, HorizontalState,
    HorizontalStepDebug, HydroConfig, StageSpec, VerticalState,
};
use tracing::{debug, info, warn};

use crate::rig::{Rig, RigMove};
use crate::script::{FrameInput, ScriptPlayer};
use crate::Config;

/// What one frame produced, for telemetry and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub time: f32,
    pub head: Vec3,
    pub vertical_velocity: f32,
    pub planar_velocity: Vec2,
    pub total_mass: f32,
    pub coupled_mass: f32,
    pub ballast_units: u32,
    pub rig: RigMove,
    pub swim: HorizontalStepDebug,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionReport {
    pub stage: String,
    pub frames: u64,
    pub sim_seconds: f32,
    pub final_head: Vec3,
    pub min_head_y: f32,
    pub max_head_y: f32,
    /// Path length swum in the XZ plane (m).
    pub distance: f32,
    pub final_ballast_units: u32,
    /// Frames in which any axis was refused by the rig.
    pub blocked_frames: u64,
}

/// Simulation state for one active stage. The host owns exactly one of
/// these per running stage; dropping it ends the stage.
#[derive(Debug, Clone)]
pub struct TrainingSession {
    stage: StageSpec,
    physics: HydroConfig,
    vertical: VerticalState,
    horizontal: HorizontalState,
    ballast: Ballast,
    rig: Rig,
}

impl TrainingSession {
    pub fn new(stage: StageSpec, physics: HydroConfig) -> Self {
        let rig = Rig::spawn(&stage);
        let head_y = rig.head(&stage).y;
        let bounds = stage.head_bounds;
        let start_y = head_y.max(bounds.min_y).min(bounds.max_y);
        Self {
            ballast: Ballast::from_spec(&physics.vertical),
            vertical: VerticalState::at_rest(start_y),
            horizontal: HorizontalState::default(),
            rig,
            stage,
            physics,
        }
    }

    pub fn stage(&self) -> &StageSpec {
        &self.stage
    }

    pub fn ballast(&self) -> Ballast {
        self.ballast
    }

    pub fn head(&self) -> Vec3 {
        self.rig.head(&self.stage)
    }

    pub fn time(&self) -> f32 {
        self.vertical.elapsed_time
    }

    pub fn vertical(&self) -> &VerticalState {
        &self.vertical
    }

    pub fn horizontal(&self) -> &HorizontalState {
        &self.horizontal
    }

    /// Advance one rendered frame.
    pub fn tick(&mut self, dt: f32, input: &FrameInput) -> FrameReport {
        let dt = sanitize_dt(dt);
        if input.ballast_delta != 0 {
            self.ballast.adjust(input.ballast_delta);
            debug!(units = self.ballast.units(), kg = self.ballast.mass_kg(), "ballast adjusted");
        }

        let vy = self.vertical.step(
            &self.physics.vertical,
            dt,
            self.ballast.units(),
            self.stage.head_bounds,
        );
        let coupled_mass = self.physics.coupling.coupled_mass(vy.total_mass);

        let mut swim = HorizontalStepDebug::default();
        let inputs = HorizontalInputs {
            dt,
            facing: input.facing,
            commands: input.commands,
            eff_mass: Some(coupled_mass),
            position: self.rig.planar(),
            time: self.vertical.elapsed_time,
            bounds: Some(self.stage.pool),
        };
        let d = step_horizontal_dbg(
            &self.physics.horizontal,
            &inputs,
            &mut self.horizontal,
            Some(&mut swim),
        );

        let rig = self.rig.apply(&self.stage, d, vy.new_y);
        let head = self.rig.head(&self.stage);
        if rig.blocked_y {
            // Stopped by an obstacle above/below: keep physics in step with the rig.
            self.vertical.depth_position = head.y;
            self.vertical.vertical_velocity = 0.0;
        }

        FrameReport {
            time: self.vertical.elapsed_time,
            head,
            vertical_velocity: self.vertical.vertical_velocity,
            planar_velocity: self.horizontal.velocity,
            total_mass: vy.total_mass,
            coupled_mass,
            ballast_units: self.ballast.units(),
            rig,
            swim,
        }
    }
}

/// Run a full scripted session described by `cfg`.
pub fn run_session(cfg: &Config) -> Result<SessionReport> {
    cfg.validate()?;
    let stage = cfg.resolve_stage()?;
    info!(stage = %stage.name, seconds = cfg.seconds, dt = cfg.dt, "session starting");

    let mut session = TrainingSession::new(stage, cfg.physics.clone());
    let mut script = ScriptPlayer::new(cfg.script.clone());

    let frames = (cfg.seconds / cfg.dt).round() as u64;
    if frames == 0 {
        warn!(seconds = cfg.seconds, dt = cfg.dt, "session shorter than one frame");
    }
    let start = session.head();
    let mut report = SessionReport {
        stage: session.stage().name.clone(),
        frames,
        sim_seconds: 0.0,
        final_head: start,
        min_head_y: start.y,
        max_head_y: start.y,
        distance: 0.0,
        final_ballast_units: session.ballast().units(),
        blocked_frames: 0,
    };

    let mut last_planar = Vec2::new(start.x, start.z);
    for frame in 0..frames {
        let input = script.input_at(session.time());
        let f = session.tick(cfg.dt, &input);

        let planar = Vec2::new(f.head.x, f.head.z);
        report.distance += (planar - last_planar).length();
        last_planar = planar;
        report.min_head_y = report.min_head_y.min(f.head.y);
        report.max_head_y = report.max_head_y.max(f.head.y);
        if f.rig.any() {
            report.blocked_frames += 1;
        }

        if cfg.telemetry_every > 0 && frame % cfg.telemetry_every as u64 == 0 {
            debug!(
                t = f.time,
                x = f.head.x,
                y = f.head.y,
                z = f.head.z,
                vy = f.vertical_velocity,
                vx = f.planar_velocity.x,
                vz = f.planar_velocity.y,
                thrust = f.swim.thrust,
                flow_x = f.swim.flow.x,
                flow_z = f.swim.flow.y,
                ballast = f.ballast_units,
                mass = f.coupled_mass,
                "frame"
            );
        }
    }

    report.sim_seconds = session.time();
    report.final_head = session.head();
    report.final_ballast_units = session.ballast().units();
    info!(
        frames = report.frames,
        distance = report.distance,
        min_y = report.min_head_y,
        max_y = report.max_head_y,
        blocked = report.blocked_frames,
        "session finished"
    );
    Ok(report)
}
