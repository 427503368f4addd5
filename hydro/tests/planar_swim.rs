use bevy_math::{Vec2, Vec3};
use hydro::{
    step_horizontal, CurrentSpec, HorizontalInputs, HorizontalSpec, HorizontalState, MoveCommands,
};

const DT: f32 = 1.0 / 60.0;
const BODY_MASS: f32 = 227.9;

struct Swimmer {
    state: HorizontalState,
    position: Vec2,
    time: f32,
}

impl Swimmer {
    fn new(position: Vec2) -> Self {
        Self { state: HorizontalState::default(), position, time: 0.0 }
    }

    fn step(&mut self, spec: &HorizontalSpec, facing: Vec3, commands: MoveCommands) -> Vec2 {
        self.time += DT;
        let inputs = HorizontalInputs {
            dt: DT,
            facing,
            commands,
            eff_mass: Some(BODY_MASS),
            position: self.position,
            time: self.time,
            bounds: None,
        };
        let d = step_horizontal(spec, &inputs, &mut self.state);
        self.position += d;
        d
    }
}

#[test]
fn forward_swim_reaches_top_speed_heading_straight() {
    let spec = HorizontalSpec::default();
    let mut swimmer = Swimmer::new(Vec2::new(-1.02, 15.06));
    let forward = Vec2::new(0.0, -1.0);
    let ramp_frames = ((3.0 * spec.thrust_rise_tau) / DT).ceil() as usize;

    for frame in 0..120 {
        let d = swimmer.step(&spec, Vec3::NEG_Z, MoveCommands::FORWARD);
        if frame >= ramp_frames {
            let angle = d.normalize().dot(forward).clamp(-1.0, 1.0).acos();
            assert!(angle < 10f32.to_radians(), "frame {frame}: heading off by {} deg", angle.to_degrees());
        }
    }

    let v_fwd = swimmer.state.velocity.dot(forward);
    assert!(v_fwd >= 0.95 * spec.vmax_fwd, "forward speed {v_fwd} after 2 s");
    assert!(v_fwd <= spec.vmax_fwd + 1e-5);
}

#[test]
fn forward_speed_never_exceeds_limit_even_boosted() {
    let spec = HorizontalSpec::default();
    let mut swimmer = Swimmer::new(Vec2::new(3.0, -4.0));
    let cmd = MoveCommands { boost: true, ..MoveCommands::FORWARD };
    let facing = Vec3::new(0.6, 0.0, 0.8);
    let fwd = Vec2::new(0.6, 0.8);
    for _ in 0..(10 * 60) {
        swimmer.step(&spec, facing, cmd);
        let v = swimmer.state.velocity.dot(fwd);
        assert!(v <= spec.vmax_fwd + 1e-5, "v_fwd={v}");
    }
    assert!(swimmer.state.velocity.dot(fwd) > 0.95 * spec.vmax_fwd);
}

#[test]
fn side_speed_never_exceeds_limit() {
    let spec = HorizontalSpec { current: CurrentSpec::still(), ..HorizontalSpec::default() };
    let mut swimmer = Swimmer::new(Vec2::ZERO);
    let cmd = MoveCommands { left: true, ..Default::default() };
    let right = Vec2::new(1.0, 0.0);
    for _ in 0..(10 * 60) {
        swimmer.step(&spec, Vec3::NEG_Z, cmd);
        let v = swimmer.state.velocity.dot(right);
        assert!(v >= -spec.vmax_side - 1e-5, "v_side={v}");
    }
    assert!(swimmer.state.velocity.dot(right) < -0.95 * spec.vmax_side);
}

#[test]
fn releasing_keys_coasts_to_exact_stop() {
    let spec = HorizontalSpec { current: CurrentSpec::still(), ..HorizontalSpec::default() };
    let mut swimmer = Swimmer::new(Vec2::ZERO);
    for _ in 0..60 {
        swimmer.step(&spec, Vec3::NEG_Z, MoveCommands::FORWARD);
    }
    // Pure quadratic drag decays slowly near rest; allow a few minutes.
    let mut stopped = false;
    for _ in 0..(240 * 60) {
        let d = swimmer.step(&spec, Vec3::NEG_Z, MoveCommands::default());
        if d == Vec2::ZERO {
            stopped = true;
            break;
        }
    }
    assert!(stopped, "still drifting at {:?}", swimmer.state.velocity);
    assert_eq!(swimmer.state.velocity, Vec2::ZERO);
}

#[test]
fn identical_runs_are_bit_identical() {
    let spec = HorizontalSpec::default();
    let script = |i: usize| -> (Vec3, MoveCommands) {
        let yaw = i as f32 * 0.01;
        let facing = Vec3::new(yaw.sin(), 0.1, -yaw.cos());
        let cmd = match (i / 40) % 3 {
            0 => MoveCommands::FORWARD,
            1 => MoveCommands { right: true, boost: true, ..Default::default() },
            _ => MoveCommands::default(),
        };
        (facing, cmd)
    };

    let mut a = Swimmer::new(Vec2::new(1.0, 2.0));
    let mut b = Swimmer::new(Vec2::new(1.0, 2.0));
    for i in 0..400 {
        let (facing, cmd) = script(i);
        let da = a.step(&spec, facing, cmd);
        let db = b.step(&spec, facing, cmd);
        assert_eq!(da.x.to_bits(), db.x.to_bits());
        assert_eq!(da.y.to_bits(), db.y.to_bits());
    }
    assert_eq!(a.state, b.state);
}
