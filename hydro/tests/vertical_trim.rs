use hydro::{step_vertical, VerticalBounds, VerticalInputs, VerticalSpec, VerticalState};

const DT: f32 = 1.0 / 60.0;

fn pool_bounds() -> VerticalBounds {
    VerticalBounds::new(1.75, 12.0)
}

#[test]
fn unweighted_trainee_holds_depth_for_one_frame() {
    let spec = VerticalSpec::default();
    let out = step_vertical(
        &spec,
        VerticalInputs { dt: DT, y: 2.0, vy: 0.0, ballast_units: 0, bounds: pool_bounds(), time: 0.0 },
    );
    assert!((out.new_y - 2.0).abs() < 0.003, "new_y={}", out.new_y);
    assert!(out.new_vy.abs() < 0.01, "new_vy={}", out.new_vy);
}

#[test]
fn heavy_ballast_sinks_monotonically_to_floor() {
    let spec = VerticalSpec::default();
    let bounds = pool_bounds();
    let mut state = VerticalState::at_rest(2.0);

    let first = state.step(&spec, DT, 10, bounds);
    assert!(first.new_vy < 0.0, "expected sinking, vy={}", first.new_vy);

    let mut prev = first.new_y;
    let mut landed = false;
    for _ in 0..(5 * 60) {
        let out = state.step(&spec, DT, 10, bounds);
        if landed {
            assert_eq!(out.new_y, bounds.min_y, "left the floor after landing");
            assert_eq!(out.new_vy, 0.0);
        } else if out.new_y == bounds.min_y {
            landed = true;
        } else {
            assert!(out.new_y < prev, "height rose while sinking: {} -> {}", prev, out.new_y);
        }
        prev = out.new_y;
    }
    assert!(landed, "never reached the floor, y={prev}");
}

#[test]
fn neutral_trim_stays_within_wobble_envelope() {
    // Heavier kit balanced by extra displaced volume: 10 ballast units is neutral.
    let mut spec = VerticalSpec::default();
    spec.rigid_volume_m3 = Some((spec.astronaut_mass + spec.suit_mass + 10.0) / spec.rho);
    let units = (spec.neutral_ballast_kg() / spec.ballast_step_kg).round() as u32;
    assert_eq!(units, 10);

    let bounds = VerticalBounds::new(-50.0, 50.0);
    let mut state = VerticalState::at_rest(5.0);
    let mut early_peak = 0.0_f32;
    let mut late_peak = 0.0_f32;
    let frames = 60 * 60;
    for i in 0..frames {
        let out = state.step(&spec, DT, units, bounds);
        let speed = out.new_vy.abs();
        assert!(speed < 0.1, "vy={} at frame {}", out.new_vy, i);
        if i < frames / 3 {
            early_peak = early_peak.max(speed);
        } else if i >= 2 * frames / 3 {
            late_peak = late_peak.max(speed);
        }
    }
    assert!(late_peak <= early_peak + 1e-3, "oscillation grew: early={early_peak} late={late_peak}");

    // Off-trim by ten units leaves the envelope quickly.
    let mut heavy = VerticalState::at_rest(5.0);
    for _ in 0..(10 * 60) {
        heavy.step(&spec, DT, units + 10, bounds);
    }
    assert!(heavy.vertical_velocity < -0.3, "vy={}", heavy.vertical_velocity);
}

#[test]
fn dropped_frame_matches_fallback_step() {
    let spec = VerticalSpec::default();
    let mut a = VerticalState::at_rest(6.0);
    let mut b = VerticalState::at_rest(6.0);
    for _ in 0..30 {
        a.step(&spec, DT, 4, pool_bounds());
        b.step(&spec, f32::NAN, 4, pool_bounds());
    }
    assert_eq!(a, b);
}
