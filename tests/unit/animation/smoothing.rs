use super::*;

fn settle(smoothing: Smoothing, target: f64, frames: usize) -> SmoothState<f64> {
    let mut state = SmoothState::at_rest(0.0);
    for _ in 0..frames {
        smoothing.step(&mut state, target, 1.0 / 60.0);
    }
    state
}

#[test]
fn spring_converges_on_target() {
    let state = settle(Smoothing::spring(150.0, 25.0), 100.0, 600);
    assert!((state.value - 100.0).abs() < 0.01);
    assert!(state.velocity.abs() < 0.01);
}

#[test]
fn exponential_converges_without_overshoot() {
    let smoothing = Smoothing::exponential(0.1);
    let mut state = SmoothState::at_rest(0.0);
    let mut prev = 0.0;
    for _ in 0..300 {
        smoothing.step(&mut state, 50.0, 1.0 / 60.0);
        assert!(state.value >= prev);
        assert!(state.value <= 50.0);
        prev = state.value;
    }
    assert!((state.value - 50.0).abs() < 1e-6);
}

#[test]
fn heavily_damped_spring_does_not_oscillate() {
    // Damping well past critical: the response must stay monotone.
    let smoothing = Smoothing::spring(100.0, 40.0);
    let mut state = SmoothState::at_rest(0.0);
    let mut prev = 0.0;
    for _ in 0..600 {
        smoothing.step(&mut state, 10.0, 1.0 / 60.0);
        assert!(state.value + 1e-9 >= prev);
        prev = state.value;
    }
}

#[test]
fn long_frame_is_substepped_stably() {
    // A 500ms frame (tab switch) must not blow up the integration.
    let smoothing = Smoothing::spring(200.0, 20.0);
    let mut state = SmoothState::at_rest(0.0);
    smoothing.step(&mut state, 1.0, 0.5);
    assert!(state.value.is_finite());
    assert!(state.value.abs() < 10.0);
}

#[test]
fn retarget_mid_flight_keeps_bounded_overshoot() {
    let smoothing = Smoothing::spring(150.0, 25.0);
    let mut state = SmoothState::at_rest(0.0);
    for _ in 0..10 {
        smoothing.step(&mut state, 100.0, 1.0 / 60.0);
    }
    // Rapid retargets back and forth must stay within the travel range
    // plus damped overshoot, never grow without bound.
    for i in 0..600 {
        let target = if i % 3 == 0 { 0.0 } else { 100.0 };
        smoothing.step(&mut state, target, 1.0 / 60.0);
        assert!(state.value > -50.0 && state.value < 150.0);
    }
}

#[test]
fn vec2_components_smooth_independently() {
    let smoothing = Smoothing::spring(150.0, 25.0);
    let mut state = SmoothState::at_rest(Vec2::ZERO);
    let target = Vec2::new(30.0, 0.0);
    for _ in 0..600 {
        smoothing.step(&mut state, target, 1.0 / 60.0);
    }
    assert!((state.value.x - 30.0).abs() < 0.01);
    assert!(state.value.y.abs() < 1e-9);
}

#[test]
fn zero_dt_is_a_no_op() {
    let smoothing = Smoothing::spring(150.0, 25.0);
    let mut state = SmoothState::at_rest(5.0);
    smoothing.step(&mut state, 100.0, 0.0);
    assert_eq!(state.value, 5.0);
}

#[test]
fn validate_rejects_bad_parameters() {
    assert!(Smoothing::spring(0.0, 10.0).validate().is_err());
    assert!(Smoothing::spring(100.0, -1.0).validate().is_err());
    assert!(Smoothing::exponential(0.0).validate().is_err());
    assert!(Smoothing::spring(150.0, 25.0).validate().is_ok());
}

#[test]
fn settled_detection_uses_value_and_velocity() {
    let mut state = SmoothState::at_rest(10.0);
    assert!(state.is_settled(10.0, 1e-3));
    state.velocity = 5.0;
    assert!(!state.is_settled(10.0, 1e-3));
    state.settle_on(20.0);
    assert!(state.is_settled(20.0, 1e-3));
}
