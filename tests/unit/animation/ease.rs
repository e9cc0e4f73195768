use super::*;

const ALL: [Ease; 8] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::OutExpo,
];

#[test]
fn curves_pin_the_unit_endpoints() {
    for ease in ALL {
        assert!(ease.apply(0.0).abs() < 1e-3, "{ease:?} at t=0");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-9, "{ease:?} at t=1");
    }
}

#[test]
fn curves_are_monotonic() {
    for ease in ALL {
        let mut prev = 0.0;
        for i in 0..=50 {
            let v = ease.apply(i as f64 / 50.0);
            assert!(v >= prev, "{ease:?} not monotonic at step {i}");
            prev = v;
        }
    }
}

#[test]
fn input_is_clamped_to_unit_interval() {
    for ease in ALL {
        assert_eq!(ease.apply(-2.0), ease.apply(0.0));
        assert_eq!(ease.apply(3.0), 1.0);
    }
}

#[test]
fn out_expo_is_exact_at_one() {
    // The raw formula leaves a 2^-10 residue; the curve must close it.
    assert_eq!(Ease::OutExpo.apply(1.0), 1.0);
    assert!((Ease::OutExpo.apply(0.5) - (1.0 - 2.0_f64.powf(-5.0))).abs() < 1e-12);
}

#[test]
fn serde_round_trips_kebab_names() {
    let json = serde_json::to_string(&Ease::OutExpo).unwrap();
    assert_eq!(json, "\"out-expo\"");
    let back: Ease = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Ease::OutExpo);
}
