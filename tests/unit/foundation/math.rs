use super::*;

#[test]
fn lerp_endpoints_are_exact() {
    for (a, b) in [(0.0, 1.0), (-5.0, 3.0), (100.0, 100.0), (2.5, -7.25)] {
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
    }
}

#[test]
fn lerp_extrapolates_outside_unit_factor() {
    assert_eq!(lerp(0.0, 10.0, 1.5), 15.0);
    assert_eq!(lerp(0.0, 10.0, -0.5), -5.0);
}

#[test]
fn clamp_stays_within_bounds() {
    for v in [-1e9, -1.0, 0.0, 0.5, 1.0, 1e9] {
        let c = clamp(v, -1.0, 1.0);
        assert!((-1.0..=1.0).contains(&c));
    }
    assert_eq!(clamp(5.0, 0.0, 1.0), 1.0);
    assert_eq!(clamp(-5.0, 0.0, 1.0), 0.0);
}

#[test]
fn clamp_degenerate_bounds_collapse_to_min() {
    assert_eq!(clamp(0.5, 1.0, 0.0), 1.0);
}

#[test]
fn map_range_is_monotonic_for_increasing_domains() {
    let mut prev = f64::NEG_INFINITY;
    for i in 0..=20 {
        let v = map_range(i as f64 / 20.0, 0.0, 1.0, 10.0, 30.0);
        assert!(v >= prev);
        prev = v;
    }
}

#[test]
fn map_range_projects_endpoints() {
    assert_eq!(map_range(0.0, 0.0, 1.0, 10.0, 20.0), 10.0);
    assert_eq!(map_range(1.0, 0.0, 1.0, 10.0, 20.0), 20.0);
    assert_eq!(map_range(0.5, 0.0, 1.0, 0.0, 100.0), 50.0);
}

#[test]
fn map_range_zero_width_domain_returns_out_min() {
    let v = map_range(3.0, 2.0, 2.0, 7.0, 9.0);
    assert_eq!(v, 7.0);
    assert!(v.is_finite());
}

#[test]
fn lerp_trait_covers_vectors() {
    let v = <Vec2 as Lerp>::lerp(&Vec2::new(0.0, 10.0), &Vec2::new(10.0, 0.0), 0.5);
    assert_eq!(v, Vec2::new(5.0, 5.0));
    assert_eq!(<f32 as Lerp>::lerp(&1.0f32, &3.0f32, 0.5), 2.0f32);
}
