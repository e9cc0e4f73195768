use super::*;

use crate::host::element::MAX_ANCESTRY_DEPTH;

fn stamp(now: f64) -> TickStamp {
    TickStamp::new(now, 1.0 / 60.0).unwrap()
}

#[test]
fn button_inside_link_classifies_as_button() {
    // <a><button>…</button></a>, leaf first.
    let path = [ElementRole::Button, ElementRole::Link, ElementRole::Generic];
    assert_eq!(classify(&path), CursorVariant::Button);
}

#[test]
fn video_wins_over_link_but_not_button() {
    let video_in_link = [ElementRole::Video, ElementRole::Link];
    assert_eq!(classify(&video_in_link), CursorVariant::Video);

    let button_over_video = [ElementRole::Video, ElementRole::Button];
    assert_eq!(classify(&button_over_video), CursorVariant::Button);
}

#[test]
fn images_are_not_videos() {
    let path = [ElementRole::Image, ElementRole::Link];
    assert_eq!(classify(&path), CursorVariant::Link);
    assert_eq!(classify(&[ElementRole::Image]), CursorVariant::Default);
}

#[test]
fn plain_text_classifies_as_default() {
    let path = [ElementRole::Text, ElementRole::Generic, ElementRole::Generic];
    assert_eq!(classify(&path), CursorVariant::Default);
    assert_eq!(classify(&[]), CursorVariant::Default);
}

#[test]
fn roles_beyond_the_ancestry_bound_are_ignored() {
    let mut path = vec![ElementRole::Generic; MAX_ANCESTRY_DEPTH];
    path.push(ElementRole::Button);
    assert_eq!(classify(&path), CursorVariant::Default);
}

#[test]
fn touch_device_mounts_no_cursor() {
    let mounted =
        CursorController::mount(&DeviceProfile::touch(), CursorTheme::default()).unwrap();
    assert!(mounted.is_none());
}

#[test]
fn desktop_device_mounts_with_default_variant() {
    let cursor = CursorController::mount(&DeviceProfile::desktop(), CursorTheme::default())
        .unwrap()
        .unwrap();
    assert_eq!(cursor.variant(), CursorVariant::Default);
}

#[test]
fn variant_tracks_the_hovered_chain() {
    let mut cursor = CursorController::mount(&DeviceProfile::desktop(), CursorTheme::default())
        .unwrap()
        .unwrap();

    cursor.pointer_moved(Point::new(10.0, 10.0), &[ElementRole::Link]);
    assert_eq!(cursor.variant(), CursorVariant::Link);

    cursor.pointer_moved(Point::new(10.0, 10.0), &[ElementRole::Text]);
    assert_eq!(cursor.variant(), CursorVariant::Default);
}

#[test]
fn ring_chases_the_dot() {
    let mut cursor = CursorController::mount(&DeviceProfile::desktop(), CursorTheme::default())
        .unwrap()
        .unwrap();
    cursor.pointer_moved(Point::new(300.0, 0.0), &[]);

    let mut frame = cursor.tick(stamp(0.0));
    for i in 1..20 {
        frame = cursor.tick(stamp(i as f64 / 60.0));
    }
    // The softer ring spring lags behind the dot mid-flight.
    assert!(frame.dot.x > frame.ring.x);
    assert!(frame.dot.x <= 300.0 + 1e-6);

    for i in 20..900 {
        frame = cursor.tick(stamp(i as f64 / 60.0));
    }
    assert!((frame.dot.x - 300.0).abs() < 0.01);
    assert!((frame.ring.x - 300.0).abs() < 0.01);
}

#[test]
fn frame_carries_the_variant_style() {
    let theme = CursorTheme::default();
    let mut cursor = CursorController::mount(&DeviceProfile::desktop(), theme)
        .unwrap()
        .unwrap();
    cursor.pointer_moved(Point::new(0.0, 0.0), &[ElementRole::Video]);
    let frame = cursor.tick(stamp(0.0));
    assert_eq!(frame.variant, CursorVariant::Video);
    assert_eq!(frame.style, theme.style(CursorVariant::Video));
    assert_eq!(frame.style.icon, Some(CursorIcon::Play));
}

#[test]
fn teardown_clears_signal_subscribers() {
    let mut cursor = CursorController::mount(&DeviceProfile::desktop(), CursorTheme::default())
        .unwrap()
        .unwrap();
    cursor.dot_signal().subscribe(|_| {});
    cursor.ring_signal().subscribe(|_| {});
    cursor.teardown();
    assert_eq!(cursor.dot_signal().subscriber_count(), 0);
    assert_eq!(cursor.ring_signal().subscriber_count(), 0);
}
