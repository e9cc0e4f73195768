use super::*;

fn desktop_probe() -> DeviceProbe {
    DeviceProbe {
        hover_media_query: Some(true),
        max_touch_points: Some(0),
        touch_events: false,
        coarse_pointer: Some(false),
        user_agent: Some("Mozilla/5.0 (X11; Linux x86_64) Gecko/20100101 Firefox/142.0".into()),
    }
}

#[test]
fn desktop_probe_enables_both_enhancements() {
    let profile = DeviceProfile::from_probe(&desktop_probe());
    assert!(profile.supports_custom_cursor());
    assert!(profile.allows_inertial_scroll());
    assert!(!profile.has_touch());
}

#[test]
fn touch_points_disable_inertial_scroll() {
    let probe = DeviceProbe {
        max_touch_points: Some(5),
        ..desktop_probe()
    };
    let profile = DeviceProfile::from_probe(&probe);
    assert!(profile.has_touch());
    assert!(!profile.allows_inertial_scroll());
    assert!(!profile.supports_custom_cursor());
}

#[test]
fn unknown_readings_fall_back_to_the_safe_side() {
    // Every reading unknown: no cursor, native scrolling.
    let profile = DeviceProfile::from_probe(&DeviceProbe::default());
    assert!(!profile.supports_custom_cursor());
    assert!(!profile.allows_inertial_scroll());
    assert!(!profile.has_hover());
}

#[test]
fn unknown_coarseness_with_known_hover_counts_as_fine() {
    let probe = DeviceProbe {
        coarse_pointer: None,
        ..desktop_probe()
    };
    let profile = DeviceProfile::from_probe(&probe);
    assert!(profile.allows_inertial_scroll());
}

#[test]
fn probe_parses_from_host_json() {
    let value = serde_json::json!({
        "hover-media-query": true,
        "max-touch-points": 0,
        "coarse-pointer": false,
        "user-agent": "Mozilla/5.0 (X11; Linux x86_64)"
    });
    let probe = DeviceProbe::from_json(&value).unwrap();
    // touch-events omitted: defaults to false.
    assert!(!probe.touch_events);
    let profile = DeviceProfile::from_probe(&probe);
    assert!(profile.allows_inertial_scroll());

    let err = DeviceProbe::from_json(&serde_json::json!({ "max-touch-points": "many" }));
    assert!(err.is_err());
}

#[test]
fn mobile_user_agents_are_recognized() {
    for ua in [
        "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)",
        "Mozilla/5.0 (Linux; Android 14; Pixel 8)",
        "Opera/9.80 (J2ME/MIDP; Opera Mini/9.80)",
        "Mozilla/5.0 (compatible; MSIE 10.0; Windows Phone 8.0; IEMobile/10.0)",
    ] {
        let probe = DeviceProbe {
            user_agent: Some(ua.into()),
            ..desktop_probe()
        };
        let profile = DeviceProfile::from_probe(&probe);
        assert!(!profile.allows_inertial_scroll(), "{ua}");
        assert!(!profile.supports_custom_cursor(), "{ua}");
    }
}

#[test]
fn desktop_user_agent_is_not_mobile() {
    let profile = DeviceProfile::from_probe(&desktop_probe());
    assert!(profile.allows_inertial_scroll());
}

#[test]
fn coarse_pointer_keeps_native_scroll() {
    let probe = DeviceProbe {
        coarse_pointer: Some(true),
        ..desktop_probe()
    };
    let profile = DeviceProfile::from_probe(&probe);
    assert!(!profile.allows_inertial_scroll());
}

#[test]
fn fixture_profiles_match_their_class() {
    assert!(DeviceProfile::desktop().allows_inertial_scroll());
    assert!(DeviceProfile::desktop().supports_custom_cursor());
    assert!(!DeviceProfile::touch().allows_inertial_scroll());
    assert!(!DeviceProfile::touch().supports_custom_cursor());
}
