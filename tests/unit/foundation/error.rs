use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        KinetraError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(KinetraError::signal("x").to_string().contains("signal error:"));
    assert!(KinetraError::device("x").to_string().contains("device error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = KinetraError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
