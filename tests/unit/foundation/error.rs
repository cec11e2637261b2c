use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        GargantaError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        GargantaError::surface("x")
            .to_string()
            .contains("surface error:")
    );
    assert!(
        GargantaError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(GargantaError::host("x").to_string().contains("host error:"));
    assert!(
        GargantaError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = GargantaError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
