use super::*;

use anyhow::Context as _;

#[test]
fn helpers_pick_the_matching_variant() {
    let err = InklingError::validation("brush radius must be at least 1");
    assert!(matches!(err, InklingError::Validation(_)));
    assert_eq!(
        err.to_string(),
        "validation error: brush radius must be at least 1"
    );
    assert!(matches!(
        InklingError::evaluation("classifier exited with status 1"),
        InklingError::Evaluation(_)
    ));
    assert!(
        InklingError::serde("line 3: expected value")
            .to_string()
            .starts_with("serialization error:")
    );
}

fn open_missing() -> InklingResult<std::fs::File> {
    let f = std::fs::File::open("/definitely/not/here.ndjson")
        .context("open drawing file")?;
    Ok(f)
}

#[test]
fn io_context_lands_in_other() {
    let err = open_missing().unwrap_err();
    assert!(matches!(err, InklingError::Other(_)));
    assert_eq!(err.to_string(), "open drawing file");
}
