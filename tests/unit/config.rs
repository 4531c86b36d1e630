use super::*;

#[test]
fn empty_object_yields_defaults() {
    let cfg = GameConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, GameConfig::default());
    assert_eq!(cfg.canvas_width, 1024);
    assert_eq!(cfg.canvas_height, 1024);
    assert_eq!(cfg.brush_radius, 10);
    assert_eq!(cfg.simplify_epsilon, 2.0);
    assert_eq!(cfg.classes, vec!["airplane", "ant", "axe", "bed"]);
    assert_eq!(cfg.output_path, PathBuf::from("PaintingHistory/Painting_0.ndjson"));
    assert_eq!(cfg.classifier.program, "python");
}

#[test]
fn partial_config_overrides_only_given_fields() {
    let cfg = GameConfig::from_json_str(
        r#"{"canvas_width":256,"classes":["bed"],"classifier":{"program":"./rate","args":[]}}"#,
    )
    .unwrap();
    assert_eq!(cfg.canvas_width, 256);
    assert_eq!(cfg.canvas_height, 1024);
    assert_eq!(cfg.classes, vec!["bed"]);
    assert_eq!(cfg.classifier, ClassifierCommand::new("./rate"));
}

#[test]
fn unknown_field_is_a_serde_error() {
    let err = GameConfig::from_json_str(r#"{"brush":3}"#).unwrap_err();
    assert!(matches!(err, InklingError::Serde(_)), "{err}");
}

#[test]
fn validate_rejects_bad_values() {
    let cases = [
        r#"{"canvas_height":0}"#,
        r#"{"brush_radius":0}"#,
        r#"{"simplify_epsilon":-1.0}"#,
        r#"{"classes":[]}"#,
        r#"{"classes":["ant"," "]}"#,
        r#"{"classifier":{"program":""}}"#,
    ];
    for json in cases {
        let err = GameConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, InklingError::Validation(_)), "{json}: {err}");
    }
}

#[test]
fn nan_epsilon_is_rejected() {
    let cfg = GameConfig {
        simplify_epsilon: f64::NAN,
        ..GameConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn from_path_reads_file_and_reports_missing() {
    let dir = std::env::temp_dir().join(format!(
        "inkling_config_{}",
        std::process::id()
    ));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("game.json");
    std::fs::write(&path, r#"{"brush_radius":4,"word_seed":7}"#).unwrap();

    let cfg = GameConfig::from_path(&path).unwrap();
    assert_eq!(cfg.brush_radius, 4);
    assert_eq!(cfg.word_seed, 7);

    let missing = GameConfig::from_path(&dir.join("nope.json")).unwrap_err();
    assert!(matches!(missing, InklingError::Other(_)));
}
