use list_pad_config::AppConfig;
use list_pad_mod_history::RedoPolicy;

#[test]
fn test_load_creates_default_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("list-pad.json");
    assert!(!path.exists());

    let config = AppConfig::load_or_create(&path);
    assert!(path.exists());
    assert_eq!(config, AppConfig::default());

    // File should contain valid JSON
    let contents = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert!(parsed.is_object());
}

#[test]
fn test_load_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("list-pad.json");

    AppConfig::load_or_create(&path);
    assert!(path.exists());
}

#[test]
fn test_load_existing_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("list-pad.json");
    let json = r#"{
        "current_theme": "Dark",
        "redo_policy": "Legacy",
        "traverse_separator": " | ",
        "font_size": 20.0,
        "show_indices": false
    }"#;
    std::fs::write(&path, json).unwrap();

    let config = AppConfig::load_or_create(&path);
    assert_eq!(config.current_theme, "Dark");
    assert_eq!(config.redo_policy, RedoPolicy::Legacy);
    assert_eq!(config.traverse_separator, " | ");
    assert!((config.font_size - 20.0).abs() < f32::EPSILON);
    assert!(!config.show_indices);
}

#[test]
fn test_broken_json_returns_defaults_and_keeps_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("list-pad.json");
    let broken = "{ this is not valid json }}}";
    std::fs::write(&path, broken).unwrap();

    let config = AppConfig::load_or_create(&path);
    assert_eq!(config, AppConfig::default());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), broken);
}

#[test]
fn test_unknown_redo_policy_returns_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("list-pad.json");
    std::fs::write(&path, r#"{"redo_policy": "Sideways"}"#).unwrap();

    let config = AppConfig::load_or_create(&path);
    assert_eq!(config.redo_policy, RedoPolicy::Linear);
}

#[test]
fn test_loaded_values_are_sanitized() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("list-pad.json");
    std::fs::write(
        &path,
        r#"{"font_size": 500.0, "current_theme": "Neon", "traverse_separator": ""}"#,
    )
    .unwrap();

    let config = AppConfig::load_or_create(&path);
    assert!((config.font_size - 48.0).abs() < f32::EPSILON);
    assert_eq!(config.current_theme, "System");
    assert_eq!(config.traverse_separator, " -> ");
}

#[test]
fn test_save_then_load_preserves_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("list-pad.json");

    let mut config = AppConfig::default();
    config.current_theme = "Light".to_string();
    config.redo_policy = RedoPolicy::Legacy;
    config.show_indices = false;
    config.save(&path).unwrap();

    let loaded = AppConfig::load_or_create(&path);
    assert_eq!(loaded, config);
}

#[test]
fn test_config_path_resolution_order() {
    // Only test in this binary that touches LIST_PAD_CONFIG
    let custom = std::env::temp_dir().join("custom-list-pad.json");
    std::env::set_var("LIST_PAD_CONFIG", &custom);
    assert_eq!(AppConfig::config_path(), custom);

    std::env::set_var("LIST_PAD_CONFIG", "");
    let expected = dirs::config_dir()
        .map(|d| d.join("list-pad").join("list-pad.json"))
        .unwrap_or_else(|| std::path::PathBuf::from("list-pad.json"));
    assert_eq!(AppConfig::config_path(), expected);

    std::env::remove_var("LIST_PAD_CONFIG");
    assert_eq!(AppConfig::config_path(), expected);
}
