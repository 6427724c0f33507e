use super::*;

#[test]
fn defaults_match_page_contract() {
    let config = ThemeConfig::default();
    assert_eq!(config.control_id, "dark-mode-checkbox");
    assert_eq!(config.storage_key, "theme");
    assert_eq!(config.media_query, "(prefers-color-scheme: dark)");
}

#[test]
fn blank_json_is_default() {
    assert_eq!(ThemeConfig::from_json(""), Ok(ThemeConfig::default()));
    assert_eq!(ThemeConfig::from_json("  \n"), Ok(ThemeConfig::default()));
}

#[test]
fn empty_object_is_default() {
    assert_eq!(ThemeConfig::from_json("{}"), Ok(ThemeConfig::default()));
}

#[test]
fn partial_object_keeps_other_defaults() {
    let config = ThemeConfig::from_json(r#"{"storage_key":"site-theme"}"#).unwrap();
    assert_eq!(config.storage_key, "site-theme");
    assert_eq!(config.control_id, DEFAULT_CONTROL_ID);
}

#[test]
fn malformed_json_is_config_error() {
    let err = ThemeConfig::from_json("{storage_key:").unwrap_err();
    assert!(matches!(err, ThemeError::Config(_)));
}

#[test]
fn unknown_field_rejected() {
    let err = ThemeConfig::from_json(r#"{"storage":"x"}"#).unwrap_err();
    assert!(matches!(err, ThemeError::Config(_)));
}

#[test]
fn empty_field_rejected() {
    let err = ThemeConfig::from_json(r#"{"control_id":" "}"#).unwrap_err();
    assert_eq!(err, ThemeError::Config("control_id must not be empty".into()));
}

#[test]
fn no_config_element_is_default() {
    assert_eq!(ThemeConfig::from_embedded(None), Ok(ThemeConfig::default()));
}

#[test]
fn empty_config_element_is_default() {
    assert_eq!(ThemeConfig::from_embedded(Some("")), Ok(ThemeConfig::default()));
}

#[test]
fn config_element_overrides_defaults() {
    let config = ThemeConfig::from_embedded(Some(r#"{"control_id":"night-mode"}"#)).unwrap();
    assert_eq!(config.control_id, "night-mode");
    assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
}

#[test]
fn invalid_config_element_is_error() {
    let err = ThemeConfig::from_embedded(Some("not json")).unwrap_err();
    assert!(matches!(err, ThemeError::Config(_)));
}
