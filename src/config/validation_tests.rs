use super::*;

#[test]
fn default_config_is_valid() {
    assert!(validate_config(&Config::default()).is_ok());
}

#[test]
fn current_version_is_accepted() {
    let config = Config {
        version: Some("1".to_string()),
        ..Config::default()
    };
    assert!(validate_config(&config).is_ok());
}

#[test]
fn unknown_version_is_rejected() {
    let config = Config {
        version: Some("7".to_string()),
        ..Config::default()
    };
    let err = validate_config(&config).unwrap_err();
    assert!(err.to_string().contains("Unsupported config version '7'"));
}

#[test]
fn blank_token_is_rejected() {
    let mut config = Config::default();
    config.decommission.token = "  ".to_string();
    let err = validate_config(&config).unwrap_err();
    assert!(err.to_string().contains("decommission.token"));
}

#[test]
fn blank_comment_marker_is_rejected() {
    let config: Config = toml::from_str("[decommission]\ncomment_markers = [\"//\", \" \"]").unwrap();
    let err = validate_config(&config).unwrap_err();
    assert!(err.to_string().contains("decommission.comment_markers"));
}

#[test]
fn empty_comment_marker_is_rejected() {
    let mut config = Config::default();
    config.decommission.comment_markers.push(String::new());
    assert!(validate_config(&config).is_err());
}

#[test]
fn blank_parameter_name_is_rejected() {
    let mut config = Config::default();
    config.parameter.name = String::new();
    assert!(validate_config(&config).is_err());
}

#[test]
fn retained_environment_matching_token_is_rejected() {
    let mut config = Config::default();
    config.retention.environments.push("DEV2".to_string());
    let err = validate_config(&config).unwrap_err();
    assert!(err.to_string().contains("DEV2"));
}

#[test]
fn duplicate_environment_is_rejected() {
    let mut config = Config::default();
    config.retention.environments = vec!["dev1".to_string(), "dev1".to_string()];
    let err = validate_config(&config).unwrap_err();
    assert!(err.to_string().contains("retention.environments"));
}

#[test]
fn duplicate_required_variable_is_rejected() {
    let mut config = Config::default();
    config
        .retention
        .required_variables
        .push("NAMESPACE".to_string());
    assert!(validate_config(&config).is_err());
}
