use clap::Parser;
use intergalactic_airways::{AirwaysConfig, Cli, ConfigError, API_BASE_URL};

#[test]
fn test_default_urls() {
    let config = AirwaysConfig::default();

    assert!(config.validate().is_ok());
    assert_eq!(config.people_url(), format!("{}people/?page=1", API_BASE_URL));
    assert_eq!(config.starships_url(), format!("{}starships/?page=1", API_BASE_URL));
    assert_eq!(config.logging.verbosity, 0);
    assert!(config.logging.api_log_path.is_none());
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config = AirwaysConfig::from_toml(
        r#"
        [api]
        base_url = "http://localhost:8080/api/"

        [logging]
        verbosity = 2
        "#,
    )
    .unwrap();

    assert_eq!(config.people_url(), "http://localhost:8080/api/people/?page=1");
    assert_eq!(config.logging.verbosity, 2);
    assert!(config.validate().is_ok());
}

#[test]
fn test_invalid_values_are_rejected() {
    let mut config = AirwaysConfig::default();
    config.api.base_url = "ftp://swapi.dev/api/".to_string();
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

    let mut config = AirwaysConfig::default();
    config.api.base_url = "https://swapi.dev/api".to_string();
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

    let mut config = AirwaysConfig::default();
    config.api.starships_path = " ".to_string();
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

    let mut config = AirwaysConfig::default();
    config.logging.verbosity = 3;
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

    let config = AirwaysConfig::from_toml("[api]\nuser_agent = \"airways\\nbot\"\n").unwrap();
    assert_eq!(config.api.user_agent, "airways\nbot");
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_loaded_config_remembers_its_file() {
    let path = std::env::temp_dir().join(format!("airways_loaded_{}.toml", std::process::id()));
    std::fs::write(&path, "[logging]\nverbosity = 1\n").unwrap();

    let config = AirwaysConfig::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(config.loaded_from.as_deref(), Some(path.as_path()));
    assert_eq!(config.logging.verbosity, 1);
    assert!(AirwaysConfig::default().loaded_from.is_none());
}

#[test]
fn test_bad_toml_is_a_parse_error() {
    assert!(matches!(AirwaysConfig::from_toml("[api\nbase_url ="), Err(ConfigError::Parse(_))));
}

#[test]
fn test_missing_config_file_is_an_error() {
    let result = AirwaysConfig::load("/definitely/not/here/airways.toml");
    assert!(matches!(result, Err(ConfigError::Io { .. })));
}

#[test]
fn test_cli_flags_override_file_values() {
    let path = std::env::temp_dir().join(format!("airways_config_{}.toml", std::process::id()));
    std::fs::write(&path, "[api]\nbase_url = \"http://file.example/api/\"\n").unwrap();

    let cli = Cli::parse_from([
        "intergalactic_airways",
        "--config",
        path.to_str().unwrap(),
        "--base-url",
        "http://flag.example/api/",
        "-vv",
        "--api-log",
        "calls.log",
    ]);
    let config = cli.resolve_config().unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(config.api.base_url, "http://flag.example/api/");
    assert_eq!(config.logging.verbosity, 2);
    assert_eq!(config.logging.api_log_path.as_deref(), Some(std::path::Path::new("calls.log")));
}

#[test]
fn test_cli_rejects_invalid_base_url() {
    let cli = Cli::parse_from(["intergalactic_airways", "--base-url", "swapi.dev"]);
    assert!(cli.resolve_config().is_err());
}
