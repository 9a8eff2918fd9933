use nova_config::{ConfigError, LoggingConfig, ResolutionConfig, ResolverConfig};
use pretty_assertions::assert_eq;

#[test]
fn empty_document_yields_defaults() {
    let config = ResolverConfig::from_toml_str("").unwrap();
    assert_eq!(config, ResolverConfig::default());
    assert!(!config.resolution.accept_incomplete_ancestors);
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.json);
    assert!(config.logging.stderr);
}

#[test]
fn explicit_values_are_read() {
    let config = ResolverConfig::from_toml_str(
        r#"
[resolution]
accept_incomplete_ancestors = true

[logging]
level = "nova.types=debug"
json = true
"#,
    )
    .unwrap();

    assert_eq!(
        config,
        ResolverConfig {
            resolution: ResolutionConfig {
                accept_incomplete_ancestors: true,
            },
            logging: LoggingConfig {
                level: "nova.types=debug".to_string(),
                json: true,
                stderr: true,
            },
        }
    );
}

#[test]
fn load_reads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nova-types.toml");
    std::fs::write(&path, "[resolution]\naccept_incomplete_ancestors = true\n").unwrap();

    let config = ResolverConfig::load(&path).unwrap();
    assert!(config.resolution.accept_incomplete_ancestors);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ResolverConfig::load(dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn wrong_value_type_is_a_toml_error() {
    let err = ResolverConfig::from_toml_str("[logging]\njson = \"yes\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn tracing_can_be_initialized_more_than_once() {
    let config = ResolverConfig::from_toml_str("[logging]\nlevel = \"warning\"\nstderr = false\n").unwrap();
    nova_config::init_tracing(&config.logging);
    nova_config::init_tracing(&LoggingConfig::default());
    tracing::warn!(target: "nova.config", "still routed to the first subscriber");
}
