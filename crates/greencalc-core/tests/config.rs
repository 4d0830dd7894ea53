use std::io::Write;
use std::path::PathBuf;

use greencalc_core::{GreencalcConfig, LoadError, TableKind};

#[test]
fn defaults_point_at_bundled_file_names() {
    let config = GreencalcConfig::default();
    assert_eq!(config.data_dir, PathBuf::from("data"));
    assert_eq!(
        config.table_path(TableKind::Cpu),
        PathBuf::from("data/CPUs-manual.csv")
    );
    assert_eq!(
        config.table_path(TableKind::Location),
        PathBuf::from("data/CI-carbonfootprint-yearly_2023.csv")
    );
    assert_eq!(config.file_name(TableKind::Pue), "default-PUE_2024.csv");
}

#[test]
fn toml_overrides_selected_fields() {
    let config = GreencalcConfig::from_toml_str(
        r#"
        data_dir = "/srv/greencalc"
        pue_file = "pue-2025.csv"
        "#,
    )
    .expect("config TOML");

    assert_eq!(
        config.table_path(TableKind::Pue),
        PathBuf::from("/srv/greencalc/pue-2025.csv")
    );
    assert_eq!(config.gpu_file, "GPUs-manual.csv");
}

#[test]
fn empty_file_name_is_rejected() {
    let err = GreencalcConfig::from_toml_str("gpu_file = \"  \"").expect_err("should fail");
    match err {
        LoadError::Config(message) => assert!(message.contains("gpu_file")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_toml_is_reported() {
    let err = GreencalcConfig::from_toml_str("data_dir = [").expect_err("should fail");
    assert!(matches!(err, LoadError::ConfigToml(_)));
}

#[test]
fn data_dir_override_replaces_configured_directory() {
    let config = GreencalcConfig::default().with_data_dir_override(Some("/tmp/tables".into()));
    assert_eq!(config.data_dir, PathBuf::from("/tmp/tables"));

    let untouched = GreencalcConfig::default().with_data_dir_override(Some("   ".into()));
    assert_eq!(untouched.data_dir, PathBuf::from("data"));

    let absent = GreencalcConfig::default().with_data_dir_override(None);
    assert_eq!(absent, GreencalcConfig::default());
}

#[test]
fn reads_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "data_dir = \"reference\"").expect("write config");

    let config = GreencalcConfig::from_file(file.path()).expect("config file");
    assert_eq!(config.data_dir, PathBuf::from("reference"));
}

#[test]
fn missing_config_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = GreencalcConfig::from_file(&dir.path().join("absent.toml")).expect_err("missing");
    assert!(matches!(err, LoadError::ConfigIo { .. }));
}
