use super::*;
use tempfile::tempdir;

#[test]
fn test_parse_minimal_config() {
    let config = Config::from_yaml("name: warehouse").unwrap();
    assert_eq!(config.name, "warehouse");
    assert_eq!(config.database.path, ":memory:");
    assert_eq!(config.bronze_schema, "bronze");
    assert_eq!(config.silver_schema, "silver");
    assert!(config.as_of.is_none());
}

#[test]
fn test_parse_full_config() {
    let yaml = r#"
name: crm_erp_warehouse
database:
  path: "./warehouse.duckdb"
bronze_schema: raw
silver_schema: clean
as_of: 2024-03-01
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.database.path, "./warehouse.duckdb");
    assert_eq!(config.bronze_schema, "raw");
    assert_eq!(config.silver_schema, "clean");
    assert_eq!(config.as_of, NaiveDate::from_ymd_opt(2024, 3, 1));
}

#[test]
fn test_unknown_field_rejected() {
    let err = Config::from_yaml("name: test\nmaterialization: table").unwrap_err();
    assert!(matches!(err, CoreError::ConfigParseError(_)));
    assert_eq!(err.code(), "E002");
}

#[test]
fn test_empty_name_rejected() {
    let err = Config::from_yaml("name: '  '").unwrap_err();
    assert!(matches!(err, CoreError::ConfigInvalid { .. }));
}

#[test]
fn test_same_schema_rejected() {
    let err = Config::from_yaml("name: test\nbronze_schema: main\nsilver_schema: main").unwrap_err();
    assert!(err.to_string().contains("must differ"));
}

#[test]
fn test_empty_schema_rejected() {
    let err = Config::from_yaml("name: test\nsilver_schema: ''").unwrap_err();
    assert!(err.to_string().contains("silver_schema"));
}

#[test]
fn test_load_from_dir_prefers_yml() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("silverflow.yml"), "name: from_yml").unwrap();
    std::fs::write(dir.path().join("silverflow.yaml"), "name: from_yaml").unwrap();

    let config = Config::load_from_dir(dir.path()).unwrap();
    assert_eq!(config.name, "from_yml");
}

#[test]
fn test_load_from_dir_yaml_extension() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("silverflow.yaml"), "name: from_yaml").unwrap();

    let config = Config::load_from_dir(dir.path()).unwrap();
    assert_eq!(config.name, "from_yaml");
}

#[test]
fn test_load_missing_config() {
    let dir = tempdir().unwrap();
    let err = Config::load_from_dir(dir.path()).unwrap_err();
    assert!(matches!(err, CoreError::ConfigNotFound { .. }));
    assert!(err.to_string().starts_with("[E001]"));
}
