//! Tests for configuration loading

use std::io::Write;

use tempfile::NamedTempFile;

use super::*;
use crate::example_list::{EXAMPLES, ExampleModel};

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_config_path_ends_with_wellchat_config() {
    if let Some(path) = config_path() {
        assert!(path.ends_with(".config/wellchat/config.toml"));
    }
}

#[test]
fn test_load_from_explicit_path() {
    let file = write_config(
        r#"
[examples]
title = "Examples"
entries = [
  { text = "Wellbore 1007", value = "Tell me about wellbore 1007?" },
  { text = "Who operates wellbore 1014?" },
]
"#,
    );

    let config = load_config(Some(file.path())).unwrap();
    let list = config.build_example_list();

    assert_eq!(list.title(), "Examples");
    assert_eq!(
        list.examples(),
        &[
            ExampleModel::new("Wellbore 1007", "Tell me about wellbore 1007?"),
            ExampleModel::new("Who operates wellbore 1014?", "Who operates wellbore 1014?"),
        ]
    );
}

#[test]
fn test_empty_file_gives_defaults() {
    let file = write_config("");

    let config = load_config_from_path(file.path()).unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(config.build_example_list().examples(), EXAMPLES);
}

#[test]
fn test_missing_explicit_path_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let result = load_config(Some(path.as_path()));

    assert!(matches!(result, Err(WellchatError::ConfigRead { .. })));
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let file = write_config("[examples\ntitle = ");

    let result = load_config_from_path(file.path());

    match result {
        Err(WellchatError::ConfigParse { path, .. }) => assert_eq!(path, file.path()),
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_wrong_type_is_parse_error() {
    let file = write_config("[examples]\ntitle = 3\n");

    let result = load_config_from_path(file.path());

    assert!(matches!(result, Err(WellchatError::ConfigParse { .. })));
}

#[test]
fn test_parse_config_directly() {
    let config = parse_config("[examples]\nentries = []\n").unwrap();
    assert_eq!(config.examples.entries, Some(Vec::new()));
}
