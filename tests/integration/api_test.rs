//! End-to-end tests against the library API

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use std::fs;
use std::io::Write;
use tempfile::tempdir;
use tsv2json::{convert_file, convert_str, ConvertError};

#[test]
fn test_convert_file_end_to_end() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("scenarios.tsv");
    let output = dir.path().join("scenarios.json");

    let mut f = fs::File::create(&input).unwrap();
    write!(f, "id\tname\n1\tAlice\n2\tBob\n").unwrap();

    let data = convert_file(&input, &output).unwrap();
    assert_eq!(data.metadata.record_count, 2);

    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(content, data.content);

    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 2);
    assert_eq!(value[0]["name"], "Alice");
    assert_eq!(value[1]["name"], "Bob");
}

#[test]
fn test_convert_file_twice_is_byte_identical() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.tsv");
    let out_a = dir.path().join("a.json");
    let out_b = dir.path().join("b.json");

    let mut f = fs::File::create(&input).unwrap();
    write!(f, "id\tname\n1\tAlice\n").unwrap();

    convert_file(&input, &out_a).unwrap();
    convert_file(&input, &out_b).unwrap();

    assert_eq!(fs::read(&out_a).unwrap(), fs::read(&out_b).unwrap());
}

#[test]
fn test_convert_file_missing_source() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("absent.tsv");
    let output = dir.path().join("absent.json");

    let result = convert_file(&input, &output);
    assert_matches!(result, Err(ConvertError::NotFound { .. }));
    assert!(!output.exists());
}

#[test]
fn test_convert_str_scenario() {
    let json = convert_str("id\tname\n1\tAlice\n2\tBob\n").unwrap();
    let expected = "\
[
  {
    \"id\": \"1\",
    \"name\": \"Alice\"
  },
  {
    \"id\": \"2\",
    \"name\": \"Bob\"
  }
]";
    assert_eq!(json, expected);
}

#[test]
fn test_convert_str_header_only() {
    assert_eq!(convert_str("id\tname\n").unwrap(), "[]");
}
