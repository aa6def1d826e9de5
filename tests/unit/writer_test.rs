use pretty_assertions::assert_eq;
use tsv2json::{ConversionEngine, ConvertConfig};

#[test]
fn test_custom_indent_width() {
    let config = ConvertConfig::default().with_indent_size(4).unwrap();
    let engine = ConversionEngine::new(config);
    let data = engine.convert_str("id\n1\n").unwrap();

    assert_eq!(data.as_str(), "[\n    {\n        \"id\": \"1\"\n    }\n]");
}

#[test]
fn test_compact_output() {
    let config = ConvertConfig::default().with_pretty(false);
    let engine = ConversionEngine::new(config);
    let data = engine.convert_str("id\tname\n1\tAlice\n").unwrap();

    assert_eq!(data.as_str(), r#"[{"id":"1","name":"Alice"}]"#);
}

#[test]
fn test_output_has_no_trailing_newline() {
    let engine = ConversionEngine::new(ConvertConfig::default());
    let data = engine.convert_str("id\n1\n").unwrap();
    assert!(!data.as_str().ends_with('\n'));
}

#[test]
fn test_empty_field_values_survive() {
    let engine = ConversionEngine::new(ConvertConfig::default());
    let data = engine.convert_str("a\tb\n\tvalue\n").unwrap();

    let value: serde_json::Value = serde_json::from_str(data.as_str()).unwrap();
    assert_eq!(value[0]["a"], "");
    assert_eq!(value[0]["b"], "value");
}
