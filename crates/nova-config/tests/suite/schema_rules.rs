use nova_config::json_schema;
use pretty_assertions::assert_eq;

#[test]
fn schema_lists_top_level_sections() {
    let value = serde_json::to_value(json_schema()).unwrap();
    let properties = value
        .pointer("/properties")
        .and_then(|v| v.as_object())
        .expect("root schema has properties");
    assert!(properties.contains_key("resolution"));
    assert!(properties.contains_key("logging"));
}

#[test]
fn schema_requires_non_blank_logging_level() {
    let value = serde_json::to_value(json_schema()).unwrap();
    let all_of = value
        .pointer("/allOf")
        .and_then(|v| v.as_array())
        .expect("root schema has semantic constraints");
    assert!(all_of.iter().any(|entry| {
        entry
            .pointer("/properties/logging/properties/level/pattern")
            .and_then(|v| v.as_str())
            == Some("\\S")
    }));
}

#[test]
fn resolution_section_denies_unknown_fields() {
    let value = serde_json::to_value(json_schema()).unwrap();
    assert_eq!(
        value.pointer("/definitions/ResolutionConfig/additionalProperties"),
        Some(&serde_json::Value::Bool(false))
    );
}
