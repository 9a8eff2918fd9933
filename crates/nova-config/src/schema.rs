use schemars::schema::{RootSchema, Schema};
use schemars::schema_for;
use serde_json::json;

use crate::ResolverConfig;

/// JSON schema for the resolver TOML config, for editor tooling and CI validation.
#[must_use]
pub fn json_schema() -> RootSchema {
    let mut schema = schema_for!(ResolverConfig);
    apply_semantic_constraints(&mut schema);
    schema
}

fn apply_semantic_constraints(schema: &mut RootSchema) {
    // JSON Schema does not apply defaults, so this only triggers when `logging.level` is set.
    push_all_of(
        schema,
        json!({
            "properties": {
                "logging": {
                    "properties": {
                        "level": { "type": "string", "pattern": "\\S" }
                    }
                }
            }
        }),
    );
}

fn push_all_of(root: &mut RootSchema, value: serde_json::Value) {
    let Ok(schema) = serde_json::from_value::<Schema>(value) else {
        return;
    };
    let subschemas = root.schema.subschemas();
    subschemas.all_of.get_or_insert_with(Vec::new).push(schema);
}
