use serde_json::{json, Value};

/// JSON Schema of a collection document: an object holding either `flat` or `grouped`
pub fn collection_schema() -> Value {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "properties": {
            "flat": {
                "type": "array",
                "items": {"$ref": "#/definitions/item"}
            },
            "grouped": {
                "type": "array",
                "items": {"$ref": "#/definitions/group"}
            }
        },
        "additionalProperties": false,
        "oneOf": [
            {"required": ["flat"]},
            {"required": ["grouped"]}
        ],
        "definitions": {
            "item": {
                "type": "object",
                "properties": {
                    "id": {"type": "string"},
                    "label": {"type": "string"},
                    "searchKey": {"type": "string"},
                    "groupLabel": {"type": "boolean"}
                },
                "required": ["id"]
            },
            "group": {
                "type": "object",
                "properties": {
                    "id": {"type": "string"},
                    "label": {"type": "string"},
                    "searchKey": {"type": "string"},
                    "hideGroupLabel": {"type": "boolean"},
                    "items": {
                        "type": "array",
                        "items": {"$ref": "#/definitions/item"}
                    }
                },
                "required": ["items"]
            }
        }
    })
}

/// Validate data against JSON Schema
/// Returns Ok(()) if valid, Err with every validation error if invalid
pub fn validate_against_schema(schema: &Value, data: &Value) -> Result<(), Vec<String>> {
    let compiled = jsonschema::validator_for(schema)
        .map_err(|e| vec![format!("Schema compilation error: {}", e)])?;

    let errors: Vec<String> = compiled
        .iter_errors(data)
        .map(|error| {
            let path_str = error.instance_path.to_string();
            let location = if path_str.is_empty() {
                "root".to_string()
            } else {
                path_str
            };
            format!("{} at {}", error, location)
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
