use formsmith_core::{FieldDefinition, FieldType, FieldValidation, FormSchema};
use serde_json::json;

#[test]
fn serializes_wire_keys() {
    let form = FormSchema {
        title: "Feedback".to_string(),
        description: None,
        fields: vec![FieldDefinition {
            id: "score".to_string(),
            kind: FieldType::Number,
            label: "Score".to_string(),
            placeholder: None,
            required: Some(true),
            options: None,
            validation: Some(FieldValidation {
                min: Some(1.0),
                max: Some(10.0),
                min_length: None,
                max_length: None,
            }),
        }],
    };

    let value = serde_json::to_value(&form).expect("serialize form");
    assert_eq!(
        value,
        json!({
            "title": "Feedback",
            "fields": [{
                "id": "score",
                "type": "number",
                "label": "Score",
                "required": true,
                "validation": {"min": 1.0, "max": 10.0}
            }]
        })
    );
}

#[test]
fn length_bounds_use_camel_case() {
    let doc = json!({
        "id": "bio",
        "type": "textarea",
        "label": "Bio",
        "validation": {"minLength": 2, "maxLength": 400}
    });

    let field: FieldDefinition = serde_json::from_value(doc).expect("parse field");
    let validation = field.validation.expect("validation block");
    assert_eq!(validation.min_length, Some(2.0));
    assert_eq!(validation.max_length, Some(400.0));
}

#[test]
fn field_types_round_trip() {
    for name in [
        "text", "number", "email", "date", "select", "checkbox", "radio", "textarea", "file",
    ] {
        let kind: FieldType =
            serde_json::from_value(json!(name)).unwrap_or_else(|_| panic!("parse type {name}"));
        assert_eq!(kind.as_str(), name);
    }
}
