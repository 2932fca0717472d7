use std::collections::HashMap;

use jsonschema::JSONSchema;
use serde_json::Value;

use crate::error::{SchemaError, ValidationIssue, ValidationReport};
use crate::schema::{form_json_schema, FormSchema};

/// Validate a candidate form document, accumulating every violation.
///
/// Structural problems are found by checking the input against the contract's
/// JSON Schema, so all of them are reported in one pass rather than stopping
/// at the first. Cross-field rules (unique field ids, options on choice
/// fields) run on the typed value afterwards. The input is never mutated and
/// a valid document always validates to the same result.
pub fn validate_form_schema(input: &Value) -> Result<FormSchema, ValidationReport> {
    let mut report = ValidationReport::default();

    structural_issues(input, &mut report);
    if !report.is_ok() {
        return Err(report);
    }

    let form: FormSchema = match serde_json::from_value(input.clone()) {
        Ok(form) => form,
        Err(err) => {
            report.push(ValidationIssue::new(
                "malformed_schema",
                "/",
                err.to_string(),
                None,
            ));
            return Err(report);
        }
    };

    check_field_ids(&form, &mut report);
    check_choice_options(&form, &mut report);

    if report.is_ok() {
        Ok(form)
    } else {
        Err(report)
    }
}

/// Validate a candidate form document, raising on the first report.
///
/// Strict-mode counterpart of [`validate_form_schema`]; the error's display
/// enumerates the full violation list.
pub fn parse_form_schema(input: &Value) -> Result<FormSchema, SchemaError> {
    validate_form_schema(input).map_err(SchemaError::from)
}

fn structural_issues(input: &Value, report: &mut ValidationReport) {
    let contract = match serde_json::to_value(form_json_schema()) {
        Ok(contract) => contract,
        Err(err) => {
            report.push(ValidationIssue::new(
                "schema_validation_error",
                "/",
                err.to_string(),
                None,
            ));
            return;
        }
    };

    let compiled = match JSONSchema::compile(&contract) {
        Ok(compiled) => compiled,
        Err(err) => {
            report.push(ValidationIssue::new(
                "schema_validation_error",
                "/",
                err.to_string(),
                None,
            ));
            return;
        }
    };

    if let Err(errors) = compiled.validate(input) {
        for error in errors {
            let path = normalized_json_pointer(&error.instance_path.to_string());
            let field = field_id_at(input, &path);
            report.push(ValidationIssue::new(
                "malformed_schema",
                path,
                error.to_string(),
                field,
            ));
        }
    }
}

fn check_field_ids(form: &FormSchema, report: &mut ValidationReport) {
    let mut seen: HashMap<String, usize> = HashMap::new();

    for (idx, field) in form.fields.iter().enumerate() {
        // Uniqueness is judged case-insensitively.
        let key = field.id.to_lowercase();
        if seen.contains_key(&key) {
            report.push(ValidationIssue::new(
                "duplicate_field_id",
                format!("/fields/{idx}/id"),
                format!("duplicate field id '{}'", field.id),
                Some(field.id.clone()),
            ));
        } else {
            seen.insert(key, idx);
        }
    }
}

fn check_choice_options(form: &FormSchema, report: &mut ValidationReport) {
    for (idx, field) in form.fields.iter().enumerate() {
        if !field.kind.requires_options() {
            continue;
        }
        let missing = field
            .options
            .as_ref()
            .map_or(true, |options| options.is_empty());
        if missing {
            report.push(ValidationIssue::new(
                "missing_options",
                format!("/fields/{idx}/options"),
                format!(
                    "{} field '{}' requires a non-empty options list",
                    field.kind.as_str(),
                    field.id
                ),
                Some(field.id.clone()),
            ));
        }
    }
}

/// Resolve the id of the field an issue at `pointer` belongs to, if any.
fn field_id_at(input: &Value, pointer: &str) -> Option<String> {
    let mut parts = pointer.split('/').skip(1);
    if parts.next()? != "fields" {
        return None;
    }
    let idx: usize = parts.next()?.parse().ok()?;
    input
        .get("fields")?
        .get(idx)?
        .get("id")?
        .as_str()
        .map(str::to_string)
}

fn normalized_json_pointer(pointer: &str) -> String {
    if pointer.is_empty() {
        "/".to_string()
    } else {
        pointer.to_string()
    }
}
