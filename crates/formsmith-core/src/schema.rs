use schemars::schema::RootSchema;
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};

/// Input kinds a form field can render as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Text,
    Number,
    Email,
    Date,
    Select,
    Checkbox,
    Radio,
    Textarea,
    File,
}

impl FieldType {
    /// Wire-format name of the field type.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::Email => "email",
            FieldType::Date => "date",
            FieldType::Select => "select",
            FieldType::Checkbox => "checkbox",
            FieldType::Radio => "radio",
            FieldType::Textarea => "textarea",
            FieldType::File => "file",
        }
    }

    /// Whether fields of this type must carry a non-empty options list.
    pub fn requires_options(&self) -> bool {
        matches!(
            self,
            FieldType::Select | FieldType::Checkbox | FieldType::Radio
        )
    }
}

/// Numeric bounds applied to a field's value or input length.
///
/// Bounds are plain JSON numbers in the wire format, so they are kept as
/// `f64` rather than coerced to integers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FieldValidation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, rename = "minLength", skip_serializing_if = "Option::is_none")]
    pub min_length: Option<f64>,
    #[serde(default, rename = "maxLength", skip_serializing_if = "Option::is_none")]
    pub max_length: Option<f64>,
}

/// A single field definition within a form.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FieldDefinition {
    /// Stable identifier, unique within the form regardless of case.
    #[schemars(length(min = 1))]
    pub id: String,
    /// Input kind rendered for this field.
    #[serde(rename = "type")]
    pub kind: FieldType,
    /// Prompt shown to respondents.
    #[schemars(length(min = 1))]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// Choices for select, checkbox and radio fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<FieldValidation>,
}

impl FieldDefinition {
    /// Whether submissions must include a value for this field.
    pub fn is_required(&self) -> bool {
        self.required.unwrap_or(false)
    }
}

/// Canonical definition of a form as authored or AI-generated.
///
/// Unknown keys in the wire format are ignored, not rejected.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FormSchema {
    /// Title shown above the form.
    #[schemars(length(min = 1))]
    pub title: String,
    /// Optional longer description shown under the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ordered field definitions; at least one.
    #[schemars(length(min = 1))]
    pub fields: Vec<FieldDefinition>,
}

/// Emit the JSON Schema for the form contract.
///
/// The same schema backs the structural validation pass and the instructions
/// handed to the AI generator, so the two can never drift apart.
pub fn form_json_schema() -> RootSchema {
    schema_for!(FormSchema)
}
