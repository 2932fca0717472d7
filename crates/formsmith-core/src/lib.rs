//! Core contracts and helpers for Formsmith.
//!
//! This crate defines the canonical form-schema types, the JSON Schema
//! emitted for them, and the validator shared by the service layer and the
//! AI generation path.

pub mod error;
pub mod schema;
pub mod validate;

pub use error::{SchemaError, ValidationIssue, ValidationReport};
pub use schema::{
    form_json_schema, FieldDefinition, FieldType, FieldValidation, FormSchema,
};
pub use validate::{parse_form_schema, validate_form_schema};
