//! Format-specific serializers over normalized rows.

pub mod csv;
pub mod json;
