//! Response export pipeline for Formsmith.
//!
//! Turns stored responses into downloadable artifacts. Responses are first
//! normalized into flat rows, then serialized by one of the formats in the
//! closed [`ExportFormat`] table.

pub mod errors;
pub mod filename;
pub mod format;
pub mod model;
pub mod normalize;
pub mod output;

pub use errors::ExportError;
pub use filename::{file_base_name, file_name};
pub use format::ExportFormat;
pub use model::{ExportArtifact, ExportRequest, ExportedResponse};
pub use normalize::{normalize_responses, NormalizedRow};
