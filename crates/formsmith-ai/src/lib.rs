//! AI completion boundary for Formsmith.
//!
//! [`ChatModel`] is the capability the schema generator runs against. The
//! crate ships an OpenAI-compatible client preset for the Groq endpoint and
//! model the generator was tuned against.

pub mod error;
pub mod generate;
pub mod model;
pub mod openai;

pub use error::AiError;
pub use generate::SchemaGenerator;
pub use model::{ChatMessage, ChatModel, ChatRole};
pub use openai::{OpenAiCompatBuilder, OpenAiCompatModel, DEFAULT_MODEL, GROQ_API_BASE};
