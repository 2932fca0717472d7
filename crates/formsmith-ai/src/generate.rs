use serde_json::Value;

use crate::error::AiError;
use crate::model::{ChatMessage, ChatModel};

/// Produces candidate form documents from natural-language prompts.
///
/// The system prompt embeds the contract's JSON Schema so the model is asked
/// for exactly the shape the validator accepts; the completion is parsed as
/// JSON and handed back untrusted. Validation belongs to the caller.
pub struct SchemaGenerator<M> {
    model: M,
    system_prompt: String,
}

impl<M: ChatModel> SchemaGenerator<M> {
    /// Wrap a chat model with the form-generation prompt.
    pub fn new(model: M) -> Result<Self, AiError> {
        let contract = serde_json::to_string_pretty(&formsmith_core::form_json_schema())
            .map_err(|err| {
                AiError::configuration(format!("failed to render form contract: {err}"))
            })?;
        Ok(Self {
            model,
            system_prompt: build_system_prompt(&contract),
        })
    }

    /// Identifier of the underlying model.
    pub fn model_id(&self) -> &str {
        self.model.model_id()
    }

    /// Generate one candidate form document for a prompt.
    ///
    /// The completion text must be a single JSON value; anything else is
    /// reported as invalid JSON rather than passed downstream.
    pub async fn generate(&self, prompt: &str) -> Result<Value, AiError> {
        let messages = vec![
            ChatMessage::system(self.system_prompt.clone()),
            ChatMessage::user(prompt),
        ];

        let completion = self.model.complete(messages).await?;
        serde_json::from_str(completion.trim()).map_err(AiError::InvalidJson)
    }
}

fn build_system_prompt(contract: &str) -> String {
    format!(
        "You are a form builder assistant. Given a description of a form, \
         produce a form definition as a single JSON object conforming to \
         this JSON Schema:\n\n{contract}\n\n\
         Field ids must be short snake_case identifiers unique within the \
         form. Fields of type select, checkbox or radio must include a \
         non-empty options array. Return only the JSON object, with no \
         markdown fences and no commentary."
    )
}
