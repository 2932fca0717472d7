use async_openai::config::OpenAIConfig;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs, ResponseFormat,
};
use async_openai::Client;
use async_trait::async_trait;

use crate::error::AiError;
use crate::model::{ChatMessage, ChatModel, ChatRole};

/// Endpoint base used when none is configured.
pub const GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 2000;

/// Chat model served over an OpenAI-compatible API.
///
/// Completions are requested in JSON-object mode with the sampling settings
/// the schema generator was tuned against. No retries happen here; the
/// request timeout lives in the underlying HTTP client.
#[derive(Clone)]
pub struct OpenAiCompatModel {
    client: Client<OpenAIConfig>,
    model: String,
}

impl std::fmt::Debug for OpenAiCompatModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiCompatModel")
            .field("model", &self.model)
            .finish()
    }
}

impl OpenAiCompatModel {
    /// Connect to the Groq endpoint with the default model.
    pub fn groq(api_key: impl Into<String>) -> Result<Self, AiError> {
        Self::builder().api_key(api_key).build()
    }

    /// Create a builder for custom endpoints and models.
    pub fn builder() -> OpenAiCompatBuilder {
        OpenAiCompatBuilder::default()
    }
}

#[async_trait]
impl ChatModel for OpenAiCompatModel {
    fn model_id(&self) -> &str {
        &self.model
    }

    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, AiError> {
        let messages: Result<Vec<_>, AiError> = messages.iter().map(convert_message).collect();

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages?)
            .temperature(TEMPERATURE)
            .max_tokens(MAX_TOKENS)
            .response_format(ResponseFormat::JsonObject)
            .build()
            .map_err(|err| AiError::provider(format!("failed to build request: {err}")))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|err| AiError::provider(err.to_string()))?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content);

        match content {
            Some(text) if !text.is_empty() => Ok(text),
            _ => Err(AiError::EmptyCompletion),
        }
    }
}

fn convert_message(message: &ChatMessage) -> Result<ChatCompletionRequestMessage, AiError> {
    match message.role {
        ChatRole::System => {
            let built = ChatCompletionRequestSystemMessageArgs::default()
                .content(message.content.clone())
                .build()
                .map_err(|err| {
                    AiError::provider(format!("failed to build system message: {err}"))
                })?;
            Ok(ChatCompletionRequestMessage::System(built))
        }
        ChatRole::User => {
            let built = ChatCompletionRequestUserMessageArgs::default()
                .content(message.content.clone())
                .build()
                .map_err(|err| AiError::provider(format!("failed to build user message: {err}")))?;
            Ok(ChatCompletionRequestMessage::User(built))
        }
    }
}

/// Builder for [`OpenAiCompatModel`].
#[derive(Debug, Default)]
pub struct OpenAiCompatBuilder {
    api_key: Option<String>,
    api_base: Option<String>,
    model: Option<String>,
}

impl OpenAiCompatBuilder {
    /// Set the API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the endpoint base for OpenAI-compatible APIs; defaults to Groq.
    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    /// Set the model id; defaults to [`DEFAULT_MODEL`].
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<OpenAiCompatModel, AiError> {
        let api_key = self
            .api_key
            .ok_or_else(|| AiError::configuration("api key is required"))?;
        let api_base = self.api_base.unwrap_or_else(|| GROQ_API_BASE.to_string());

        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(api_base);

        Ok(OpenAiCompatModel {
            client: Client::with_config(config),
            model: self.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        })
    }
}
