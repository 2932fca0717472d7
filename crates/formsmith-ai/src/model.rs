use async_trait::async_trait;

use crate::error::AiError;

/// Role of a chat message author.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    System,
    User,
}

/// A single chat message.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// One non-streaming chat completion against a hosted model.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Identifier of the model answering completions.
    fn model_id(&self) -> &str;

    /// Send messages and return the assistant's text.
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, AiError>;
}

#[async_trait]
impl ChatModel for Box<dyn ChatModel> {
    fn model_id(&self) -> &str {
        (**self).model_id()
    }

    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, AiError> {
        (**self).complete(messages).await
    }
}
