//! Assistant chat history and the backend seam.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ChatError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
    pub at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            sender,
            text: text.into(),
            at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatHistory {
    messages: Vec<ChatMessage>,
}

impl ChatHistory {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Something that answers a prompt.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn ask(&self, prompt: &str) -> Result<String, ChatError>;
}

pub struct ChatSession<B> {
    backend: B,
    history: ChatHistory,
}

impl<B: ChatBackend> ChatSession<B> {
    pub fn new(backend: B) -> Self {
        Self::with_history(backend, ChatHistory::default())
    }

    pub fn with_history(backend: B, history: ChatHistory) -> Self {
        Self { backend, history }
    }

    pub fn history(&self) -> &ChatHistory {
        &self.history
    }

    pub fn into_history(self) -> ChatHistory {
        self.history
    }

    /// Send a prompt and record both sides of the exchange.
    ///
    /// Blank prompts are ignored and return `None`. Backend failures are
    /// recorded as an assistant message so the conversation stays readable.
    pub async fn send(&mut self, prompt: &str) -> Option<&ChatMessage> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return None;
        }
        self.history.push(ChatMessage::new(Sender::User, prompt));

        let reply = match self.backend.ask(prompt).await {
            Ok(text) if text.trim().is_empty() => Err(ChatError::EmptyReply),
            other => other,
        };
        let text = match reply {
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "chat backend failed");
                format!("Error: {e}")
            }
        };
        self.history.push(ChatMessage::new(Sender::Assistant, text));
        self.history.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    #[async_trait]
    impl ChatBackend for Echo {
        async fn ask(&self, prompt: &str) -> Result<String, ChatError> {
            Ok(format!("you said: {prompt}"))
        }
    }

    struct Broken(fn() -> ChatError);

    #[async_trait]
    impl ChatBackend for Broken {
        async fn ask(&self, _prompt: &str) -> Result<String, ChatError> {
            Err((self.0)())
        }
    }

    struct Silent;

    #[async_trait]
    impl ChatBackend for Silent {
        async fn ask(&self, _prompt: &str) -> Result<String, ChatError> {
            Ok("   ".into())
        }
    }

    #[tokio::test]
    async fn reply_is_appended_after_prompt() {
        let mut session = ChatSession::new(Echo);
        let reply = session.send(" hello ").await.unwrap();
        assert_eq!(reply.sender, Sender::Assistant);
        assert_eq!(reply.text, "you said: hello");
        let history = session.history().messages();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].sender, Sender::User);
        assert_eq!(history[0].text, "hello");
    }

    #[tokio::test]
    async fn blank_prompt_is_ignored() {
        let mut session = ChatSession::new(Echo);
        assert!(session.send("   ").await.is_none());
        assert!(session.history().is_empty());
    }

    #[tokio::test]
    async fn backend_error_becomes_assistant_message() {
        let mut session = ChatSession::new(Broken(|| ChatError::Status {
            status: 503,
            message: "overloaded".into(),
        }));
        let reply = session.send("hi").await.unwrap();
        assert_eq!(reply.sender, Sender::Assistant);
        assert_eq!(reply.text, "Error: 503 - overloaded");
    }

    #[tokio::test]
    async fn empty_reply_is_an_error() {
        let mut session = ChatSession::new(Silent);
        let reply = session.send("hi").await.unwrap();
        assert!(reply.text.starts_with("Error: "));
    }
}
