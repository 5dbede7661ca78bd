//! Ask-AI conversation state.
//!
//! Questions are one-shot `POST`s that bypass the query cache. Each answer,
//! or a fixed fallback when the request fails, is appended to a
//! caller-owned message list.

use crate::api::ApiClient;
use crate::config::ASK_FALLBACK_MESSAGE;
use crate::error::ApiError;
use crate::models::{AskResponse, ChatMessage};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conversation {
    pub messages: Vec<ChatMessage>,
    /// A question is awaiting its answer; input stays disabled meanwhile.
    pub is_loading: bool,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a user question and mark the conversation as waiting.
    ///
    /// Returns the trimmed question to submit, or `None` when the input is
    /// blank or another question is still pending.
    pub fn begin(&mut self, question: &str) -> Option<String> {
        let question = question.trim();
        if question.is_empty() || self.is_loading {
            return None;
        }
        self.messages.push(ChatMessage::user(question));
        self.is_loading = true;
        Some(question.to_string())
    }

    /// Append the assistant turn for the pending question.
    pub fn finish(&mut self, result: Result<AskResponse, ApiError>) {
        let content = match result {
            Ok(response) => response.answer,
            Err(err) => {
                tracing::warn!(error = %err, "ask request failed");
                ASK_FALLBACK_MESSAGE.to_string()
            }
        };
        self.messages.push(ChatMessage::assistant(content));
        self.is_loading = false;
    }

    /// Submit `question` through `client` and record the outcome.
    ///
    /// Holds `&mut self` across the request; UI code that needs to render
    /// the pending state should call [`begin`](Self::begin) and
    /// [`finish`](Self::finish) around its own request instead.
    pub async fn ask(&mut self, client: &ApiClient, question: &str) {
        let Some(question) = self.begin(question) else {
            return;
        };
        let result = client.ask(&question).await;
        self.finish(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChatRole;

    #[test]
    fn test_success_appends_answer() {
        let mut conv = Conversation::new();
        let q = conv.begin("  Which industries convert best?  ").unwrap();
        assert_eq!(q, "Which industries convert best?");
        assert!(conv.is_loading);

        conv.finish(Ok(AskResponse {
            answer: "**Fintech** leads.".to_string(),
            question: q,
        }));
        assert!(!conv.is_loading);
        assert_eq!(conv.messages.len(), 2);
        assert_eq!(conv.messages[1], ChatMessage::assistant("**Fintech** leads."));
    }

    #[test]
    fn test_failure_appends_single_fallback() {
        let mut conv = Conversation::new();
        conv.begin("What objections do we handle worst?").unwrap();
        conv.finish(Err(ApiError::Transport("connection refused".to_string())));

        let assistant: Vec<_> = conv
            .messages
            .iter()
            .filter(|m| m.role == ChatRole::Assistant)
            .collect();
        assert_eq!(assistant.len(), 1);
        assert_eq!(assistant[0].content, ASK_FALLBACK_MESSAGE);
        assert!(!conv.is_loading);
    }

    #[test]
    fn test_rejects_blank_and_concurrent_questions() {
        let mut conv = Conversation::new();
        assert!(conv.begin("   ").is_none());
        assert!(conv.begin("first").is_some());
        assert!(conv.begin("second").is_none());
        assert_eq!(conv.messages.len(), 1);
    }
}
