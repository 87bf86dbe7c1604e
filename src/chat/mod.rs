//! Completion request builder — the one structurally interesting piece.
//!
//! [`ChatEngine`] turns a new user utterance into a reply: blocked-topic
//! pre-check, then `[system prompt] + window snapshot + [new utterance]`
//! assembled into one provider round-trip. The engine never mutates session
//! state; the console owns that (user turn appended before the call,
//! assistant turn appended only on success).

pub mod filter;

use tracing::{debug, info};

use crate::llm::{LlmProvider, ProviderError};
use crate::session::Turn;

/// What an exchange produced, before any session mutation.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    /// Provider round-trip succeeded.
    Completed(String),
    /// Blocked-topic hit — canned refusal, no remote call was made.
    Refused(&'static str),
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Reply::Completed(s) => s,
            Reply::Refused(s) => s,
        }
    }
}

pub struct ChatEngine {
    provider: LlmProvider,
}

impl ChatEngine {
    pub fn new(provider: LlmProvider) -> Self {
        Self { provider }
    }

    /// Resolve one user utterance against the provider.
    ///
    /// `window` is the memory snapshot taken *before* the new utterance was
    /// appended anywhere, so history and the new turn each appear exactly
    /// once in the outbound list.
    pub async fn respond(
        &self,
        system_prompt: &str,
        window: &[Turn],
        utterance: &str,
    ) -> Result<Reply, ProviderError> {
        if filter::is_blocked(utterance) {
            info!("blocked-topic match — returning canned refusal");
            return Ok(Reply::Refused(filter::REFUSAL));
        }

        let messages = assemble(system_prompt, window, utterance);
        debug!(messages = messages.len(), "dispatching to provider");
        let text = self.provider.complete(&messages).await?;
        Ok(Reply::Completed(text))
    }
}

/// Build the outbound message list: system prompt, windowed history, then
/// the new utterance as a user turn.
fn assemble(system_prompt: &str, window: &[Turn], utterance: &str) -> Vec<Turn> {
    let mut messages = Vec::with_capacity(window.len() + 2);
    messages.push(Turn::system(system_prompt));
    messages.extend_from_slice(window);
    messages.push(Turn::user(utterance));
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::providers::dummy::DummyProvider;
    use crate::llm::providers::openrouter::OpenRouterProvider;
    use crate::session::Role;

    fn dummy_engine() -> ChatEngine {
        ChatEngine::new(LlmProvider::Dummy(DummyProvider))
    }

    /// Provider pointed at an address nothing listens on — any attempt to
    /// actually reach it fails fast with a transport error.
    fn unreachable_engine() -> ChatEngine {
        let p = OpenRouterProvider::new(
            "http://127.0.0.1:9/api/v1/chat/completions".into(),
            "test-model".into(),
            512,
            0.0,
            1,
            "sk-test".into(),
        )
        .unwrap();
        ChatEngine::new(LlmProvider::OpenRouter(p))
    }

    #[test]
    fn assemble_orders_system_history_utterance() {
        let window = vec![Turn::user("old q"), Turn::assistant("old a")];
        let messages = assemble("sys", &window, "new q");
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[0].content, "sys");
        assert_eq!(messages[1].content, "old q");
        assert_eq!(messages[2].content, "old a");
        assert_eq!(messages[3].role, Role::User);
        assert_eq!(messages[3].content, "new q");
    }

    #[test]
    fn assemble_empty_window() {
        let messages = assemble("sys", &[], "hi");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[1].role, Role::User);
    }

    #[tokio::test]
    async fn clean_utterance_completes() {
        let engine = dummy_engine();
        let reply = engine.respond("sys", &[], "hello there").await.unwrap();
        assert_eq!(reply, Reply::Completed("[echo] hello there".into()));
    }

    #[tokio::test]
    async fn blocked_utterance_refused_without_network() {
        // Unreachable endpoint: if the filter ever let this through, the
        // transport error would fail the test.
        let engine = unreachable_engine();
        let reply = engine.respond("sys", &[], "what about the Election?").await.unwrap();
        assert_eq!(reply, Reply::Refused(filter::REFUSAL));
        assert_eq!(reply.text(), filter::REFUSAL);
    }

    #[tokio::test]
    async fn transport_failure_surfaces_single_error() {
        let engine = unreachable_engine();
        let err = engine.respond("sys", &[], "hello").await.unwrap_err();
        assert!(matches!(err, ProviderError::Request(_)));
    }
}
