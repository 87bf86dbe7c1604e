//! Dummy LLM provider — echoes the last user message prefixed with `[echo]`.
//! Used for testing the full exchange path without a real API key.

use crate::llm::ProviderError;
use crate::session::{Role, Turn};

#[derive(Debug, Clone)]
pub struct DummyProvider;

impl DummyProvider {
    pub async fn complete(&self, messages: &[Turn]) -> Result<String, ProviderError> {
        let last_user = messages
            .iter()
            .rev()
            .find(|t| t.role == Role::User)
            .map(|t| t.content.as_str())
            .unwrap_or_default();
        Ok(format!("[echo] {last_user}"))
    }
}
