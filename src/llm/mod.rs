//! LLM provider abstraction.
//!
//! `LlmProvider` is an enum over concrete provider implementations.
//! Add a new variant + module in `providers/` for each additional backend.
//!
//! Provider instances are shared immutable capabilities — clone them freely.
//! Async is delegated to the underlying provider; `complete` is an
//! `async fn` on the enum so callers need no trait-object machinery.

pub mod providers;

use thiserror::Error;

use crate::session::Turn;

// ── Error ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("unknown provider: {0}")]
    UnknownProvider(String),
    #[error("missing API key: {0}")]
    MissingApiKey(String),
    #[error("provider request failed: {0}")]
    Request(String),
}

// ── Provider enum ─────────────────────────────────────────────────────────────

/// All available provider backends.
///
/// Enum dispatch avoids `dyn` trait objects and the `async-trait` dependency.
/// Adding a backend = new module + new variant + new `complete` arm.
#[derive(Debug, Clone)]
pub enum LlmProvider {
    Dummy(providers::dummy::DummyProvider),
    OpenRouter(providers::openrouter::OpenRouterProvider),
}

impl LlmProvider {
    /// Send the assembled message list to the provider and return the reply
    /// text. One round-trip, no retries; history assembly is the caller's
    /// job.
    pub async fn complete(&self, messages: &[Turn]) -> Result<String, ProviderError> {
        match self {
            LlmProvider::Dummy(p) => p.complete(messages).await,
            LlmProvider::OpenRouter(p) => p.complete(messages).await,
        }
    }
}
