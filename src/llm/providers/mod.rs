//! LLM provider implementations.
//!
//! `build(config, api_key)` is the factory — called once at startup.
//! Adding a new backend = new module + new match arm.

pub mod dummy;
pub mod openrouter;

use crate::config::LlmConfig;
use crate::llm::{LlmProvider, ProviderError};

/// Construct a `LlmProvider` from config and an optional API key.
///
/// `api_key` is sourced from `OPENROUTER_API_KEY` env (never TOML). The
/// dummy provider is keyless; OpenRouter without a key is a fatal startup
/// error surfaced before any interaction.
pub fn build(config: &LlmConfig, api_key: Option<String>) -> Result<LlmProvider, ProviderError> {
    match config.provider.as_str() {
        "dummy" => Ok(LlmProvider::Dummy(dummy::DummyProvider)),
        "openrouter" => {
            let key = api_key.ok_or_else(|| {
                ProviderError::MissingApiKey(
                    "OPENROUTER_API_KEY is not set — export it or add it to .env".into(),
                )
            })?;
            let or = &config.openrouter;
            let p = openrouter::OpenRouterProvider::new(
                or.api_base_url.clone(),
                or.model.clone(),
                or.max_tokens,
                or.temperature,
                or.timeout_seconds,
                key,
            )?;
            Ok(LlmProvider::OpenRouter(p))
        }
        _ => Err(ProviderError::UnknownProvider(config.provider.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn builds_dummy_without_key() {
        let cfg = Config::test_default();
        let p = build(&cfg.llm, None).unwrap();
        assert!(matches!(p, LlmProvider::Dummy(_)));
    }

    #[test]
    fn openrouter_without_key_errors() {
        let mut cfg = Config::test_default();
        cfg.llm.provider = "openrouter".into();
        let err = build(&cfg.llm, None).unwrap_err();
        assert!(matches!(err, ProviderError::MissingApiKey(_)));
        assert!(err.to_string().contains("OPENROUTER_API_KEY"));
    }

    #[test]
    fn openrouter_with_key_builds() {
        let mut cfg = Config::test_default();
        cfg.llm.provider = "openrouter".into();
        let p = build(&cfg.llm, Some("sk-test".into())).unwrap();
        assert!(matches!(p, LlmProvider::OpenRouter(_)));
    }

    #[test]
    fn unknown_provider_errors() {
        let mut cfg = Config::test_default();
        cfg.llm.provider = "hal9000".into();
        let err = build(&cfg.llm, None).unwrap_err();
        assert!(err.to_string().contains("hal9000"));
    }
}
