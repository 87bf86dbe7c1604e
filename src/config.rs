//! Configuration loading with env-var overrides.
//!
//! Reads `config/default.toml` relative to the current working directory,
//! then applies `LINGUA_LANGUAGE` and `LINGUA_LOG_LEVEL` env overrides.
//! The API key is sourced from `OPENROUTER_API_KEY` only — never TOML.

use std::{env, fs, path::Path};

use serde::Deserialize;

use crate::error::AppError;
use crate::session::language::Language;

/// OpenRouter provider configuration.
/// Populated from `[llm.openrouter]` in the TOML.
#[derive(Debug, Clone)]
pub struct OpenRouterConfig {
    /// Full chat completions endpoint URL.
    pub api_base_url: String,
    /// Model name passed in the request body.
    pub model: String,
    /// Upper bound on generated tokens per completion.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
}

/// LLM configuration.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Which provider is active (`"dummy"` or `"openrouter"`).
    /// Maps to `default` in `[llm]` TOML — named `default` there to signal
    /// that other provider sections can coexist without being loaded.
    pub provider: String,
    /// Config for the OpenRouter provider (`[llm.openrouter]`).
    pub openrouter: OpenRouterConfig,
}

/// Fully-resolved configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub bot_name: String,
    pub log_level: String,
    /// Reply language, chosen once per session at startup.
    pub language: Language,
    pub llm: LlmConfig,
    /// API key from `OPENROUTER_API_KEY` env var — `None` for the keyless
    /// dummy provider. Never sourced from TOML.
    pub api_key: Option<String>,
}

/// Raw TOML shape — `serde` target before resolution.
#[derive(Deserialize)]
struct RawConfig {
    bot: RawBot,
    #[serde(default)]
    session: RawSession,
    #[serde(default)]
    llm: RawLlm,
}

#[derive(Deserialize)]
struct RawBot {
    name: String,
    #[serde(default = "default_log_level")]
    log_level: String,
}

#[derive(Deserialize)]
struct RawSession {
    /// One of the five supported languages. Validated at load time;
    /// anything else is a config error, not a runtime path.
    #[serde(default = "default_language")]
    language: String,
}

impl Default for RawSession {
    fn default() -> Self {
        Self { language: default_language() }
    }
}

#[derive(Deserialize)]
struct RawLlm {
    /// Maps to `default = "..."` in `[llm]`.
    #[serde(rename = "default", default = "default_llm_provider")]
    provider: String,
    #[serde(default)]
    openrouter: RawOpenRouterConfig,
}

impl Default for RawLlm {
    fn default() -> Self {
        Self { provider: default_llm_provider(), openrouter: RawOpenRouterConfig::default() }
    }
}

#[derive(Deserialize)]
struct RawOpenRouterConfig {
    #[serde(default = "default_api_base_url")]
    api_base_url: String,
    #[serde(default = "default_model")]
    model: String,
    #[serde(default = "default_max_tokens")]
    max_tokens: u32,
    #[serde(default = "default_temperature")]
    temperature: f32,
    #[serde(default = "default_timeout_seconds")]
    timeout_seconds: u64,
}

impl Default for RawOpenRouterConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_language() -> String { "English".to_string() }
fn default_llm_provider() -> String { "openrouter".to_string() }
fn default_api_base_url() -> String { "https://openrouter.ai/api/v1/chat/completions".to_string() }
fn default_model() -> String { "anthropic/claude-3.7-sonnet:thinking".to_string() }
fn default_max_tokens() -> u32 { 512 }
fn default_temperature() -> f32 { 0.2 }
fn default_timeout_seconds() -> u64 { 60 }

/// Load config from `config/default.toml`, then apply env-var overrides.
pub fn load() -> Result<Config, AppError> {
    let language_override = env::var("LINGUA_LANGUAGE").ok();
    let log_level_override = env::var("LINGUA_LOG_LEVEL").ok();
    load_from(
        Path::new("config/default.toml"),
        language_override.as_deref(),
        log_level_override.as_deref(),
    )
}

/// Internal loader — accepts an explicit path and optional overrides.
/// Tests pass overrides directly instead of mutating env vars.
pub fn load_from(
    path: &Path,
    language_override: Option<&str>,
    log_level_override: Option<&str>,
) -> Result<Config, AppError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;

    let parsed: RawConfig = toml::from_str(&raw)
        .map_err(|e| AppError::Config(format!("parse error in {}: {e}", path.display())))?;

    let language_str = language_override.unwrap_or(&parsed.session.language);
    let language = language_str
        .parse::<Language>()
        .map_err(|e| AppError::Config(format!("in {}: {e}", path.display())))?;
    let log_level = log_level_override.unwrap_or(&parsed.bot.log_level).to_string();

    Ok(Config {
        bot_name: parsed.bot.name,
        log_level,
        language,
        llm: LlmConfig {
            provider: parsed.llm.provider,
            openrouter: OpenRouterConfig {
                api_base_url: parsed.llm.openrouter.api_base_url,
                model: parsed.llm.openrouter.model,
                max_tokens: parsed.llm.openrouter.max_tokens,
                temperature: parsed.llm.openrouter.temperature,
                timeout_seconds: parsed.llm.openrouter.timeout_seconds,
            },
        },
        api_key: env::var("OPENROUTER_API_KEY").ok(),
    })
}

// ── test helpers ──────────────────────────────────────────────────────────────

/// Safe `Config` for unit tests — dummy LLM, no API keys, no external calls.
#[cfg(test)]
impl Config {
    pub fn test_default() -> Self {
        Self {
            bot_name: "test".into(),
            log_level: "info".into(),
            language: Language::English,
            llm: LlmConfig {
                provider: "dummy".into(),
                openrouter: OpenRouterConfig {
                    api_base_url: "http://localhost:0/api/v1/chat/completions".into(),
                    model: "test-model".into(),
                    max_tokens: 512,
                    temperature: 0.0,
                    timeout_seconds: 1,
                },
            },
            api_key: None,
        }
    }
}
