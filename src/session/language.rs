//! Supported reply languages and their fixed system prompts.
//!
//! The prompt strings are the instruction set verbatim — the assistant is
//! told to answer in the selected language. Selection happens once per
//! session via config; there is no mid-session switch.

use std::fmt;
use std::str::FromStr;

/// The five languages the bot can be instructed to reply in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Hindi,
    Spanish,
    French,
    German,
}

pub const SUPPORTED_LANGUAGES: [Language; 5] = [
    Language::English,
    Language::Hindi,
    Language::Spanish,
    Language::French,
    Language::German,
];

impl Language {
    /// The fixed system instruction for this language.
    pub fn system_prompt(self) -> &'static str {
        match self {
            Language::English => "You are a helpful assistant. Respond in English.",
            Language::Hindi => "आप एक सहायक सहायक हैं। कृपया हिंदी में उत्तर दें।",
            Language::Spanish => "Eres un asistente útil. Responde en español.",
            Language::French => "Vous êtes un assistant utile. Répondez en français.",
            Language::German => "Du bist ein hilfreicher Assistent. Antworte auf Deutsch.",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SUPPORTED_LANGUAGES
            .into_iter()
            .find(|l| l.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "unsupported language: '{s}' (expected one of English, Hindi, Spanish, French, German)"
                )
            })
    }
}
