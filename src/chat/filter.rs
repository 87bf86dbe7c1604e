//! Blocked-topic keyword filter.
//!
//! A deterministic pre-check run before any remote call: if the utterance
//! contains any blocked keyword (case-insensitive substring match), the
//! exchange short-circuits to [`REFUSAL`] and the provider is never
//! contacted.

/// Topics the bot declines to discuss.
pub const BLOCKED_KEYWORDS: [&str; 14] = [
    "obama",
    "trump",
    "modi",
    "putin",
    "biden",
    "president",
    "politics",
    "ukraine",
    "russia",
    "war",
    "conflict",
    "nato",
    "geopolitics",
    "election",
];

/// Canned response substituted for a remote call on a keyword hit.
pub const REFUSAL: &str =
    "I'm here to help with learning and general topics, but I avoid political or public figure discussions.";

/// True if `input` contains any blocked keyword, case-insensitively.
pub fn is_blocked(input: &str) -> bool {
    let lowered = input.to_lowercase();
    BLOCKED_KEYWORDS.iter().any(|k| lowered.contains(k))
}
