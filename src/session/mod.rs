//! Conversation state for a single interactive session.
//!
//! A [`Session`] owns the full transcript (what the user sees), the bounded
//! [`MemoryWindow`] (what goes into outbound requests), and the language
//! chosen at startup. One session per process run; nothing persists.

pub mod language;
pub mod window;

use uuid::Uuid;

use language::Language;
use window::MemoryWindow;

/// Opening assistant turn seeded into every new transcript.
pub const GREETING: &str = "How can I help you today?";

// ── Turn ─────────────────────────────────────────────────────────────────────

/// Speaker role, matching the completion API's wire names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One message in the conversation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self { role, content: content.into() }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

// ── Session ──────────────────────────────────────────────────────────────────

/// State for one interactive run: transcript, memory window, language.
///
/// The transcript is append-only; its first turn is always the system
/// prompt. The window is maintained independently and only ever holds
/// user/assistant turns.
#[derive(Debug)]
pub struct Session {
    pub id: Uuid,
    language: Language,
    transcript: Vec<Turn>,
    window: MemoryWindow,
}

impl Session {
    /// Create a session for `language`, seeding the transcript with the
    /// system prompt and the assistant greeting. The greeting is display
    /// seed only — it does not enter the memory window.
    pub fn new(language: Language) -> Self {
        Self {
            id: Uuid::new_v4(),
            language,
            transcript: vec![
                Turn::system(language.system_prompt()),
                Turn::assistant(GREETING),
            ],
            window: MemoryWindow::default(),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// The fixed system instruction for this session's language.
    pub fn system_prompt(&self) -> &'static str {
        self.language.system_prompt()
    }

    /// Append a turn to the transcript; user/assistant turns also enter the
    /// memory window (evicting the oldest once the window is full).
    pub fn append(&mut self, turn: Turn) {
        if matches!(turn.role, Role::User | Role::Assistant) {
            self.window.push(turn.clone());
        }
        self.transcript.push(turn);
    }

    /// Full ordered transcript, system turn first.
    pub fn transcript(&self) -> &[Turn] {
        &self.transcript
    }

    /// Snapshot of the memory window, oldest first. Taken by the caller
    /// *before* appending a new user turn so the request carries prior
    /// history plus the new utterance exactly once.
    pub fn window_snapshot(&self) -> Vec<Turn> {
        self.window.snapshot()
    }

    #[cfg(test)]
    pub fn window_len(&self) -> usize {
        self.window.len()
    }
}
