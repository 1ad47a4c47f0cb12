//! Conversation memory for a chat session

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// One exchange in the conversation log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub user_input: String,
    pub bot_response: String,
    pub recorded_at: DateTime<Utc>,
}

impl Turn {
    /// Render as `User: {u} | Bot: {b}`
    pub fn render(&self) -> String {
        format!("User: {} | Bot: {}", self.user_input, self.bot_response)
    }
}

/// Append-only log of turns, oldest first. Unbounded and never persisted.
#[derive(Debug, Clone, Default)]
pub struct ConversationMemory {
    history: Vec<Turn>,
}

impl ConversationMemory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a turn. No deduplication, no size cap.
    pub fn add_interaction(&mut self, user_input: impl Into<String>, bot_response: impl Into<String>) {
        self.history.push(Turn {
            user_input: user_input.into(),
            bot_response: bot_response.into(),
            recorded_at: Utc::now(),
        });
    }

    /// All turns rendered and joined by a single space; empty when no turns exist.
    ///
    /// Values are not escaped: an input containing `User:` or `Bot:` reads
    /// ambiguously in the rendered string but is stored intact.
    pub fn get_history(&self) -> String {
        self.history
            .iter()
            .map(Turn::render)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn turns(&self) -> &[Turn] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}
