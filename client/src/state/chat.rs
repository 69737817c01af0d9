//! State for the chat room: the message list, composer draft and typing label.
//!
//! DESIGN
//! ======
//! The message list is exactly the last history snapshot followed by every
//! live message received after it, in receipt order. The server is the
//! ordering authority; nothing here sorts, merges or deduplicates. The list is
//! unbounded for the lifetime of the page.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use std::time::Duration;

pub use crate::net::types::ChatMessage;

/// How long a typing label stays up after the signal that set it.
pub const TYPING_TIMEOUT: Duration = Duration::from_millis(1500);

/// Chat room state provided to components through context.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    /// Composer input contents.
    pub draft: String,
    pub typing: TypingIndicator,
}

impl ChatState {
    /// Replace the whole list with a history snapshot, keeping server order.
    pub fn apply_history(&mut self, messages: Vec<ChatMessage>) {
        self.messages = messages;
    }

    /// Append one live message.
    pub fn apply_message(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }
}

/// "`name` is typing..." label with per-signal expiry.
///
/// Every accepted signal replaces the label and hands back a token. The timer
/// started for that signal calls [`TypingIndicator::expire`] with its token;
/// only the token of the latest signal clears the label, so each signal is
/// shown for [`TYPING_TIMEOUT`] from its own arrival unless a newer one
/// replaces it first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypingIndicator {
    label: Option<String>,
    seq: u64,
}

impl TypingIndicator {
    /// Show `sender` as typing unless it is the local user.
    ///
    /// Returns the expiry token, or `None` when the signal was ignored.
    pub fn show(&mut self, sender: &str, local_user: Option<&str>) -> Option<u64> {
        if local_user == Some(sender) {
            return None;
        }
        self.seq += 1;
        self.label = Some(sender.to_owned());
        Some(self.seq)
    }

    /// Clear the label if `token` belongs to the signal currently shown.
    ///
    /// Returns whether the label was cleared.
    pub fn expire(&mut self, token: u64) -> bool {
        if token != self.seq || self.label.is_none() {
            return false;
        }
        self.label = None;
        true
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}
