//! Sender grouping for the message list.
//!
//! Consecutive messages from the same sender form a run. The sender name is
//! shown on the first message of the run and the avatar on the last. This is
//! recomputed from adjacent messages on every render; nothing is stored.

#[cfg(test)]
#[path = "grouping_test.rs"]
mod grouping_test;

use crate::net::types::ChatMessage;

/// Which sender decorations a message carries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GroupSlot {
    pub show_name: bool,
    pub show_avatar: bool,
}

/// One slot per message, in list order.
pub fn group_slots(messages: &[ChatMessage]) -> Vec<GroupSlot> {
    messages
        .iter()
        .enumerate()
        .map(|(i, msg)| {
            let same_as_prev = i > 0 && messages[i - 1].username == msg.username;
            let same_as_next = messages.get(i + 1).is_some_and(|next| next.username == msg.username);
            GroupSlot { show_name: !same_as_prev, show_avatar: !same_as_next }
        })
        .collect()
}
