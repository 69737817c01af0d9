//! Emoji picker palette.

#[cfg(test)]
#[path = "emoji_test.rs"]
mod emoji_test;

pub const EMOJI_PALETTE: &[&str] = &[
    "😀", "😂", "😍", "😎", "😢", "😡", "👍", "👎", "🙏", "👏", "🎉", "❤️", "🔥", "💬", "🤔", "😴",
];

/// Append `emoji` to the composer draft.
pub fn append_emoji(draft: &str, emoji: &str) -> String {
    let mut next = String::with_capacity(draft.len() + emoji.len());
    next.push_str(draft);
    next.push_str(emoji);
    next
}
