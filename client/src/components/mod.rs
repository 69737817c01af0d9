//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the chat room surfaces while reading/writing shared
//! state from Leptos context providers.

pub mod avatar;
pub mod composer;
pub mod emoji_picker;
pub mod message_list;
pub mod typing_banner;
