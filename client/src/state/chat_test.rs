use super::*;

fn msg(username: &str, text: &str) -> ChatMessage {
    ChatMessage { username: username.to_owned(), avatar: None, text: text.to_owned(), time: None }
}

// =============================================================
// ChatState defaults
// =============================================================

#[test]
fn chat_state_default_empty() {
    let state = ChatState::default();
    assert!(state.messages.is_empty());
    assert!(state.draft.is_empty());
    assert_eq!(state.typing.label(), None);
}

// =============================================================
// History + live messages
// =============================================================

#[test]
fn history_then_live_messages_keep_arrival_order() {
    let mut state = ChatState::default();
    state.apply_history(vec![msg("a", "1"), msg("b", "2"), msg("a", "3")]);
    state.apply_message(msg("c", "4"));
    state.apply_message(msg("a", "5"));

    let texts = state.messages.iter().map(|m| m.text.as_str()).collect::<Vec<_>>();
    assert_eq!(texts, vec!["1", "2", "3", "4", "5"]);
}

#[test]
fn history_replaces_previous_list_entirely() {
    let mut state = ChatState::default();
    state.apply_message(msg("a", "stale"));
    state.apply_history(vec![msg("b", "fresh")]);
    assert_eq!(state.messages, vec![msg("b", "fresh")]);
}

#[test]
fn live_messages_are_not_deduplicated() {
    let mut state = ChatState::default();
    state.apply_message(msg("a", "same"));
    state.apply_message(msg("a", "same"));
    assert_eq!(state.messages.len(), 2);
}

#[test]
fn history_does_not_touch_draft() {
    let mut state = ChatState { draft: "half typed".to_owned(), ..ChatState::default() };
    state.apply_history(Vec::new());
    assert_eq!(state.draft, "half typed");
}

// =============================================================
// TypingIndicator
// =============================================================

#[test]
fn typing_from_other_user_sets_label() {
    let mut typing = TypingIndicator::default();
    assert!(typing.show("Bob", Some("Alice")).is_some());
    assert_eq!(typing.label(), Some("Bob"));
}

#[test]
fn typing_from_self_is_ignored() {
    let mut typing = TypingIndicator::default();
    assert_eq!(typing.show("Bob", Some("Bob")), None);
    assert_eq!(typing.label(), None);
}

#[test]
fn typing_expires_with_its_own_token() {
    let mut typing = TypingIndicator::default();
    let token = typing.show("Bob", Some("Alice")).expect("token");
    assert!(typing.expire(token));
    assert_eq!(typing.label(), None);
}

#[test]
fn newer_signal_supersedes_older_timer() {
    let mut typing = TypingIndicator::default();
    let bob = typing.show("Bob", Some("Alice")).expect("token");
    let carol = typing.show("Carol", Some("Alice")).expect("token");

    assert!(!typing.expire(bob));
    assert_eq!(typing.label(), Some("Carol"));
    assert!(typing.expire(carol));
    assert_eq!(typing.label(), None);
}

#[test]
fn expire_after_clear_is_noop() {
    let mut typing = TypingIndicator::default();
    let token = typing.show("Bob", None).expect("token");
    assert!(typing.expire(token));
    assert!(!typing.expire(token));
}

#[test]
fn typing_timeout_is_one_and_a_half_seconds() {
    assert_eq!(TYPING_TIMEOUT.as_millis(), 1500);
}
