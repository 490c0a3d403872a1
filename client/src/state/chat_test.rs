use super::*;

#[test]
fn starts_closed_with_greeting() {
    let state = ChatState::default();
    assert!(!state.open);
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].sender, Sender::Bot);
    assert_eq!(state.messages[0].text, GREETING);
}

#[test]
fn submit_trims_and_appends_user_message() {
    let mut state = ChatState::default();
    assert_eq!(state.submit("  What is a moratorium?  ").as_deref(), Some("What is a moratorium?"));
    assert!(state.pending);
    let last = state.messages.last().unwrap();
    assert_eq!(last.sender, Sender::User);
    assert_eq!(last.text, "What is a moratorium?");
}

#[test]
fn blank_or_concurrent_submit_is_ignored() {
    let mut state = ChatState::default();
    assert_eq!(state.submit("   "), None);
    assert_eq!(state.messages.len(), 1);

    state.submit("first").unwrap();
    assert_eq!(state.submit("second"), None);
    assert_eq!(state.messages.len(), 2);
}

#[test]
fn resolve_appends_answer_and_clears_pending() {
    let mut state = ChatState::default();
    state.submit("hi").unwrap();
    state.resolve(Ok("Hello!".into()));
    assert!(!state.pending);
    assert_eq!(state.messages.last().unwrap().text, "Hello!");
    assert_eq!(state.messages.last().unwrap().sender, Sender::Bot);
}

#[test]
fn network_failure_becomes_static_bot_message() {
    let mut state = ChatState::default();
    state.submit("hi").unwrap();
    state.resolve(Err(FetchError::Network("TypeError: Failed to fetch".into())));
    assert_eq!(state.messages.last().unwrap().text, FAILURE_MESSAGE);
    assert!(!state.pending);
}

#[test]
fn status_codes_pick_specific_copy() {
    assert_eq!(bot_copy_for_error(&FetchError::Status(429)), RATE_LIMITED_MESSAGE);
    assert_eq!(bot_copy_for_error(&FetchError::Status(503)), UNAVAILABLE_MESSAGE);
    assert_eq!(bot_copy_for_error(&FetchError::Status(502)), FAILURE_MESSAGE);
}

#[test]
fn message_ids_are_unique() {
    let mut state = ChatState::default();
    state.submit("a").unwrap();
    state.resolve(Ok("b".into()));
    let ids: std::collections::HashSet<_> = state.messages.iter().map(|m| m.id).collect();
    assert_eq!(ids.len(), state.messages.len());
}
