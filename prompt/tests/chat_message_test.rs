//! Unit tests for `prompt::ChatMessage` construction.
//!
//! External interactions: none (pure value tests).

use prompt::{ChatMessage, MessageRole};

/// **Test: ChatMessage::user pairs the user role with the given content.**
#[test]
fn user_message_has_user_role_and_content() {
    let msg = ChatMessage::user("Hello, AI!");
    assert_eq!(msg.role, MessageRole::User);
    assert_eq!(msg.content, "Hello, AI!");
}

/// **Test: empty content is preserved; the role is still user.**
#[test]
fn user_message_accepts_empty_content() {
    let msg = ChatMessage::user("");
    assert_eq!(msg.role, MessageRole::User);
    assert_eq!(msg.content, "");
}

#[test]
fn system_and_assistant_constructors_set_their_roles() {
    assert_eq!(ChatMessage::system("Be brief.").role, MessageRole::System);
    assert_eq!(ChatMessage::assistant("Sure.").role, MessageRole::Assistant);
}

#[test]
fn constructors_accept_str_and_string() {
    let from_str = ChatMessage::user("hi");
    let from_string = ChatMessage::user(String::from("hi"));
    assert_eq!(from_str, from_string);
}
