//! Unit tests for the chat flow in [`assistant_cli::ask`].
//!
//! Uses a hand-rolled mock [`LlmClient`]; does not call OpenAI. Covers the
//! reply passing through verbatim, the exact message list sent, and error
//! propagation.

use assistant_cli::{ask, DEMO_PROMPT};
use async_trait::async_trait;
use llm_client::LlmClient;
use prompt::{ChatMessage, MessageRole};
use std::sync::Mutex;

const FUN_FACT: &str = "AI was first coined in 1956 at Dartmouth College!";

/// Mock LlmClient for tests: records every message list it receives and
/// returns a canned reply or error. No network.
struct MockLlmClient {
    reply: Result<String, String>,
    calls: Mutex<Vec<Vec<ChatMessage>>>,
}

impl MockLlmClient {
    fn replying(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn failing(error: &str) -> Self {
        Self {
            reply: Err(error.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<Vec<ChatMessage>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn send_messages(&self, messages: Vec<ChatMessage>) -> anyhow::Result<String> {
        self.calls.lock().unwrap().push(messages);
        match &self.reply {
            Ok(reply) => Ok(reply.clone()),
            Err(error) => Err(anyhow::anyhow!("{}", error)),
        }
    }
}

/// **Test: The mocked reply comes back verbatim from a single call.**
#[tokio::test]
async fn ask_returns_the_reply_verbatim() {
    let mock = MockLlmClient::replying(FUN_FACT);

    let reply = ask(&mock, "Tell me a fun fact about AI").await.unwrap();

    assert_eq!(reply, FUN_FACT);
    assert_eq!(mock.calls().len(), 1);
}

/// **Test: The client receives exactly one user message wrapping the prompt.**
#[tokio::test]
async fn ask_sends_exactly_one_user_message() {
    let mock = MockLlmClient::replying("ok");

    ask(&mock, "Tell me a fun fact about AI").await.unwrap();

    let calls = mock.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0], vec![ChatMessage::user("Tell me a fun fact about AI")]);
}

/// **Test: Client errors reach the caller with the message intact.**
#[tokio::test]
async fn ask_propagates_client_errors() {
    let mock = MockLlmClient::failing("API Error");

    let err = ask(&mock, "Hello").await.unwrap_err();

    assert_eq!(err.to_string(), "API Error");
}

/// **Test: An empty reply passes through unchanged.**
#[tokio::test]
async fn ask_passes_empty_replies_through() {
    let mock = MockLlmClient::replying("");

    let reply = ask(&mock, "Hello").await.unwrap();

    assert_eq!(reply, "");
}

/// **Test: The demo prompt goes out as a single user-role message.**
#[tokio::test]
async fn demo_prompt_is_wrapped_as_a_user_message() {
    let mock = MockLlmClient::replying("ok");

    ask(&mock, DEMO_PROMPT).await.unwrap();

    let calls = mock.calls();
    assert_eq!(calls[0][0].role, MessageRole::User);
    assert_eq!(calls[0][0].content, DEMO_PROMPT);
}
