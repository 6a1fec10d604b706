//! Session scenarios against a scripted completion client.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;
use tempfile::TempDir;

use super::Session;
use crate::{ChatError, Completion, CompletionClient, Message, RemoteError, Role, ToolDefinition};

/// One recorded `complete` call.
#[derive(Debug, Clone)]
struct Call {
    model: String,
    messages: Vec<Message>,
    tools: Vec<ToolDefinition>,
}

/// Replays queued outcomes and records what it was sent.
#[derive(Clone, Default)]
struct MockClient {
    outcomes: Arc<Mutex<VecDeque<Result<Completion, ChatError>>>>,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl MockClient {
    fn reply(self, content: &str) -> Self {
        self.push(Ok(Completion::Reply(Message::assistant(content))))
    }

    fn push(self, outcome: Result<Completion, ChatError>) -> Self {
        self.outcomes.lock().unwrap().push_back(outcome);
        self
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for MockClient {
    async fn complete(
        &self,
        model: &str,
        messages: &[Message],
        tools: &[ToolDefinition],
    ) -> Result<Completion, ChatError> {
        self.calls.lock().unwrap().push(Call {
            model: model.to_string(),
            messages: messages.to_vec(),
            tools: tools.to_vec(),
        });
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ChatError::Network("no scripted reply".into())))
    }
}

fn session(client: MockClient) -> (TempDir, Session) {
    let dir = TempDir::new().unwrap();
    let session = Session::with_client(client, "glm-4-flash", dir.path()).unwrap();
    (dir, session)
}

#[test]
fn construct_fails_on_missing_storage() {
    let dir = TempDir::new().unwrap();
    let result = Session::with_client(MockClient::default(), "glm-4", dir.path().join("nope"));
    assert!(matches!(result, Err(ChatError::Configuration(_))));
}

#[test]
fn construct_with_api_key_uses_default_transport() {
    let dir = TempDir::new().unwrap();
    let session = Session::new("sk-test", "glm-4-flash", dir.path()).unwrap();
    assert_eq!(session.model(), "glm-4-flash");
    assert_eq!(session.storage_dir(), dir.path());
    assert_eq!(session.message_count(), 0);
}

#[test]
fn system_prompt_seeds_transcript() {
    let (_dir, session) = session(MockClient::default());
    let session = session.with_system_prompt("You are terse.");
    assert_eq!(session.messages(), &[Message::system("You are terse.")]);
    assert_eq!(session.system_prompt(), Some("You are terse."));

    let session = session.with_system_prompt("You are verbose.");
    assert_eq!(session.messages(), &[Message::system("You are verbose.")]);
}

#[tokio::test]
async fn send_appends_user_and_assistant() {
    let client = MockClient::default().reply("Hello");
    let (_dir, mut session) = session(client.clone());

    let completion = session.send(Message::user("Hi")).await.unwrap();

    assert_eq!(completion, Completion::Reply(Message::assistant("Hello")));
    assert_eq!(
        session.messages(),
        &[Message::user("Hi"), Message::assistant("Hello")]
    );

    let calls = client.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].model, "glm-4-flash");
    assert_eq!(calls[0].messages, vec![Message::user("Hi")]);
    assert!(calls[0].tools.is_empty());
}

#[tokio::test]
async fn rejection_is_returned_and_only_user_message_kept() {
    let client = MockClient::default().push(Ok(Completion::Rejected(RemoteError {
        status: 500,
        body: json!({ "error": "rate_limited" }),
    })));
    let (_dir, mut session) = session(client);

    let completion = session.send(Message::user("Hi")).await.unwrap();

    match completion {
        Completion::Rejected(err) => {
            assert_eq!(err.status, 500);
            assert_eq!(err.body, json!({ "error": "rate_limited" }));
        }
        other => panic!("expected rejection, got {other:?}"),
    }
    assert_eq!(session.messages(), &[Message::user("Hi")]);
}

#[tokio::test]
async fn transcript_grows_by_two_per_exchange() {
    let mut client = MockClient::default();
    for i in 0..5 {
        client = client.reply(&format!("answer {i}"));
    }
    let (_dir, session) = session(client.clone());
    let mut session = session.with_system_prompt("Be brief.");
    let initial = session.message_count();

    for i in 0..5 {
        session.send_user(format!("question {i}")).await.unwrap();
        assert_eq!(session.message_count(), initial + 2 * (i + 1));
    }

    // Each request carried the full transcript so far, in order.
    let calls = client.calls();
    assert_eq!(calls[4].messages.len(), initial + 9);
    assert_eq!(calls[4].messages[0].role, Role::System);
    assert_eq!(calls[4].messages[9], Message::user("question 4"));
}

#[tokio::test]
async fn tool_call_only_reply_is_returned_but_not_recorded() {
    let mut tool_reply = Message {
        role: Role::Assistant,
        content: None,
        extra: serde_json::Map::new(),
    };
    tool_reply.extra.insert(
        "tool_calls".into(),
        json!([{ "id": "call_1", "type": "function",
                 "function": { "name": "get_weather", "arguments": "{}" } }]),
    );
    let outcome = Ok(Completion::Reply(tool_reply.clone()));
    let client = MockClient::default().push(outcome);
    let (_dir, mut session) = session(client);

    let completion = session.send_user("Weather in Paris?").await.unwrap();

    assert_eq!(completion, Completion::Reply(tool_reply));
    assert_eq!(session.messages(), &[Message::user("Weather in Paris?")]);
}

#[tokio::test]
async fn empty_content_reply_is_not_recorded() {
    let client = MockClient::default().reply("");
    let (_dir, mut session) = session(client);

    let completion = session.send_user("Hi").await.unwrap();
    assert_eq!(completion, Completion::Reply(Message::assistant("")));
    assert_eq!(session.message_count(), 1);
}

#[tokio::test]
async fn reply_extras_are_returned_but_transcript_keeps_role_and_content() {
    let mut reply = Message::assistant("Looking it up.");
    reply.extra.insert("tool_calls".into(), json!([{ "id": "call_9" }]));
    let outcome = Ok(Completion::Reply(reply.clone()));
    let client = MockClient::default().push(outcome);
    let (_dir, mut session) = session(client);

    let completion = session.send_user("Find it").await.unwrap();
    assert_eq!(completion.reply(), Some(&reply));
    assert_eq!(session.messages()[1], Message::assistant("Looking it up."));
}

#[tokio::test]
async fn network_failure_propagates() {
    let outcome = Err(ChatError::Network("connection refused".into()));
    let client = MockClient::default().push(outcome);
    let (_dir, mut session) = session(client);

    let err = session.send_user("Hi").await.unwrap_err();
    assert!(matches!(err, ChatError::Network(_)));
    assert_eq!(session.messages(), &[Message::user("Hi")]);
}

#[tokio::test]
async fn tools_are_passed_through() {
    let tools = vec![json!({
        "type": "function",
        "function": { "name": "get_weather", "parameters": { "type": "object" } }
    })];
    let client = MockClient::default().reply("Sunny");
    let (_dir, session) = session(client.clone());
    let mut session = session.with_tools(tools.clone());

    session.send_user("Weather?").await.unwrap();

    assert_eq!(session.tools(), tools.as_slice());
    assert_eq!(client.calls()[0].tools, tools);
}

#[tokio::test]
async fn save_and_load_into_fresh_session() {
    let client = MockClient::default().reply("Bonjour").reply("Ça va bien");
    let (dir, session) = session(client);
    let mut session = session.with_system_prompt("Réponds en français.");
    session.send_user("Salut").await.unwrap();
    session.send_user("Ça va ?").await.unwrap();

    let id = session.save().unwrap();

    let mut fresh = Session::with_client(MockClient::default(), "glm-4-flash", dir.path()).unwrap();
    fresh.load(&id).unwrap();
    assert_eq!(fresh.messages(), session.messages());
}

#[tokio::test]
async fn load_replaces_transcript_wholesale() {
    let client = MockClient::default().reply("first reply");
    let (_dir, mut session) = session(client);
    let saved = session.save().unwrap();

    session.send_user("something new").await.unwrap();
    assert_eq!(session.message_count(), 2);

    session.load(&saved).unwrap();
    assert!(session.messages().is_empty());
}

#[test]
fn failed_load_keeps_transcript() {
    let (_dir, session) = session(MockClient::default());
    let mut session = session.with_system_prompt("keep");

    let err = session.load("00000000-0000-0000-0000-000000000000").unwrap_err();
    assert!(matches!(err, ChatError::NotFound(_)));
    assert_eq!(session.messages(), &[Message::system("keep")]);
}

#[tokio::test]
async fn list_and_delete_through_session() {
    let client = MockClient::default().reply("Hello");
    let (_dir, mut session) = session(client);
    session.send_user("Hello, world! extra").await.unwrap();
    let id = session.save().unwrap();

    let listed = session.list_conversations().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, id);
    assert_eq!(listed[0].title.as_deref(), Some("Hello, wor"));

    assert!(session.delete_conversation(&id).unwrap());
    assert!(!session.delete_conversation(&id).unwrap());
    assert!(session.list_conversations().unwrap().is_empty());
}

#[tokio::test]
async fn reset_returns_to_seeded_transcript() {
    let client = MockClient::default().reply("Hello");
    let (_dir, session) = session(client);
    let mut session = session.with_system_prompt("Be kind.");
    session.send_user("Hi").await.unwrap();
    assert_eq!(session.message_count(), 3);

    session.reset();
    assert_eq!(session.messages(), &[Message::system("Be kind.")]);
}
