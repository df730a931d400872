//! End-to-end tests of a hook run: real git, mocked Anthropic API.

mod common;

use std::fs;

use commit_msg_generator::claude::AnthropicClient;
use commit_msg_generator::commit::{HookOutcome, prepare_commit_msg};
use commit_msg_generator::config::Settings;
use commit_msg_generator::error::{CompletionError, GenerateError};
use commit_msg_generator::git::GitCli;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{GIT_TEMPLATE, TestRepo, commit_msg_file, text_response};

async fn api_replying(message: &str, expected_calls: u64) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_response(message)))
        .expect(expected_calls)
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_generated_message_is_prepended_to_template() {
    let repo = TestRepo::new();
    repo.stage("hello.txt", "hello\n");
    let msg_file = commit_msg_file(repo.path(), GIT_TEMPLATE);

    let server = api_replying("feat: add hello file", 1).await;
    let service = AnthropicClient::new(Some("sk-test".to_string()), server.uri()).unwrap();

    let outcome = prepare_commit_msg(
        &msg_file,
        &GitCli::in_dir(repo.path()),
        &service,
        &Settings::default(),
    )
    .await
    .unwrap();

    assert_eq!(
        outcome,
        HookOutcome::Prepended {
            message: "feat: add hello file".to_string()
        }
    );
    assert_eq!(
        fs::read_to_string(&msg_file).unwrap(),
        format!("feat: add hello file\n\n{GIT_TEMPLATE}")
    );
}

#[tokio::test]
async fn test_empty_file_gets_message_and_blank_line() {
    let repo = TestRepo::new();
    repo.stage("a.txt", "a\n");
    let msg_file = commit_msg_file(repo.path(), "");

    let server = api_replying("chore: add a", 1).await;
    let service = AnthropicClient::new(Some("sk-test".to_string()), server.uri()).unwrap();

    prepare_commit_msg(&msg_file, &GitCli::in_dir(repo.path()), &service, &Settings::default())
        .await
        .unwrap();

    assert_eq!(fs::read_to_string(&msg_file).unwrap(), "chore: add a\n\n");
}

#[tokio::test]
async fn test_existing_message_is_byte_identical() {
    let repo = TestRepo::new();
    repo.stage("a.txt", "a\n");
    let original = format!("fix: handwritten message\n{GIT_TEMPLATE}");
    let msg_file = commit_msg_file(repo.path(), &original);

    let server = api_replying("feat: generated", 1).await;
    let service = AnthropicClient::new(Some("sk-test".to_string()), server.uri()).unwrap();

    let outcome =
        prepare_commit_msg(&msg_file, &GitCli::in_dir(repo.path()), &service, &Settings::default())
            .await
            .unwrap();

    assert!(matches!(outcome, HookOutcome::KeptExisting { .. }));
    assert_eq!(fs::read(&msg_file).unwrap(), original.as_bytes());
}

#[tokio::test]
async fn test_nothing_staged_makes_no_request_and_no_write() {
    let repo = TestRepo::new();
    repo.write("untracked.txt", "not staged\n");
    let msg_file = commit_msg_file(repo.path(), GIT_TEMPLATE);

    let server = api_replying("unused", 0).await;
    let service = AnthropicClient::new(Some("sk-test".to_string()), server.uri()).unwrap();

    let outcome =
        prepare_commit_msg(&msg_file, &GitCli::in_dir(repo.path()), &service, &Settings::default())
            .await
            .unwrap();

    assert_eq!(outcome, HookOutcome::NothingStaged);
    assert_eq!(fs::read_to_string(&msg_file).unwrap(), GIT_TEMPLATE);
}

#[tokio::test]
async fn test_nothing_staged_does_not_need_credential() {
    let repo = TestRepo::new();
    let msg_file = commit_msg_file(repo.path(), "");
    let service = AnthropicClient::new(None, "http://127.0.0.1:1").unwrap();

    let outcome =
        prepare_commit_msg(&msg_file, &GitCli::in_dir(repo.path()), &service, &Settings::default())
            .await
            .unwrap();

    assert_eq!(outcome, HookOutcome::NothingStaged);
}

#[tokio::test]
async fn test_missing_credential_is_fatal_when_changes_are_staged() {
    let repo = TestRepo::new();
    repo.stage("a.txt", "a\n");
    let msg_file = commit_msg_file(repo.path(), "");
    let service = AnthropicClient::new(None, "http://127.0.0.1:1").unwrap();

    let result =
        prepare_commit_msg(&msg_file, &GitCli::in_dir(repo.path()), &service, &Settings::default())
            .await;

    assert!(matches!(
        result,
        Err(GenerateError::Completion(CompletionError::MissingApiKey))
    ));
    assert_eq!(fs::read_to_string(&msg_file).unwrap(), "");
}

#[tokio::test]
async fn test_custom_settings_reach_the_api() {
    let repo = TestRepo::new();
    repo.stage("a.txt", "a\n");
    let msg_file = commit_msg_file(repo.path(), "");

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(wiremock::matchers::body_partial_json(serde_json::json!({
            "model": "claude-custom",
            "max_tokens": 64
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_response("docs: a")))
        .expect(1)
        .mount(&server)
        .await;
    let service = AnthropicClient::new(Some("sk-test".to_string()), server.uri()).unwrap();

    let settings = Settings {
        model: "claude-custom".to_string(),
        max_tokens: 64,
        prompt: "Only this: {diff}".to_string(),
    };

    prepare_commit_msg(&msg_file, &GitCli::in_dir(repo.path()), &service, &settings)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let prompt = body["messages"][0]["content"].as_str().unwrap();
    assert!(prompt.starts_with("Only this: diff --git a/a.txt b/a.txt"));
}
