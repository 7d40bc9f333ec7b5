//!
//! The GitHub REST API client tests.
//!

use super::comment::Comment;
use super::comment::PullRequestComment;
use super::pull_request::PullRequest;
use super::pull_request::PullRequestBody;
use super::BodyUpdate;
use super::Client;
use crate::config::Config;

fn config(api_url: Option<&str>) -> Config {
    Config::from_lookup(|name| match name {
        "GITHUB_TOKEN" => Some("secret".to_owned()),
        "GITHUB_REPOSITORY" => Some("owner/name".to_owned()),
        "PR_NUMBER" => Some("42".to_owned()),
        "GITHUB_API_URL" => api_url.map(str::to_owned),
        _ => None,
    })
    .expect("Always valid")
}

#[test]
fn pull_request_url() {
    let config = config(None);
    let client = Client::new(&config).expect("Always valid");

    let sink = PullRequestBody::new(&client);
    assert_eq!(sink.url(), "https://api.github.com/repos/owner/name/pulls/42");
}

#[test]
fn comment_urls() {
    let config = config(Some("https://github.example.com/api/v3"));
    let client = Client::new(&config).expect("Always valid");

    let sink = PullRequestComment::new(&client);
    assert_eq!(
        sink.comments_url(),
        "https://github.example.com/api/v3/repos/owner/name/issues/42/comments?per_page=1"
    );
    assert_eq!(
        sink.comment_url(1001),
        "https://github.example.com/api/v3/repos/owner/name/issues/comments/1001"
    );
}

#[test]
fn pull_request_null_body() {
    let pull_request: PullRequest = serde_json::from_str(
        r#"{ "number": 42, "title": "Speed up parser", "body": null, "state": "open" }"#,
    )
    .expect("Always valid");

    assert_eq!(pull_request.number, 42);
    assert_eq!(pull_request.body, None);
}

#[test]
fn comments_list() {
    let comments: Vec<Comment> = serde_json::from_str(
        r#"[
            { "id": 1, "body": "first", "user": { "login": "github-actions[bot]" } },
            { "id": 2, "body": "second", "user": { "login": "someone" } }
        ]"#,
    )
    .expect("Always valid");

    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].id, 1);
    assert_eq!(comments[0].body.as_deref(), Some("first"));
}

#[test]
fn body_update_payload() {
    let payload = serde_json::to_value(BodyUpdate {
        body: "line\n\"quoted\"",
    })
    .expect("Always valid");

    assert_eq!(payload, serde_json::json!({ "body": "line\n\"quoted\"" }));
}

#[test]
fn error_message_extracted() {
    let text = r#"{ "message": "Bad credentials", "documentation_url": "https://docs.github.com/rest" }"#;

    assert_eq!(Client::error_message(text.to_owned()), "Bad credentials");
    assert_eq!(
        Client::error_message("<html>502</html>".to_owned()),
        "<html>502</html>"
    );
}
