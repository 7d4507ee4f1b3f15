#![allow(dead_code)]

use github_portfolio::config::ClientConfig;
use github_portfolio::github::GitHubClient;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const USERNAME: &str = "octocat";

pub fn client_for(server: &MockServer, token: Option<&str>) -> GitHubClient {
    let config = ClientConfig::new(USERNAME)
        .with_token(token.map(str::to_string))
        .with_base_url(server.uri());
    GitHubClient::new(config).expect("Failed to create client")
}

pub fn profile_json() -> Value {
    json!({
        "login": USERNAME,
        "id": 583231,
        "name": "The Octocat",
        "bio": null,
        "location": "San Francisco",
        "blog": "https://github.blog",
        "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
        "html_url": "https://github.com/octocat",
        "public_repos": 8,
        "followers": 9000,
        "following": 9,
        "created_at": "2011-01-25T18:44:36Z"
    })
}

pub fn repo_json(name: &str, language: Option<&str>, stars: u64, forks: u64, fork: bool) -> Value {
    json!({
        "name": name,
        "full_name": format!("{USERNAME}/{name}"),
        "description": format!("{name} description"),
        "html_url": format!("https://github.com/{USERNAME}/{name}"),
        "language": language,
        "stargazers_count": stars,
        "forks_count": forks,
        "updated_at": "2025-06-01T12:00:00Z",
        "topics": ["portfolio"],
        "homepage": null,
        "fork": fork
    })
}

pub fn event_json(event_type: &str, repo: &str, payload: Value) -> Value {
    json!({
        "id": "1",
        "type": event_type,
        "repo": {"id": 1, "name": repo},
        "payload": payload,
        "created_at": "2025-06-02T08:30:00Z"
    })
}

/// Mount the happy-path fixtures every report test starts from.
pub async fn mount_all(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(format!("/users/{USERNAME}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_json()))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/users/{USERNAME}/repos")))
        .and(query_param("type", "owner"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            repo_json("site", Some("TypeScript"), 3, 1, false),
            repo_json("forked-lib", Some("Rust"), 50, 2, true),
            repo_json("cli", Some("Rust"), 7, 0, false),
        ])))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/users/{USERNAME}/repos")))
        .and(query_param("per_page", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            repo_json("site", Some("TypeScript"), 3, 1, false),
            repo_json("forked-lib", Some("Rust"), 50, 2, true),
            repo_json("cli", Some("Rust"), 7, 0, false),
            repo_json("notes", None, 0, 0, false),
        ])))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/users/{USERNAME}/events/public")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            event_json("PushEvent", "octocat/site", json!({"commits": [{}, {}]})),
            event_json("WatchEvent", "rust-lang/rust", json!({"action": "started"})),
        ])))
        .mount(server)
        .await;
}
