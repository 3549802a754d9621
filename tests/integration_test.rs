use assert_cmd::Command;
use mockito::Server;
use predicates::prelude::*;
use serde_json::json;

fn panelkit() -> Command {
    let mut cmd = Command::cargo_bin("panelkit").unwrap();
    // Keep the environment out of the picture.
    cmd.env_remove("PANELKIT_BASE_URL").env_remove("PANELKIT_TOKEN");
    cmd
}

#[test]
fn test_get_prints_payload() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", "/users")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"code": 200, "data": [{"id": 1, "name": "alice"}], "message": "ok"}"#)
        .create();

    panelkit()
        .args(["--base-url", &server.url(), "get", "/users"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"alice\""));

    mock.assert();
}

#[test]
fn test_get_without_envelope_prints_whole_body() {
    let mut server = Server::new();

    let _mock = server
        .mock("GET", "/health")
        .with_status(200)
        .with_body(r#"{"healthy": true}"#)
        .create();

    panelkit()
        .args(["--base-url", &server.url(), "get", "/health"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"healthy\": true"));
}

#[test]
fn test_token_becomes_bearer_header() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", "/me")
        .match_header("authorization", "Bearer cli-token")
        .with_status(200)
        .with_body(r#"{"code": 200, "data": {"id": 1}}"#)
        .create();

    panelkit()
        .args([
            "--base-url",
            &server.url(),
            "--token",
            "cli-token",
            "get",
            "/me",
        ])
        .assert()
        .success();

    mock.assert();
}

#[test]
fn test_post_forwards_body() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/login")
        .match_body(mockito::Matcher::Json(json!({"user": "alice"})))
        .with_status(200)
        .with_body(r#"{"code": 200, "data": {"token": "t"}}"#)
        .create();

    panelkit()
        .args([
            "--base-url",
            &server.url(),
            "post",
            "/login",
            "--data",
            r#"{"user": "alice"}"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"token\": \"t\""));

    mock.assert();
}

#[test]
fn test_business_failure_exits_nonzero_with_message() {
    let mut server = Server::new();

    let _mock = server
        .mock("GET", "/quota")
        .with_status(200)
        .with_body(r#"{"code": 5001, "message": "quota exceeded"}"#)
        .create();

    panelkit()
        .args(["--base-url", &server.url(), "get", "/quota"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("quota exceeded"));
}

#[test]
fn test_transport_failure_exits_nonzero_with_canned_message() {
    let mut server = Server::new();

    let _mock = server.mock("GET", "/missing").with_status(404).create();

    panelkit()
        .args(["--base-url", &server.url(), "get", "/missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("resource not found"));
}

#[test]
fn test_invalid_body_is_rejected_before_sending() {
    let mut server = Server::new();

    // No mock registered: nothing should reach the server.
    panelkit()
        .args([
            "--base-url",
            &server.url(),
            "post",
            "/login",
            "--data",
            "not json",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid JSON"));
}
