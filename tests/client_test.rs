use httpmock::prelude::*;
use notilog::client::{ClientConfig, ClientError, HttpTransport, LogClient};
use notilog::domain::{CategoryCode, LevelCode, LogRecord};
use serde_json::json;

fn sample_record() -> LogRecord {
    LogRecord {
        level: LevelCode::from(8),
        category: CategoryCode::from(1),
        message: "login failed".to_string(),
        context: vec!["attempt=3".to_string(), "ip=10.0.0.7".to_string()],
        env: "staging".to_string(),
        hostname: "auth-02".to_string(),
        namespace: "auth".to_string(),
        origin: "api-gateway".to_string(),
        binary: "authd".to_string(),
        user: "alice".to_string(),
    }
}

#[test]
fn submit_posts_the_normalized_record() {
    let server = MockServer::start();

    // level 8 and category 1 are recognized codes, so they collapse to the
    // INFO/TECHNICAL defaults before serialization.
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/notifications")
            .header("authorization", "s3cret")
            .header("content-type", "application/json; charset=utf-8")
            .json_body(json!({
                "level": 2,
                "category": 32,
                "message": "login failed",
                "context": ["attempt=3", "ip=10.0.0.7"],
                "env": "staging",
                "hostname": "auth-02",
                "namespace": "auth",
                "origin": "api-gateway",
                "binary": "authd",
                "user": "alice",
            }));
        then.status(201).body("created");
    });

    let client = LogClient::new(server.base_url(), "s3cret").unwrap();
    let body = client.submit(sample_record()).unwrap();

    mock.assert();
    assert_eq!(body, "created");
}

#[test]
fn submit_passes_unrecognized_codes_through() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/notifications").json_body(json!({
            "level": 3,
            "category": 100,
            "message": "odd codes",
            "context": [],
            "env": "",
            "hostname": "",
            "namespace": "",
            "origin": "",
            "binary": "",
            "user": "",
        }));
        then.status(200).body("ok");
    });

    let client = LogClient::new(server.base_url(), "t").unwrap();
    let record = LogRecord {
        level: LevelCode::from(3),
        category: CategoryCode::from(100),
        message: "odd codes".to_string(),
        ..LogRecord::default()
    };
    client.submit(record).unwrap();

    mock.assert();
}

#[test]
fn empty_auth_token_sends_the_default() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/notifications")
            .header("authorization", "logger");
        then.status(200).body("[]");
    });

    let client = LogClient::new(server.base_url(), "").unwrap();
    let body = client.list(20, 1).unwrap();

    mock.assert();
    assert_eq!(body, "[]");
}

#[test]
fn list_targets_the_paginated_path() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/notifications")
            .query_param("page", "2")
            .query_param("per_page", "10")
            .header("authorization", "s3cret");
        then.status(200).body(r#"[{"id":1}]"#);
    });

    let client = LogClient::new(server.base_url(), "s3cret").unwrap();
    let body = client.list(10, 2).unwrap();

    mock.assert();
    assert_eq!(body, r#"[{"id":1}]"#);
}

#[test]
fn get_by_id_targets_the_id_path_with_get() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/notifications/42")
            .header("authorization", "s3cret");
        then.status(200).body(r#"{"id":42}"#);
    });

    let client = LogClient::new(server.base_url(), "s3cret").unwrap();
    let body = client.get_by_id(42).unwrap();

    mock.assert();
    assert_eq!(body, r#"{"id":42}"#);
}

#[test]
fn delete_by_id_targets_the_id_path_with_delete() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(DELETE)
            .path("/api/notifications/42")
            .header("authorization", "s3cret");
        then.status(200).body("deleted");
    });

    let client = LogClient::new(server.base_url(), "s3cret").unwrap();
    let body = client.delete_by_id(42).unwrap();

    mock.assert();
    assert_eq!(body, "deleted");
}

#[test]
fn trailing_slash_on_the_base_url_is_tolerated() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/notifications/7");
        then.status(200).body("{}");
    });

    let client = LogClient::new(format!("{}/", server.base_url()), "t").unwrap();
    client.get_by_id(7).unwrap();

    mock.assert();
}

#[test]
fn non_success_status_still_returns_the_body() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/api/notifications/404");
        then.status(404).body("no such entry");
    });

    let client = LogClient::new(server.base_url(), "t").unwrap();
    let body = client.get_by_id(404).unwrap();

    assert_eq!(body, "no such entry");
}

#[test]
fn unknown_method_fails_without_any_network_call() {
    let server = MockServer::start();

    // Catch-all mock: any request at all would be counted here.
    let mock = server.mock(|_when, then| {
        then.status(200);
    });

    let transport = HttpTransport::new(ClientConfig::new(server.base_url(), "t")).unwrap();
    let result = transport.dispatch("put", "/1", None);

    match result {
        Err(ClientError::UnknownMethod(method)) => assert_eq!(method, "put"),
        other => panic!("expected UnknownMethod, got {other:?}"),
    }
    assert_eq!(mock.hits(), 0);
}

#[test]
fn refused_connection_is_a_transport_error() {
    // Nothing listens on this port; the connection is refused immediately.
    let client = LogClient::new("http://127.0.0.1:1", "t").unwrap();

    let result = client.submit(sample_record());
    assert!(matches!(result, Err(ClientError::Transport(_))));

    let result = client.list(10, 1);
    assert!(matches!(result, Err(ClientError::Transport(_))));
}

#[test]
fn malformed_base_url_is_rejected_at_construction() {
    let result = LogClient::new("definitely not a url", "t");
    assert!(matches!(result, Err(ClientError::InvalidConfig(_))));
}
