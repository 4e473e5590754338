//! End-to-end mirror runs against a mocked AList server.

use autofilm_config::{Config, OutputPolicy};
use autofilm_events::EventBus;
use autofilm_sync::{Orchestrator, RunSummary};
use serde_json::json;
use std::path::Path;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "secret-token";

/// Mounts login plus a `/media` tree holding one film and its subtitle.
async fn mock_alist(subtitle_status: u16) -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_partial_json(json!({"username": "admin"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "message": "success",
            "data": {"token": "session"}
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_partial_json(json!({"username": "intruder"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 400,
            "message": "password is incorrect",
            "data": null
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/fs/list"))
        .and(body_partial_json(json!({"path": "/media"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "message": "success",
            "data": {"content": [{"name": "Film", "is_dir": true, "size": 0}], "total": 1}
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/fs/list"))
        .and(body_partial_json(json!({"path": "/media/Film"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "message": "success",
            "data": {
                "content": [
                    {"name": "Film.mkv", "is_dir": false, "size": 100},
                    {"name": "Film.srt", "is_dir": false, "size": 10},
                    {"name": "notes.txt", "is_dir": false, "size": 1}
                ],
                "total": 3
            }
        })))
        .mount(&server)
        .await;

    let subtitle = ResponseTemplate::new(subtitle_status);
    let subtitle = if subtitle_status == 200 {
        subtitle.set_body_string("1\n00:00:01,000 --> 00:00:02,000\nHello\n")
    } else {
        subtitle
    };
    Mock::given(method("GET"))
        .and(path("/d/media/Film/Film.srt"))
        .respond_with(subtitle)
        .mount(&server)
        .await;

    server
}

fn config(servers: &str) -> Config {
    Config::parse(&format!("[settings]\noutput_dir = \"unused\"\n{}", servers)).unwrap()
}

fn server_block(uri: &str, username: &str) -> String {
    format!(
        "[[servers]]\nname = \"{username}\"\nurl = \"{uri}/\"\nusername = \"{username}\"\npassword = \"pw\"\nbase_path = \"media\"\ntoken = \"{TOKEN}\"\n"
    )
}

async fn run(config: &Config, out: &Path, subtitle: bool) -> RunSummary {
    let policy = OutputPolicy::new(out.to_path_buf(), false, subtitle, false, false, None);
    let orchestrator = Orchestrator::new(policy, EventBus::new(true));
    orchestrator.run(config.server_configs()).await
}

#[tokio::test]
async fn video_only_when_subtitles_disabled() {
    let server = mock_alist(200).await;
    let out = tempfile::tempdir().unwrap();
    let config = config(&server_block(&server.uri(), "admin"));

    let summary = run(&config, out.path(), false).await;

    let pointer = out.path().join("Film/Film.strm");
    let expected = format!(
        "{}/d/media/Film/Film.mkv{}",
        server.uri(),
        autofilm_utils::sign(Some(TOKEN), "/media/Film/Film.mkv")
    );
    assert_eq!(std::fs::read_to_string(&pointer).unwrap(), expected);
    assert!(!out.path().join("Film/Film.srt").exists());
    assert!(!out.path().join("Film/notes.txt").exists());

    assert_eq!(summary.servers, 1);
    assert_eq!(summary.pointers, 1);
    assert_eq!(summary.downloads, 0);
    assert_eq!(summary.skipped, 1);
}

#[tokio::test]
async fn rerun_with_subtitles_adds_subtitle_file() {
    let server = mock_alist(200).await;
    let out = tempfile::tempdir().unwrap();
    let config = config(&server_block(&server.uri(), "admin"));

    run(&config, out.path(), false).await;
    let summary = run(&config, out.path(), true).await;

    assert!(out.path().join("Film/Film.strm").exists());
    assert_eq!(
        std::fs::read_to_string(out.path().join("Film/Film.srt")).unwrap(),
        "1\n00:00:01,000 --> 00:00:02,000\nHello\n"
    );
    assert_eq!(summary.pointers, 1);
    assert_eq!(summary.downloads, 1);
}

#[tokio::test]
async fn subtitle_not_found_is_skipped_quietly() {
    let server = mock_alist(404).await;
    let out = tempfile::tempdir().unwrap();
    let config = config(&server_block(&server.uri(), "admin"));

    let summary = run(&config, out.path(), true).await;

    assert!(out.path().join("Film/Film.strm").exists());
    assert!(!out.path().join("Film/Film.srt").exists());
    assert_eq!(summary.failed, 0);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.skipped_servers, 0);
}

#[tokio::test]
async fn missing_username_does_not_block_next_server() {
    let server = mock_alist(200).await;
    let out = tempfile::tempdir().unwrap();
    let broken = format!(
        "[[servers]]\nname = \"broken\"\nurl = \"{}\"\npassword = \"pw\"\n",
        server.uri()
    );
    let config = config(&format!("{}{}", broken, server_block(&server.uri(), "admin")));

    let summary = run(&config, out.path(), false).await;

    assert_eq!(summary.skipped_servers, 1);
    assert_eq!(summary.servers, 1);
    assert!(out.path().join("Film/Film.strm").exists());
}

#[tokio::test]
async fn failed_login_skips_only_that_server() {
    let server = mock_alist(200).await;
    let out = tempfile::tempdir().unwrap();
    let config = config(&format!(
        "{}{}",
        server_block(&server.uri(), "intruder"),
        server_block(&server.uri(), "admin")
    ));

    let summary = run(&config, out.path(), false).await;

    assert_eq!(summary.skipped_servers, 1);
    assert_eq!(summary.servers, 1);
    assert_eq!(summary.pointers, 1);
}

#[tokio::test]
async fn library_mode_flattens_and_ignores_downloads() {
    let server = mock_alist(200).await;
    let out = tempfile::tempdir().unwrap();
    let config = config(&server_block(&server.uri(), "admin"));

    // Toggles are forced off by library mode
    let policy = OutputPolicy::new(out.path().to_path_buf(), true, true, true, true, Some(1));
    let summary = Orchestrator::new(policy, EventBus::new(true))
        .run(config.server_configs())
        .await;

    assert!(out.path().join("Film.strm").exists());
    assert!(!out.path().join("Film").exists());
    assert!(!out.path().join("Film.srt").exists());
    assert_eq!(summary.pointers, 1);
    assert_eq!(summary.downloads, 0);
}
