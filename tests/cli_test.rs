use std::path::Path;
use std::process::Output;

use serde_json::json;
use tempfile::TempDir;
use tokio::process::Command;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ASSISTANT_ID: &str = "asst_bin";

/// Runs the binary from an empty directory so no `.env` is picked up, with
/// colors off and only the given OpenAI variables set.
async fn run(workdir: &Path, envs: &[(&str, &str)], args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_gpts-files"));
    cmd.current_dir(workdir)
        .env("NO_COLOR", "1")
        .env_remove("CLICOLOR_FORCE")
        .env_remove("RUST_LOG");
    for var in [
        "OPENAI_API_KEY",
        "OPENAI_GPTS_ID",
        "OPENAI_BASE_URL",
        "OPENAI_TIMEOUT_SECS",
    ] {
        cmd.env_remove(var);
    }
    cmd.envs(envs.iter().copied()).args(args);
    cmd.output().await.unwrap()
}

async fn run_against(server: &MockServer, workdir: &Path, args: &[&str]) -> Output {
    let uri = server.uri();
    let envs = [
        ("OPENAI_API_KEY", "sk-test"),
        ("OPENAI_GPTS_ID", ASSISTANT_ID),
        ("OPENAI_BASE_URL", uri.as_str()),
        ("OPENAI_TIMEOUT_SECS", "5"),
    ];
    run(workdir, &envs, args).await
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[tokio::test]
async fn test_upload_prints_file_id() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("notes.txt"), "hello").unwrap();

    Mock::given(method("POST"))
        .and(path("/files"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "file-up1",
            "object": "file",
            "bytes": 5,
            "created_at": 1699055364,
            "filename": "notes.txt",
            "purpose": "assistants"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!("/assistants/{ASSISTANT_ID}/files")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "file-up1"})))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_against(&server, dir.path(), &["upload", "notes.txt"]).await;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim_end(), "✓ File uploaded successfully: file-up1");
    assert!(stderr(&output).is_empty());
}

#[tokio::test]
async fn test_list_prints_table_rows() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path(format!("/assistants/{ASSISTANT_ID}/files")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "data": [
                {"id": "file-1", "bytes": 2048, "created_at": 1699055364, "filename": "a.md", "purpose": "assistants"},
                {"id": "file-2", "bytes": 1536, "created_at": 1699055364, "filename": "b.pdf", "purpose": "assistants"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_against(&server, dir.path(), &["list"]).await;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("ID"));
    assert!(lines[2].starts_with("file-1"));
    assert!(lines[2].contains("a.md") && lines[2].contains("2.00 KB"));
    assert!(lines[3].starts_with("file-2"));
    assert!(lines[3].contains("b.pdf") && lines[3].contains("1.50 KB"));
}

#[tokio::test]
async fn test_delete_prints_success() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("DELETE"))
        .and(path(format!("/assistants/{ASSISTANT_ID}/files/file-9")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "file-9", "deleted": true})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/files/file-9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "file-9", "deleted": true})))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_against(&server, dir.path(), &["delete", "file-9"]).await;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim_end(), "✓ File deleted successfully");
}

#[tokio::test]
async fn test_api_error_exits_with_one_and_single_error_line() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("DELETE"))
        .and(path(format!("/assistants/{ASSISTANT_ID}/files/file-9")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {"message": "No file found with id 'file-9'.", "type": "invalid_request_error"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_against(&server, dir.path(), &["delete", "file-9"]).await;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert_eq!(
        stderr(&output).trim_end(),
        "✗ Error: No file found with id 'file-9'."
    );
}

#[tokio::test]
async fn test_missing_api_key_exits_with_one() {
    let dir = TempDir::new().unwrap();

    let output = run(dir.path(), &[("OPENAI_GPTS_ID", ASSISTANT_ID)], &["list"]).await;
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stderr(&output).trim_end(),
        "✗ Error: OPENAI_API_KEY is not set"
    );
}
