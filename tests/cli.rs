use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::write;
use tempfile::tempdir;
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Binary under test, run from an empty directory so no stray `.env` is picked up.
fn vector_upload_cmd(workdir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("vector-upload").expect("Binary exists");
    cmd.current_dir(workdir)
        .env_remove("OPENAI_API_KEY")
        .env_remove("OPENAI_VECTOR_STORE_ID")
        .env_remove("OPENAI_BASE_URL")
        .env_remove("OPENAI_ORG_ID")
        .env_remove("OPENAI_PROJECT_ID");
    cmd
}

#[tokio::test(flavor = "multi_thread")]
async fn cli_happy_flow_prints_confirmation_line() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/files"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "file-cli",
            "object": "file",
            "bytes": 5,
            "filename": "doc-1_input.txt",
            "purpose": "user_data"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/vector_stores/vs_cli/files"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "file-cli",
            "object": "vector_store.file",
            "vector_store_id": "vs_cli",
            "status": "completed"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let input = dir.path().join("input.txt");
    write(&input, b"hello").unwrap();

    vector_upload_cmd(dir.path())
        .arg(&input)
        .arg("doc-1")
        .env("OPENAI_API_KEY", "sk-test")
        .env("OPENAI_VECTOR_STORE_ID", "vs_cli")
        .env("OPENAI_BASE_URL", server.uri())
        .assert()
        .success()
        .stdout("File added to vector store.\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn cli_missing_file_fails_without_contacting_api() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();

    vector_upload_cmd(dir.path())
        .arg(dir.path().join("nope.pdf"))
        .arg("doc-1")
        .env("OPENAI_API_KEY", "sk-test")
        .env("OPENAI_VECTOR_STORE_ID", "vs_cli")
        .env("OPENAI_BASE_URL", server.uri())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("nope.pdf"));
}

#[test]
fn cli_missing_api_key_fails_naming_the_variable() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.txt");
    write(&input, b"hello").unwrap();

    vector_upload_cmd(dir.path())
        .arg(&input)
        .arg("doc-1")
        .env("OPENAI_VECTOR_STORE_ID", "vs_cli")
        .assert()
        .failure()
        .stderr(predicate::str::contains("OPENAI_API_KEY"));
}

#[test]
fn cli_missing_vector_store_id_fails_naming_the_variable() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.txt");
    write(&input, b"hello").unwrap();

    vector_upload_cmd(dir.path())
        .arg(&input)
        .arg("doc-1")
        .env("OPENAI_API_KEY", "sk-test")
        .assert()
        .failure()
        .stderr(predicate::str::contains("OPENAI_VECTOR_STORE_ID"));
}

#[test]
fn cli_requires_both_positional_arguments() {
    let dir = tempdir().unwrap();

    vector_upload_cmd(dir.path())
        .arg("only-a-path.txt")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("<DOC_ID>"));
}
