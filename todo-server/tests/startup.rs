//! Process-level tests for server startup.
//!
//! Spawns the server binary and verifies it refuses to start (with the right
//! exit code) when the data file is unusable, and that `--print-schema` works
//! without one.

use std::fs;
use std::process::Command;

use todo_server::exit_codes;

fn server() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_todo-server"));
    cmd.env_remove("DATA_FILE")
        .env_remove("RUST_LOG")
        .args(["--bind", "127.0.0.1", "--port", "0"]);
    cmd
}

#[test]
fn missing_data_file_exits_with_startup_failure() {
    let temp = tempfile::tempdir().expect("tempdir");

    let output = server()
        .current_dir(temp.path())
        .env("DATA_FILE", temp.path().join("missing.json"))
        .output()
        .expect("run todo-server");

    assert_eq!(output.status.code(), Some(exit_codes::STARTUP_FAILED));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("load todo store"), "stderr: {stderr}");
}

#[test]
fn corrupt_data_file_exits_with_startup_failure() {
    let temp = tempfile::tempdir().expect("tempdir");
    let data_file = temp.path().join("todos.json");
    fs::write(&data_file, "[{\"id\": 1}").expect("write corrupt file");

    let status = server()
        .current_dir(temp.path())
        .arg("--data-file")
        .arg(&data_file)
        .status()
        .expect("run todo-server");

    assert_eq!(status.code(), Some(exit_codes::STARTUP_FAILED));
}

#[test]
fn unset_data_file_is_usage_error() {
    let temp = tempfile::tempdir().expect("tempdir");

    let status = server()
        .current_dir(temp.path())
        .status()
        .expect("run todo-server");

    assert_eq!(status.code(), Some(exit_codes::USAGE));
}

/// `DATA_FILE` from a `.env` in the working directory is honoured: startup gets
/// past argument parsing and fails on the (missing) file instead.
#[test]
fn data_file_is_read_from_dotenv() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join(".env"), "DATA_FILE=./from-dotenv.json\n").expect("write .env");

    let output = server()
        .current_dir(temp.path())
        .output()
        .expect("run todo-server");

    assert_eq!(output.status.code(), Some(exit_codes::STARTUP_FAILED));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("from-dotenv.json"), "stderr: {stderr}");
}

#[test]
fn print_schema_exits_ok_without_data_file() {
    let temp = tempfile::tempdir().expect("tempdir");

    let output = server()
        .current_dir(temp.path())
        .arg("--print-schema")
        .output()
        .expect("run todo-server");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("type Mutation"), "stdout: {stdout}");
    assert!(stdout.contains("addTodo(text: String!): Todo!"), "stdout: {stdout}");
}
