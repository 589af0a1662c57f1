#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use std::time::{SystemTime, UNIX_EPOCH};

pub fn temp_path(file_name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("tasklist-{nanos}-{file_name}"))
}

/// Runs one session with `input` on stdin and no config file on disk.
pub fn run_session(args: &[&str], input: &str) -> Output {
    let config_path = temp_path("absent-config.json");
    run_session_with_config(&config_path, args, input)
}

pub fn run_session_with_config(config_path: &PathBuf, args: &[&str], input: &str) -> Output {
    let exe = env!("CARGO_BIN_EXE_tasklist");
    let mut child = Command::new(exe)
        .args(args)
        .env("TASKLIST_CONFIG_PATH", config_path)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn session");

    {
        let stdin = child.stdin.as_mut().expect("stdin");
        // The process may already have exited on a startup error.
        let _ = stdin.write_all(input.as_bytes());
    }

    child.wait_with_output().expect("failed to read session output")
}
