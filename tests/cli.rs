//! 二进制层面的退出码：只有 URL 无效时非零退出。

mod common;

use common::http_server::{self, Route};
use std::process::{Command, Output};
use tempfile::tempdir;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sensitive_file_scan"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("运行二进制失败")
}

#[test]
fn invalid_url_exits_with_1_and_logs_error() {
    let output = run(&["example.com"]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR"));
    assert!(stderr.contains("URL无效"));
}

#[test]
fn unreachable_host_still_exits_0() {
    let base = http_server::closed_port_url();
    let output = run(&[&base, "-f", ".env"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stderr).contains("No sensitive files were found."));
}

#[test]
fn zero_timeout_exits_0() {
    let base = http_server::closed_port_url();
    let output = run(&[&base, "-t", "0", "-f", ".env"]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn found_file_exits_0() {
    let base = http_server::start(vec![("/.env", Route::Status(200, "K=V".to_string()))]);
    let output = run(&[&base, "-f", ".env"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stderr).contains(&format!("Found: {}/.env", base)));
}

#[test]
fn output_write_failure_exits_0() {
    let base = http_server::closed_port_url();
    let dir = tempdir().unwrap();
    let dir_path = dir.path().display().to_string();

    // 输出路径是目录，写入必然失败
    let output = run(&[&base, "-f", ".env", "-o", &dir_path]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error writing to output file"));
}
