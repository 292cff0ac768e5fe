use crate::common::{run_launcher, stderr_text, stdout_text, CLIENT_BIN, SERVER_BIN};

#[test]
fn unknown_flag_exits_with_usage_code() {
    let output = run_launcher(CLIENT_BIN, &["--bogus"]);
    assert_eq!(output.status.code(), Some(1), "usage exit code (1) expected");
    let stderr = stderr_text(&output);
    assert!(
        stderr.contains("--bogus"),
        "diagnostic should name the offending flag: {stderr}"
    );
    assert!(
        stderr.contains("Usage"),
        "diagnostic should include a usage line: {stderr}"
    );
}

#[test]
fn missing_flag_value_exits_with_usage_code() {
    let output = run_launcher(CLIENT_BIN, &["--key"]);
    assert_eq!(output.status.code(), Some(1), "usage exit code (1) expected");
    assert!(
        stderr_text(&output).contains("--key"),
        "diagnostic should name the flag missing its value"
    );
}

#[test]
fn help_exits_zero_and_lists_flags() {
    let output = run_launcher(CLIENT_BIN, &["--help"]);
    assert_eq!(output.status.code(), Some(0), "help exit code (0) expected");
    let stdout = stdout_text(&output);
    for flag in [
        "--server",
        "--port",
        "--log-level",
        "--low-gfx",
        "--no-vsync",
        "--client-port",
        "--secure",
        "--key",
        "--key-file",
    ] {
        assert!(stdout.contains(flag), "help should list {flag}: {stdout}");
    }
}

#[test]
fn short_help_exits_zero() {
    let output = run_launcher(SERVER_BIN, &["-h"]);
    assert_eq!(output.status.code(), Some(0), "help exit code (0) expected");
    assert!(stdout_text(&output).contains("--address"));
}

#[test]
fn version_exits_zero() {
    let output = run_launcher(CLIENT_BIN, &["--version"]);
    assert_eq!(
        output.status.code(),
        Some(0),
        "version exit code (0) expected"
    );
    assert!(stdout_text(&output).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn server_launcher_rejects_client_only_flags() {
    let output = run_launcher(SERVER_BIN, &["--low-gfx"]);
    assert_eq!(output.status.code(), Some(1), "usage exit code (1) expected");
    assert!(
        stderr_text(&output).contains("--low-gfx"),
        "diagnostic should name the client-only flag"
    );
}
