use std::process::{Command, Output};

pub const CLIENT_BIN: &str = env!("CARGO_BIN_EXE_launch-client");
pub const SERVER_BIN: &str = env!("CARGO_BIN_EXE_launch-server");

/// Run a launcher with a clean log filter and capture everything.
pub fn run_launcher(binary: &str, args: &[&str]) -> Output {
    Command::new(binary)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("launcher process should start")
}

pub fn stdout_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
