//! Launch target candidates and fallback resolution.

use std::{
    env::consts::EXE_SUFFIX,
    fs,
    path::{Path, PathBuf},
};

use tracing::warn;

use crate::cli::Role;

/// Built client binary, as produced by the game's release build.
const CLIENT_BIN: &str = "arena";
/// Built server binary (the game's `server` bin target).
const SERVER_BIN: &str = "server";
/// Release output directory relative to the launcher.
const RELEASE_DIR: &str = "target/release";

/// What runs in place of the launcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchAction {
    /// Exec this prebuilt binary directly, with no arguments.
    RunExecutable(PathBuf),
    /// No prebuilt binary was found: run the build tool with these arguments.
    BuildAndRun(Vec<String>),
}

/// Filesystem seam so target resolution stays unit testable.
pub trait TargetProbe {
    fn is_executable(&self, path: &Path) -> bool;
}

/// Probe backed by the real filesystem.
pub struct SystemProbe;

impl TargetProbe for SystemProbe {
    #[cfg(unix)]
    fn is_executable(&self, path: &Path) -> bool {
        use std::os::unix::fs::PermissionsExt;

        fs::metadata(path)
            .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
            .unwrap_or(false)
    }

    #[cfg(not(unix))]
    fn is_executable(&self, path: &Path) -> bool {
        fs::metadata(path).map(|meta| meta.is_file()).unwrap_or(false)
    }
}

/// Binary file name for the role, with the host executable suffix.
pub fn executable_name(role: Role) -> String {
    let base = match role {
        Role::Client => CLIENT_BIN,
        Role::Server => SERVER_BIN,
    };
    format!("{base}{EXE_SUFFIX}")
}

/// Candidate paths in probe order: beside the launcher first, then under
/// the release build directory.
pub fn candidate_paths(role: Role, launcher_dir: &Path) -> Vec<PathBuf> {
    let name = executable_name(role);
    vec![
        launcher_dir.join(&name),
        launcher_dir.join(RELEASE_DIR).join(&name),
    ]
}

/// Arguments for the `cargo` fallback, keeping the role's bin target.
pub fn fallback_args(role: Role) -> Vec<String> {
    let mut args = vec!["run".to_string(), "--release".to_string()];
    if role == Role::Server {
        args.push("--bin".to_string());
        args.push(SERVER_BIN.to_string());
    }
    args
}

/// Pick the first executable candidate; with none, report the miss on the
/// error stream and fall back to building from source.
pub fn resolve_target(role: Role, launcher_dir: &Path, probe: &dyn TargetProbe) -> LaunchAction {
    for candidate in candidate_paths(role, launcher_dir) {
        if probe.is_executable(&candidate) {
            return LaunchAction::RunExecutable(candidate);
        }
    }

    warn!(
        "no prebuilt {} binary found near {}; building and running from source",
        role.as_str(),
        launcher_dir.display()
    );
    LaunchAction::BuildAndRun(fallback_args(role))
}
