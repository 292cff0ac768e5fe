//! Launch pipeline: resolved options to process replacement.

use std::{env, io, path::PathBuf};

use tracing::debug;

use crate::{
    cli::{LaunchOptions, RawOptions, Role},
    support::errors::LaunchError,
};

pub mod credentials;
pub mod dispatch;
pub mod environment;
pub mod target;

pub use credentials::KeySource;
pub use target::{LaunchAction, SystemProbe, TargetProbe};

/// Run the whole pipeline for one role: merge defaults, resolve the
/// credential source, materialize the game's environment, pick a launch
/// target, and hand the process over to it.
///
/// Returns only when the launch fails; on success the launcher process is
/// replaced by the target.
pub fn run(role: Role, raw: RawOptions) -> Result<(), LaunchError> {
    let options = LaunchOptions::resolve(role, raw)?;
    if let Some(source) = &options.key_source {
        credentials::preflight(source);
    }
    debug!(
        role = role.as_str(),
        addr = %options.server_addr,
        secure = options.secure,
        "resolved launch options"
    );

    let env_vars = environment::materialize(&options);
    let launcher_dir = launcher_dir()?;
    let action = target::resolve_target(role, &launcher_dir, &SystemProbe);

    Err(dispatch::dispatch(&action, &env_vars, &launcher_dir))
}

/// Directory containing the launcher binary. Target candidates and the
/// fallback build both run relative to it.
fn launcher_dir() -> Result<PathBuf, LaunchError> {
    let exe = env::current_exe().map_err(|source| LaunchError::LauncherDir { source })?;
    match exe.parent() {
        Some(dir) => Ok(dir.to_path_buf()),
        None => Err(LaunchError::LauncherDir {
            source: io::Error::new(io::ErrorKind::NotFound, "launcher has no parent directory"),
        }),
    }
}
