//! Final hand-off from the launcher to the game.

use std::{path::Path, process::Command};

use tracing::info;

use crate::{launch::target::LaunchAction, support::errors::LaunchError};

/// Build tool invoked when no prebuilt binary exists.
const BUILD_TOOL: &str = "cargo";

/// Assemble the child command: working directory pinned to the launcher
/// directory, materialized variables layered over the inherited environment.
pub fn build_command(
    action: &LaunchAction,
    env_vars: &[(&'static str, String)],
    workdir: &Path,
) -> Command {
    let mut command = match action {
        LaunchAction::RunExecutable(path) => Command::new(path),
        LaunchAction::BuildAndRun(args) => {
            let mut command = Command::new(BUILD_TOOL);
            command.args(args);
            command
        }
    };
    command.current_dir(workdir);
    for (name, value) in env_vars {
        command.env(name, value);
    }
    command
}

/// Replace the launcher with the chosen action.
///
/// Returns only when the target could not be executed. On non-Unix hosts
/// there is no `exec`, so the launcher waits for the child and terminates
/// with its exit code instead.
pub fn dispatch(
    action: &LaunchAction,
    env_vars: &[(&'static str, String)],
    workdir: &Path,
) -> LaunchError {
    let mut command = build_command(action, env_vars, workdir);
    let program = command.get_program().to_string_lossy().into_owned();
    let args: Vec<String> = command
        .get_args()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    info!(
        program = %program,
        args = ?args,
        workdir = %workdir.display(),
        "handing control to the launch target"
    );

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;

        let source = command.exec();
        LaunchError::Spawn { program, source }
    }

    #[cfg(not(unix))]
    {
        match command.status() {
            Ok(status) => std::process::exit(status.code().unwrap_or(1)),
            Err(source) => LaunchError::Spawn { program, source },
        }
    }
}
