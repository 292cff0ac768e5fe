use std::{io, process::ExitCode};

use thiserror::Error;

/// Exit codes shared with deployment automation. `0` means success or a
/// help/version display; the constants below cover the failure classes.
pub mod exit_codes {
    /// Malformed invocation, or a launch target that could not be executed.
    pub const USAGE: u8 = 1;
    /// Secure mode requested without any credential source.
    pub const MISSING_CREDENTIAL: u8 = 2;
}

/// Failures that end a launch before the game takes over.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("secure mode requires key material: pass --key <HEX> or --key-file <PATH>")]
    MissingCredential,
    #[error("server address must not be empty")]
    EmptyAddress,
    #[error("failed to locate the launcher directory: {source}")]
    LauncherDir {
        #[source]
        source: io::Error,
    },
    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl LaunchError {
    /// Numeric exit code for this failure class.
    pub fn exit_code(&self) -> u8 {
        match self {
            LaunchError::MissingCredential => exit_codes::MISSING_CREDENTIAL,
            LaunchError::EmptyAddress
            | LaunchError::LauncherDir { .. }
            | LaunchError::Spawn { .. } => exit_codes::USAGE,
        }
    }

    /// Print the rendered message to stderr and hand back the process exit code.
    pub fn report(self) -> ExitCode {
        eprintln!("{self}");
        ExitCode::from(self.exit_code())
    }
}
