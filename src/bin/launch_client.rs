//! Client launcher: resolves flags into the arena client's environment
//! contract and replaces itself with the game process.
use std::process::ExitCode;

use arena_launcher::{
    cli::{self, ClientArgs, Role},
    launch,
    support::telemetry,
};

fn main() -> ExitCode {
    if let Err(err) = telemetry::init_tracing() {
        eprintln!("{err:#}");
    }

    let args: ClientArgs = match cli::parse_args() {
        Ok(args) => args,
        Err(code) => return code,
    };

    match launch::run(Role::Client, args.into()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => err.report(),
    }
}
