//! CLI argument definitions and the parse boundary for both launchers.
use std::process::ExitCode;

use clap::{error::ErrorKind, Parser};

use super::options::RawOptions;
use crate::support::errors::exit_codes;

/// Command-line arguments for `launch-client`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "launch-client",
    author,
    version,
    about = "Configure and launch the arena client",
    args_override_self = true,
    after_help = "Example: launch-client --server 192.168.1.10 --secure --key-file ~/.arena/netcode.key"
)]
pub struct ClientArgs {
    /// Server host to connect to [default: 127.0.0.1].
    #[arg(short = 's', long, visible_alias = "address", value_name = "HOST")]
    pub server: Option<String>,
    /// Server UDP port [default: 5000].
    #[arg(short = 'p', long, value_name = "PORT")]
    pub port: Option<u16>,
    /// Log filter handed to the game via RUST_LOG [default: warn].
    #[arg(short = 'l', long, value_name = "LEVEL")]
    pub log_level: Option<String>,
    /// Disable the heavier rendering features for low-end machines.
    #[arg(long)]
    pub low_gfx: bool,
    /// Run with vsync off.
    #[arg(long)]
    pub no_vsync: bool,
    /// Bind the client socket to a fixed local UDP port (0 keeps it OS-assigned).
    #[arg(long, value_name = "PORT")]
    pub client_port: Option<u16>,
    /// Use the authenticated netcode transport.
    #[arg(long)]
    pub secure: bool,
    /// Shared key as 64 hex characters (optional 0x prefix).
    #[arg(short = 'k', long, value_name = "HEX")]
    pub key: Option<String>,
    /// File holding the shared key: 32 raw bytes or hex text.
    #[arg(long, value_name = "PATH")]
    pub key_file: Option<String>,
}

/// Command-line arguments for `launch-server`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "launch-server",
    author,
    version,
    about = "Configure and launch the arena server",
    args_override_self = true,
    after_help = "Example: launch-server --address 0.0.0.0 --port 5000 --secure --key 0x<64 hex chars>"
)]
pub struct ServerArgs {
    /// Bind/advertise host [default: 0.0.0.0].
    #[arg(short = 'a', long, visible_alias = "server", value_name = "HOST")]
    pub address: Option<String>,
    /// UDP port to listen on [default: 5000].
    #[arg(short = 'p', long, value_name = "PORT")]
    pub port: Option<u16>,
    /// Log filter handed to the game via RUST_LOG [default: warn].
    #[arg(short = 'l', long, value_name = "LEVEL")]
    pub log_level: Option<String>,
    /// Use the authenticated netcode transport.
    #[arg(long)]
    pub secure: bool,
    /// Shared key as 64 hex characters (optional 0x prefix).
    #[arg(short = 'k', long, value_name = "HEX")]
    pub key: Option<String>,
    /// File holding the shared key: 32 raw bytes or hex text.
    #[arg(long, value_name = "PATH")]
    pub key_file: Option<String>,
}

impl From<ClientArgs> for RawOptions {
    fn from(args: ClientArgs) -> Self {
        RawOptions {
            host: args.server,
            port: args.port,
            log_level: args.log_level,
            low_gfx: args.low_gfx,
            no_vsync: args.no_vsync,
            client_port: args.client_port,
            secure: args.secure,
            key: args.key,
            key_file: args.key_file,
        }
    }
}

impl From<ServerArgs> for RawOptions {
    fn from(args: ServerArgs) -> Self {
        RawOptions {
            host: args.address,
            port: args.port,
            log_level: args.log_level,
            secure: args.secure,
            key: args.key,
            key_file: args.key_file,
            ..RawOptions::default()
        }
    }
}

/// Parse the process arguments, mapping clap's conventions onto the
/// launcher's exit-code contract: help and version display exit 0, every
/// parse failure prints usage to stderr and exits 1.
pub fn parse_args<A: Parser>() -> Result<A, ExitCode> {
    match A::try_parse() {
        Ok(args) => Ok(args),
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(exit_codes::USAGE),
            };
            let _ = err.print();
            Err(code)
        }
    }
}
