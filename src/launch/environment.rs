//! Materialization of the game's environment variable contract.

use std::env;

use crate::{
    cli::{LaunchOptions, Role},
    launch::credentials::KeySource,
};

pub const SERVER_ADDR: &str = "SERVER_ADDR";
pub const RUST_LOG: &str = "RUST_LOG";
pub const LOW_GFX: &str = "LOW_GFX";
pub const NO_VSYNC: &str = "NO_VSYNC";
pub const CLIENT_PORT: &str = "CLIENT_PORT";
pub const SECURE: &str = "SECURE";
pub const NETCODE_KEY: &str = "NETCODE_KEY";
pub const NETCODE_KEY_FILE: &str = "NETCODE_KEY_FILE";
pub const WGPU_BACKEND: &str = "WGPU_BACKEND";
pub const WGPU_ALLOW_SOFTWARE: &str = "WGPU_ALLOW_SOFTWARE";

/// Hardware-acceleration hints for headless server hosts.
const DEFAULT_WGPU_BACKEND: &str = "gl";
const DEFAULT_WGPU_ALLOW_SOFTWARE: &str = "1";

/// Compute the variables to place in the game's environment.
///
/// Unset options produce no variable at all, so the game's own defaulting
/// stays in charge. The caller's environment wins for the WGPU hints.
pub fn materialize(options: &LaunchOptions) -> Vec<(&'static str, String)> {
    materialize_with(options, |name| env::var_os(name).is_some())
}

/// Same as [`materialize`] with the ambient-environment lookup injected.
pub fn materialize_with(
    options: &LaunchOptions,
    ambient_set: impl Fn(&str) -> bool,
) -> Vec<(&'static str, String)> {
    let mut vars = vec![
        (SERVER_ADDR, options.server_addr.clone()),
        (RUST_LOG, options.log_level.clone()),
    ];

    if options.role == Role::Client {
        if options.low_gfx {
            vars.push((LOW_GFX, "1".to_string()));
        }
        if options.no_vsync {
            vars.push((NO_VSYNC, "1".to_string()));
        }
        if let Some(port) = options.client_port.filter(|port| *port != 0) {
            vars.push((CLIENT_PORT, port.to_string()));
        }
    }

    if options.secure {
        vars.push((SECURE, "1".to_string()));
        match &options.key_source {
            Some(KeySource::InlineHex(key)) => vars.push((NETCODE_KEY, key.clone())),
            Some(KeySource::KeyFile(path)) => vars.push((NETCODE_KEY_FILE, path.clone())),
            None => {}
        }
    }

    if options.role == Role::Server {
        if !ambient_set(WGPU_BACKEND) {
            vars.push((WGPU_BACKEND, DEFAULT_WGPU_BACKEND.to_string()));
        }
        if !ambient_set(WGPU_ALLOW_SOFTWARE) {
            vars.push((WGPU_ALLOW_SOFTWARE, DEFAULT_WGPU_ALLOW_SOFTWARE.to_string()));
        }
    }

    vars
}
