//! Launch option records, default merging, and resolution.

use crate::{
    launch::credentials::{self, KeySource},
    support::errors::LaunchError,
};

pub const DEFAULT_CLIENT_HOST: &str = "127.0.0.1";
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Which half of the game pair a launcher drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Client,
    Server,
}

impl Role {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Client => "client",
            Role::Server => "server",
        }
    }

    /// Host default: clients dial loopback, servers bind all interfaces.
    pub const fn default_host(&self) -> &'static str {
        match self {
            Role::Client => DEFAULT_CLIENT_HOST,
            Role::Server => DEFAULT_SERVER_HOST,
        }
    }
}

/// Flag values exactly as parsed. Unset is `None`, never a sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawOptions {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub log_level: Option<String>,
    pub low_gfx: bool,
    pub no_vsync: bool,
    pub client_port: Option<u16>,
    pub secure: bool,
    pub key: Option<String>,
    pub key_file: Option<String>,
}

impl RawOptions {
    /// Fill every unset field with its documented default. Total and
    /// idempotent. A client port of 0 means "OS-assigned" and is normalized
    /// back to unset.
    pub fn merge_defaults(mut self, role: Role) -> RawOptions {
        self.host
            .get_or_insert_with(|| role.default_host().to_string());
        self.port.get_or_insert(DEFAULT_PORT);
        self.log_level
            .get_or_insert_with(|| DEFAULT_LOG_LEVEL.to_string());
        self.client_port = self.client_port.filter(|port| *port != 0);
        self
    }
}

/// Fully resolved configuration for one launch. Built once per invocation
/// and consumed exactly once by environment materialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchOptions {
    pub role: Role,
    pub server_addr: String,
    pub log_level: String,
    pub low_gfx: bool,
    pub no_vsync: bool,
    pub client_port: Option<u16>,
    pub secure: bool,
    pub key_source: Option<KeySource>,
}

impl LaunchOptions {
    /// Merge defaults and resolve the credential source into a
    /// launch-ready record.
    pub fn resolve(role: Role, raw: RawOptions) -> Result<Self, LaunchError> {
        let merged = raw.merge_defaults(role);

        let host = merged
            .host
            .unwrap_or_else(|| role.default_host().to_string());
        if host.trim().is_empty() {
            return Err(LaunchError::EmptyAddress);
        }
        let port = merged.port.unwrap_or(DEFAULT_PORT);
        let log_level = merged
            .log_level
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
        let key_source =
            credentials::resolve_key_source(merged.secure, merged.key, merged.key_file)?;

        Ok(LaunchOptions {
            role,
            server_addr: format!("{host}:{port}"),
            log_level,
            low_gfx: merged.low_gfx,
            no_vsync: merged.no_vsync,
            client_port: merged.client_port,
            secure: merged.secure,
            key_source,
        })
    }
}
