//! Key material source selection and on-demand decoding.

use std::{fs, path::Path};

use anyhow::{bail, Context, Result};
use tracing::{debug, warn};

use crate::support::errors::LaunchError;

/// Netcode keys are always this many bytes.
pub const KEY_LEN: usize = 32;

/// Where the shared key comes from. The launcher passes the selected source
/// through to the game verbatim; decoding the bytes is the game's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySource {
    InlineHex(String),
    KeyFile(String),
}

impl KeySource {
    /// Decode the key to raw bytes: 64 hex characters (optional `0x`
    /// prefix) inline, or a file holding either exactly 32 raw bytes or
    /// hex text with optional surrounding whitespace.
    ///
    /// The launch path never calls this; it exists for callers and tests
    /// that need the decoded key.
    pub fn load(&self) -> Result<[u8; KEY_LEN]> {
        match self {
            KeySource::InlineHex(value) => parse_hex_key(value),
            KeySource::KeyFile(path) => load_key_file(Path::new(path)),
        }
    }
}

/// Select the key material source for this invocation. Presence rules only:
/// no file I/O and no format checks happen here.
pub fn resolve_key_source(
    secure: bool,
    key: Option<String>,
    key_file: Option<String>,
) -> Result<Option<KeySource>, LaunchError> {
    if !secure {
        if key.is_some() || key_file.is_some() {
            debug!("ignoring --key/--key-file because --secure is not set");
        }
        return Ok(None);
    }

    match (non_empty(key), non_empty(key_file)) {
        (Some(key), key_file) => {
            if let Some(ignored) = key_file {
                warn!(key_file = %ignored, "--key takes priority; ignoring --key-file");
            }
            Ok(Some(KeySource::InlineHex(key)))
        }
        (None, Some(key_file)) => Ok(Some(KeySource::KeyFile(key_file))),
        (None, None) => Err(LaunchError::MissingCredential),
    }
}

/// Non-fatal format check run before dispatch. The game performs the
/// authoritative validation; file sources are deliberately not read here.
pub fn preflight(source: &KeySource) {
    if let KeySource::InlineHex(value) = source {
        if let Err(err) = parse_hex_key(value) {
            warn!(
                "--key does not look like a {KEY_LEN}-byte hex key ({err}); the game will reject it"
            );
        }
    }
}

/// Parse a 64-character hex string, optionally `0x`-prefixed, into key bytes.
pub fn parse_hex_key(input: &str) -> Result<[u8; KEY_LEN]> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    if digits.len() != KEY_LEN * 2 {
        bail!(
            "expected {} hex characters, got {}",
            KEY_LEN * 2,
            digits.len()
        );
    }
    let bytes = hex::decode(digits).context("key is not valid hex")?;
    <[u8; KEY_LEN]>::try_from(bytes.as_slice()).context("key does not decode to 32 bytes")
}

fn load_key_file(path: &Path) -> Result<[u8; KEY_LEN]> {
    let contents =
        fs::read(path).with_context(|| format!("failed to read key file {}", path.display()))?;
    if contents.len() == KEY_LEN {
        let mut key = [0u8; KEY_LEN];
        key.copy_from_slice(&contents);
        return Ok(key);
    }

    let text = String::from_utf8(contents).with_context(|| {
        format!(
            "key file {} is neither {KEY_LEN} raw bytes nor hex text",
            path.display()
        )
    })?;
    parse_hex_key(&text).with_context(|| format!("key file {} holds invalid hex", path.display()))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
