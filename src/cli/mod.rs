//! Command-line surface shared by the two launcher binaries.

pub mod args;
pub mod options;

pub use args::{parse_args, ClientArgs, ServerArgs};
pub use options::{LaunchOptions, RawOptions, Role};
