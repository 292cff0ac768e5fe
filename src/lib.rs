//! Library crate root for the arena launcher binaries.

pub mod cli;
pub mod launch;
pub mod support;
