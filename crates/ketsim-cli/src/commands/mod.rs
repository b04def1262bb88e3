//! CLI command implementations.

pub mod common;
pub mod generate;
pub mod run;
pub mod verify;
pub mod version;
