//! Testing infrastructure for adlens integration tests.
//!
//! - `TestWorld`: isolated config directory plus campaign source files
//! - `assertions`: checks over `--format json` output
//! - `fixtures`: sample campaign collections

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
