//! Command-line interface module.

mod args;
pub mod build;
pub mod serve;
pub mod slashes;

pub use args::{BuildArgs, Cli, Commands};
