//! Command line interface for both build tools.
//!
//! Argument parsing lives in [`args`]; each tool's work lives in
//! [`commands`].

mod args;
pub mod commands;

pub use args::{BuildArgs, PackArgs};

use crate::error::Result;

/// Entry point of `pack_curl_native`
pub async fn run_pack() -> Result<i32> {
    let args = PackArgs::parse_args();
    commands::execute_pack(&args).await
}

/// Entry point of `build_projects`
pub async fn run_build() -> Result<i32> {
    let args = BuildArgs::parse_args();
    commands::execute_build(&args).await
}
