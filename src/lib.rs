//! Build automation for the CurlThin binding.
//!
//! This library provides the two build tools of the repository:
//! - [`bundler`] packs prebuilt curl and OpenSSL DLLs for win32 and win64
//!   into `Resources.zip`
//! - [`projects`] drives `dotnet` through clean, restore, build and pack for
//!   the library and native-packaging projects
//!
//! Both are used from the `pack_curl_native` and `build_projects` binaries
//! through [`cli`], and can be used as a library with custom
//! [`Fetcher`](bundler::Fetcher) and [`CommandRunner`](bundler::CommandRunner)
//! implementations.

pub mod bundler;
pub mod cli;
pub mod error;
pub mod projects;

// Re-export commonly used types
pub use error::{BuildError, CliError, Result};
