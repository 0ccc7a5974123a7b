//! Native resource bundling.
//!
//! Downloads prebuilt curl and OpenSSL packages for each Windows
//! architecture, unpacks them with 7-Zip and collects the DLLs and CA bundle
//! into `Resources.zip`:
//!
//! ```text
//! Resources.zip
//!   win32/  libcurl.dll, libcrypto-*.dll, libssl-*.dll, curl-ca-bundle.crt
//!   win64/  libcurl.dll, libcrypto-*.dll, libssl-*.dll, curl-ca-bundle.crt
//! ```

pub mod builder;
pub mod error;
pub mod resources;
pub mod settings;
pub mod utils;

use std::{collections::BTreeMap, path::PathBuf};

pub use builder::{Bundler, locate_archiver};
pub use error::{Error, Result};
pub use resources::{extract_resources, list_resources};
pub use settings::{Arch, Library, PackageId, Settings, SettingsBuilder, ToolEnvironment};
pub use utils::{
    http::{Fetcher, HttpFetcher},
    process::{CommandRunner, CommandStatus, SystemRunner},
};

/// The archive produced by a packaging run.
#[derive(Clone, Debug)]
pub struct BundledArtifact {
    /// Location of `Resources.zip`
    pub path: PathBuf,
    /// Archive size in bytes
    pub size: u64,
    /// Hex-encoded SHA-256 of the archive
    pub checksum: String,
    /// File names per architecture directory
    pub resources: BTreeMap<Arch, Vec<String>>,
}
