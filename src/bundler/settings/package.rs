//! Remote package identifiers.

use super::Arch;
use std::fmt;

/// Toolchain tag of the prebuilt binaries.
pub const TOOLCHAIN_TAG: &str = "mingw";

/// Extension of the remote package archives.
pub const ARCHIVE_EXTENSION: &str = "7z";

/// Which library a package provides.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Library {
    /// libcurl, the transfer library
    Curl,
    /// OpenSSL, the TLS library
    OpenSsl,
}

impl Library {
    /// Package name prefix on the download endpoint.
    pub fn package_name(self) -> &'static str {
        match self {
            Library::Curl => "curl",
            Library::OpenSsl => "openssl",
        }
    }
}

/// Versioned, architecture- and toolchain-tagged remote archive name,
/// e.g. `curl-7.58.0-win64-mingw`.
///
/// Version strings are not validated; they are interpolated as given.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PackageId(String);

impl PackageId {
    /// Builds the identifier for `library` at `version` for `arch`.
    pub fn new(library: Library, version: &str, arch: Arch) -> Self {
        Self(format!(
            "{}-{}-{}-{}",
            library.package_name(),
            version,
            arch,
            TOOLCHAIN_TAG
        ))
    }

    /// The identifier, which is also the top-level directory inside the archive.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Local and remote archive file name (`<id>.7z`).
    pub fn archive_file_name(&self) -> String {
        format!("{}.{}", self.0, ARCHIVE_EXTENSION)
    }

    /// Download URL: the archive file name appended to `base_url`.
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url, self.archive_file_name())
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
