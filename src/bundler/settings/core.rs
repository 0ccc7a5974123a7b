//! Core Settings struct and implementations.

use std::path::{Path, PathBuf};

/// Default download endpoint; the archive file name is appended verbatim.
pub const DEFAULT_DOWNLOAD_URL: &str =
    "https://bintray.com/vszakats/generic/download_file?file_path=";

/// Name of the scratch directory under the root directory.
pub const BUILD_DIR_NAME: &str = "build";

/// Name of the output archive under the root directory.
pub const RESOURCES_ZIP_NAME: &str = "Resources.zip";

/// Immutable configuration for one packaging run.
///
/// Constructed via [`SettingsBuilder`](super::SettingsBuilder).
///
/// # Layout
///
/// ```text
/// <root>/
///   Resources.zip          output archive
///   build/                 scratch tree, recreated every run
///     Download/            downloaded and unpacked packages
///     Resources/<arch>/    files that end up in the archive
/// ```
#[derive(Clone, Debug)]
pub struct Settings {
    /// libcurl version, interpolated into package names as given.
    libcurl_version: String,

    /// OpenSSL version, interpolated into package names as given.
    openssl_version: String,

    /// Remove the scratch tree after the archive has been written.
    clean: bool,

    /// Directory that holds the scratch tree and the output archive.
    root_directory: PathBuf,

    /// Base endpoint packages are downloaded from.
    download_url: String,
}

impl Settings {
    pub(super) fn new(
        libcurl_version: String,
        openssl_version: String,
        clean: bool,
        root_directory: PathBuf,
        download_url: String,
    ) -> Self {
        Self {
            libcurl_version,
            openssl_version,
            clean,
            root_directory,
            download_url,
        }
    }

    /// Returns the libcurl version.
    pub fn libcurl_version(&self) -> &str {
        &self.libcurl_version
    }

    /// Returns the OpenSSL version.
    pub fn openssl_version(&self) -> &str {
        &self.openssl_version
    }

    /// Whether the scratch tree is removed once the archive exists.
    pub fn clean(&self) -> bool {
        self.clean
    }

    /// Returns the root directory.
    pub fn root_directory(&self) -> &Path {
        &self.root_directory
    }

    /// Returns the base download URL.
    pub fn download_url(&self) -> &str {
        &self.download_url
    }

    /// `<root>/build`
    pub fn build_directory(&self) -> PathBuf {
        self.root_directory.join(BUILD_DIR_NAME)
    }

    /// `<root>/build/Download`
    pub fn download_directory(&self) -> PathBuf {
        self.build_directory().join("Download")
    }

    /// `<root>/build/Resources`
    pub fn resources_directory(&self) -> PathBuf {
        self.build_directory().join("Resources")
    }

    /// `<root>/Resources.zip`
    pub fn resources_zip(&self) -> PathBuf {
        self.root_directory.join(RESOURCES_ZIP_NAME)
    }
}
