//! Builder for constructing Settings.

use super::{Settings, core::DEFAULT_DOWNLOAD_URL};
use std::path::{Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// # Examples
///
/// ```
/// use curlthin_build::bundler::SettingsBuilder;
///
/// # fn example() -> curlthin_build::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .libcurl_version("7.58.0")
///     .openssl_version("1.1.0g")
///     .root_directory("CurlThin.Native")
///     .clean(true)
///     .build()?;
///
/// assert!(settings.resources_zip().ends_with("Resources.zip"));
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    libcurl_version: Option<String>,
    openssl_version: Option<String>,
    clean: bool,
    root_directory: Option<PathBuf>,
    download_url: Option<String>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the libcurl version.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn libcurl_version(mut self, version: impl Into<String>) -> Self {
        self.libcurl_version = Some(version.into());
        self
    }

    /// Sets the OpenSSL version.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn openssl_version(mut self, version: impl Into<String>) -> Self {
        self.openssl_version = Some(version.into());
        self
    }

    /// Removes the scratch tree after packaging.
    ///
    /// Default: false
    pub fn clean(mut self, clean: bool) -> Self {
        self.clean = clean;
        self
    }

    /// Sets the directory holding the scratch tree and `Resources.zip`.
    ///
    /// Default: current directory
    pub fn root_directory<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.root_directory = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the base download endpoint.
    ///
    /// Default: [`DEFAULT_DOWNLOAD_URL`]
    pub fn download_url(mut self, url: impl Into<String>) -> Self {
        self.download_url = Some(url.into());
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if a library version is missing.
    pub fn build(self) -> crate::bundler::Result<Settings> {
        use crate::bundler::error::Context;

        Ok(Settings::new(
            self.libcurl_version
                .context("libcurl_version is required")?,
            self.openssl_version
                .context("openssl_version is required")?,
            self.clean,
            self.root_directory.unwrap_or_else(|| PathBuf::from(".")),
            self.download_url
                .unwrap_or_else(|| DEFAULT_DOWNLOAD_URL.to_string()),
        ))
    }
}
