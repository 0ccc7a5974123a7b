//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing for both tools using clap,
//! with validation and conversion into immutable settings.

use crate::{
    bundler::{Settings, SettingsBuilder, settings::DEFAULT_DOWNLOAD_URL},
    error::{BuildError, CliError, Result},
    projects::{BuildSettings, VersionSpec},
};
use clap::Parser;
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Packs prebuilt curl and OpenSSL DLLs into Resources.zip
#[derive(Parser, Debug)]
#[command(
    name = "pack_curl_native",
    version,
    about = "Packs prebuilt curl and OpenSSL DLLs into Resources.zip",
    long_about = "Downloads the mingw builds of libcurl and OpenSSL for win32 and win64, unpacks them
with 7-Zip and bundles the DLLs and CA certificate bundle into <ROOT>/Resources.zip.

Usage:
  pack_curl_native --libcurl-version 7.58.0 --openssl-version 1.1.0g
  pack_curl_native --libcurl-version 7.58.0 --openssl-version 1.1.0g --clean --root CurlThin.Native

Requires 7-Zip (7z / 7z.exe on PATH or in the working directory, or a
Program Files installation)."
)]
pub struct PackArgs {
    /// libcurl version to download
    #[arg(long, value_name = "VERSION")]
    pub libcurl_version: String,

    /// OpenSSL version to download
    #[arg(long, value_name = "VERSION")]
    pub openssl_version: String,

    /// Remove the build/ scratch directory afterwards
    #[arg(long)]
    pub clean: bool,

    /// Directory that receives build/ and Resources.zip
    #[arg(long, value_name = "DIR", env = "CURLTHIN_NATIVE_DIR", default_value = ".")]
    pub root: PathBuf,

    /// Base URL the package file name is appended to
    #[arg(long, value_name = "URL", env = "CURLTHIN_DOWNLOAD_URL", default_value = DEFAULT_DOWNLOAD_URL)]
    pub download_url: String,
}

impl PackArgs {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        validate_root(&self.root)?;

        if self.download_url.is_empty() {
            return Err("Download URL cannot be empty".to_string());
        }

        Ok(())
    }

    /// Converts the arguments into packaging settings.
    pub fn to_settings(&self) -> Result<Settings> {
        self.validate()
            .map_err(|reason| CliError::InvalidArguments { reason })?;

        Ok(SettingsBuilder::new()
            .libcurl_version(&self.libcurl_version)
            .openssl_version(&self.openssl_version)
            .clean(self.clean)
            .root_directory(absolute(&self.root)?)
            .download_url(&self.download_url)
            .build()?)
    }
}

/// Cleans, restores, builds and packs the CurlThin projects
#[derive(Parser, Debug)]
#[command(
    name = "build_projects",
    version,
    about = "Cleans, restores, builds and packs the CurlThin projects",
    long_about = "Runs `dotnet clean`, `restore`, `build` and `pack` for CurlThin/CurlThin.csproj and
CurlThin.Native/CurlThin.Native.csproj below <ROOT>. Build and pack receive
/p:Configuration=Release, /p:VersionPrefix and, when given, /p:VersionSuffix.

Every step runs even if an earlier one fails.

Usage:
  build_projects --version-prefix 0.5.0 --native-version-prefix 7.58.0
  build_projects --version-prefix 0.5.0 --version-suffix beta --native-version-prefix 7.58.0"
)]
pub struct BuildArgs {
    /// Version prefix of the CurlThin package
    #[arg(long, value_name = "VERSION")]
    pub version_prefix: String,

    /// Version suffix of the CurlThin package
    #[arg(long, value_name = "SUFFIX")]
    pub version_suffix: Option<String>,

    /// Version prefix of the CurlThin.Native package
    #[arg(long, value_name = "VERSION")]
    pub native_version_prefix: String,

    /// Version suffix of the CurlThin.Native package
    #[arg(long, value_name = "SUFFIX")]
    pub native_version_suffix: Option<String>,

    /// Solution directory holding both projects
    #[arg(long, value_name = "DIR", env = "CURLTHIN_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// .NET toolchain executable
    #[arg(long, value_name = "PATH", env = "DOTNET_EXE", default_value = "dotnet")]
    pub dotnet: PathBuf,
}

impl BuildArgs {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        validate_root(&self.root)
    }

    /// Converts the arguments into build settings.
    pub fn to_settings(&self) -> Result<BuildSettings> {
        self.validate()
            .map_err(|reason| CliError::InvalidArguments { reason })?;

        Ok(BuildSettings::new(
            absolute(&self.root)?,
            &self.dotnet,
            VersionSpec::new(&self.version_prefix, self.version_suffix.clone()),
            VersionSpec::new(
                &self.native_version_prefix,
                self.native_version_suffix.clone(),
            ),
        ))
    }
}

fn validate_root(root: &Path) -> std::result::Result<(), String> {
    if !root.is_dir() {
        return Err(format!("Root directory does not exist: {}", root.display()));
    }
    Ok(())
}

fn absolute(path: &Path) -> Result<PathBuf> {
    path.absolutize()
        .map(|p| p.into_owned())
        .map_err(BuildError::Io)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_requires_both_versions() {
        let err = PackArgs::try_parse_from(["pack_curl_native", "--libcurl-version", "7.58.0"]);
        assert!(err.is_err());
    }

    #[test]
    fn pack_clean_defaults_off() {
        let args = PackArgs::try_parse_from([
            "pack_curl_native",
            "--libcurl-version",
            "7.58.0",
            "--openssl-version",
            "1.1.0g",
        ])
        .unwrap();

        assert!(!args.clean);
        assert_eq!(args.download_url, DEFAULT_DOWNLOAD_URL);
    }

    #[test]
    fn pack_settings_use_absolute_root() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().to_str().unwrap();
        let args = PackArgs::try_parse_from([
            "pack_curl_native",
            "--libcurl-version",
            "7.58.0",
            "--openssl-version",
            "1.1.0g",
            "--clean",
            "--root",
            root,
        ])
        .unwrap();

        let settings = args.to_settings().unwrap();

        assert!(settings.clean());
        assert!(settings.root_directory().is_absolute());
        assert_eq!(settings.libcurl_version(), "7.58.0");
    }

    #[test]
    fn missing_root_is_invalid() {
        let args = BuildArgs::try_parse_from([
            "build_projects",
            "--version-prefix",
            "0.5.0",
            "--native-version-prefix",
            "7.58.0",
            "--root",
            "/definitely/not/here",
        ])
        .unwrap();

        assert!(matches!(
            args.to_settings(),
            Err(BuildError::Cli(CliError::InvalidArguments { .. }))
        ));
    }

    #[test]
    fn build_suffixes_are_optional() {
        let args = BuildArgs::try_parse_from([
            "build_projects",
            "--version-prefix",
            "0.5.0",
            "--native-version-prefix",
            "7.58.0",
            "--native-version-suffix",
            "rc1",
        ])
        .unwrap();

        assert_eq!(args.version_suffix, None);
        assert_eq!(args.native_version_suffix.as_deref(), Some("rc1"));
    }
}
