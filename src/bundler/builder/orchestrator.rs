//! Main bundler orchestration.
//!
//! This module provides the [`Bundler`] that downloads the prebuilt curl and
//! OpenSSL packages for every [`Arch`] and packs them into `Resources.zip`.

use crate::bundler::{
    BundledArtifact, Result,
    error::ErrorExt,
    resources::list_resources,
    settings::{Arch, Library, PackageId, Settings, ToolEnvironment},
    utils::{
        archive::zip_directory,
        fs,
        http::Fetcher,
        process::CommandRunner,
    },
};
use std::path::Path;

use super::{checksum::calculate_sha256, download::download_and_unpack, tool_detection::locate_archiver};

/// Packs native curl resources.
///
/// The network and external processes are reached only through the
/// [`Fetcher`] and [`CommandRunner`] it is built with.
///
/// # Examples
///
/// ```no_run
/// use curlthin_build::bundler::{
///     Bundler, HttpFetcher, SettingsBuilder, SystemRunner, ToolEnvironment,
/// };
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = SettingsBuilder::new()
///     .libcurl_version("7.58.0")
///     .openssl_version("1.1.0g")
///     .clean(true)
///     .build()?;
///
/// let bundler = Bundler::new(
///     settings,
///     ToolEnvironment::from_process()?,
///     HttpFetcher::new(),
///     SystemRunner,
/// );
/// let artifact = bundler.bundle().await?;
/// println!("{} ({} bytes)", artifact.path.display(), artifact.size);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Bundler<F, R> {
    settings: Settings,
    environment: ToolEnvironment,
    fetcher: F,
    runner: R,
}

impl<F, R> Bundler<F, R>
where
    F: Fetcher,
    R: CommandRunner,
{
    /// Creates a new bundler.
    pub fn new(settings: Settings, environment: ToolEnvironment, fetcher: F, runner: R) -> Self {
        Self {
            settings,
            environment,
            fetcher,
            runner,
        }
    }

    /// Runs the whole packaging sequence.
    ///
    /// 1. Locate 7-Zip (fails before any download)
    /// 2. Recreate an empty scratch tree and drop a stale `Resources.zip`
    /// 3. For each architecture: fetch, unpack and copy curl (`bin/*.dll`,
    ///    `bin/*.crt`), apply renames, then fetch, unpack and copy OpenSSL (`*.dll`)
    /// 4. Zip the resources tree into `Resources.zip`
    /// 5. Remove the scratch tree if cleanup was requested
    ///
    /// Any failure aborts the remaining steps.
    pub async fn bundle(&self) -> Result<BundledArtifact> {
        let archiver = locate_archiver(&self.environment)?;
        log::info!("Using 7-Zip at {}", archiver.display());

        self.prepare_scratch().await?;

        for arch in Arch::ALL {
            self.bundle_arch(arch, &archiver).await?;
        }

        let resources_dir = self.settings.resources_directory();
        let zip_path = self.settings.resources_zip();
        let files = zip_directory(&resources_dir, &zip_path).await?;
        log::info!("Wrote {} files to {}", files, zip_path.display());

        let artifact = self.describe(&zip_path).await?;

        if self.settings.clean() {
            let build_dir = self.settings.build_directory();
            fs::remove_dir_all(&build_dir).await?;
            log::info!("Removed {}", build_dir.display());
        }

        Ok(artifact)
    }

    async fn prepare_scratch(&self) -> Result<()> {
        fs::create_dir_all(&self.settings.build_directory(), true).await?;

        let zip_path = self.settings.resources_zip();
        if fs::remove_file(&zip_path).await? {
            log::debug!("Removed stale {}", zip_path.display());
        }

        fs::create_dir_all(&self.settings.download_directory(), false).await?;
        fs::create_dir_all(&self.settings.resources_directory(), false).await?;
        Ok(())
    }

    async fn bundle_arch(&self, arch: Arch, archiver: &Path) -> Result<()> {
        log::info!("Packing {} resources", arch);

        let download_dir = self.settings.download_directory();
        let arch_dir = self.settings.resources_directory().join(arch.as_str());
        fs::create_dir_all(&arch_dir, false).await?;

        let curl = PackageId::new(Library::Curl, self.settings.libcurl_version(), arch);
        let curl_dir = self.fetch_package(&curl, archiver, &download_dir).await?;
        let curl_bin = curl_dir.join("bin");
        fs::copy_matching(&curl_bin, "*.dll", &arch_dir).await?;
        fs::copy_matching(&curl_bin, "*.crt", &arch_dir).await?;

        for (from, to) in arch.library_renames() {
            if fs::rename_if_file(&arch_dir.join(from), &arch_dir.join(to)).await? {
                log::info!("Renamed {} to {} for {}", from, to, arch);
            }
        }

        let openssl = PackageId::new(Library::OpenSsl, self.settings.openssl_version(), arch);
        let openssl_dir = self.fetch_package(&openssl, archiver, &download_dir).await?;
        fs::copy_matching(&openssl_dir, "*.dll", &arch_dir).await?;

        Ok(())
    }

    async fn fetch_package(
        &self,
        package: &PackageId,
        archiver: &Path,
        download_dir: &Path,
    ) -> Result<std::path::PathBuf> {
        download_and_unpack(
            &self.fetcher,
            &self.runner,
            archiver,
            package,
            self.settings.download_url(),
            download_dir,
        )
        .await
    }

    async fn describe(&self, zip_path: &Path) -> Result<BundledArtifact> {
        let size = tokio::fs::metadata(zip_path)
            .await
            .fs_context("reading artifact metadata", zip_path)?
            .len();
        let checksum = calculate_sha256(zip_path).await?;
        let resources = list_resources(zip_path).await?;

        for (arch, files) in &resources {
            if files.is_empty() {
                log::warn!("{} has no files in {}", arch, zip_path.display());
            } else {
                log::info!("{}: {}", arch, files.join(", "));
            }
        }

        Ok(BundledArtifact {
            path: zip_path.to_path_buf(),
            size,
            checksum,
            resources,
        })
    }
}
