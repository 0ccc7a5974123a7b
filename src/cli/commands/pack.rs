//! Resource packaging command.

use crate::{
    bundler::{Bundler, HttpFetcher, SystemRunner, ToolEnvironment},
    cli::PackArgs,
    error::Result,
};

/// Packs the resources archive and reports where it was written.
pub async fn execute_pack(args: &PackArgs) -> Result<i32> {
    let settings = args.to_settings()?;
    let environment = ToolEnvironment::from_process()?;

    log::info!(
        "Packing libcurl {} and OpenSSL {} into {}",
        settings.libcurl_version(),
        settings.openssl_version(),
        settings.resources_zip().display()
    );

    let bundler = Bundler::new(settings, environment, HttpFetcher::new(), SystemRunner);
    let artifact = bundler.bundle().await?;

    println!(
        "Created {} ({} bytes, sha256 {})",
        artifact.path.display(),
        artifact.size,
        artifact.checksum
    );

    Ok(0)
}
