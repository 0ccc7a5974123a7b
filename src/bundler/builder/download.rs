//! Download-and-unpack step shared by every package.

use crate::bundler::{
    error::{Context, ErrorExt, Result},
    settings::PackageId,
    utils::{
        fs,
        http::Fetcher,
        process::{CommandRunner, display_command},
    },
};
use std::{
    ffi::OsString,
    io::Write,
    path::{Path, PathBuf},
};

/// Downloads `package` from `base_url` into `out_dir`, unpacks it there with
/// the 7-Zip executable `archiver`, and deletes the downloaded archive.
///
/// Returns the directory the package unpacks into (`<out_dir>/<package>`).
///
/// A fetch failure aborts. The archiver's exit status is only logged: a
/// failed extraction carries on and shows up later as missing files.
pub async fn download_and_unpack<F, R>(
    fetcher: &F,
    runner: &R,
    archiver: &Path,
    package: &PackageId,
    base_url: &str,
    out_dir: &Path,
) -> Result<PathBuf>
where
    F: Fetcher,
    R: CommandRunner,
{
    let file_name = package.archive_file_name();
    let archive_path = out_dir.join(&file_name);
    let url = package.url(base_url);

    progress(&format!("Downloading {}... ", package));
    let body = fetcher
        .fetch(&url)
        .await
        .context(format!("downloading {}", package))?;
    tokio::fs::write(&archive_path, &body)
        .await
        .fs_context("writing downloaded archive", &archive_path)?;
    println!("OK");

    progress(&format!("Unpacking {}... ", file_name));
    let args = extract_args(&archive_path, out_dir);
    let status = runner.run(archiver, &args).await?;
    if !status.success() {
        log::warn!(
            "`{}` finished with {}; continuing with whatever was extracted",
            display_command(archiver, &args),
            status
        );
    }
    println!("OK");

    fs::remove_file(&archive_path).await?;
    println!("Deleted {}", file_name);

    Ok(out_dir.join(package.as_str()))
}

/// Arguments for `7z x <archive> -o<out_dir>`.
pub fn extract_args(archive: &Path, out_dir: &Path) -> Vec<OsString> {
    let mut output = OsString::from("-o");
    output.push(out_dir);
    vec!["x".into(), archive.as_os_str().to_owned(), output]
}

fn progress(message: &str) {
    print!("{}", message);
    let _ = std::io::stdout().flush();
}
