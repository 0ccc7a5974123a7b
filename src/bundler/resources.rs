//! Reading the resources archive back.
//!
//! The archive holds one top-level directory per [`Arch`]. A consumer pulls
//! the libraries and the CA bundle for its own architecture out of it,
//! flattened into a single directory.

use crate::bundler::{
    error::{Error, ErrorExt, Result},
    settings::Arch,
};
use std::{
    collections::BTreeMap,
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
};
use zip::ZipArchive;

/// File extensions extracted for an architecture.
const EXTRACTED_EXTENSIONS: [&str; 2] = ["dll", "crt"];

/// File names in the archive, grouped by architecture directory.
///
/// Architecture directories without files map to an empty list. Entries
/// outside a known architecture directory are ignored.
pub async fn list_resources(zip_path: &Path) -> Result<BTreeMap<Arch, Vec<String>>> {
    let zip_path = zip_path.to_path_buf();
    tokio::task::spawn_blocking(move || -> Result<BTreeMap<Arch, Vec<String>>> {
        let mut archive = open(&zip_path)?;
        let mut listing: BTreeMap<Arch, Vec<String>> = BTreeMap::new();

        for i in 0..archive.len() {
            let entry = archive.by_index(i)?;
            let Some((arch, name)) = split_entry(entry.name()) else {
                log::debug!("Ignoring archive entry {}", entry.name());
                continue;
            };
            let files = listing.entry(arch).or_default();
            if !entry.is_dir() && !name.is_empty() {
                files.push(name.to_string());
            }
        }

        Ok(listing)
    })
    .await
    .map_err(|e| Error::GenericError(format!("Archive listing task panicked: {}", e)))?
}

/// Extracts every `<arch>/*.dll` and `<arch>/*.crt` entry into `out_dir`
/// under its bare file name.
///
/// An existing file with the same size as the entry is left alone; any other
/// existing file is overwritten. Returns the paths that were written.
pub async fn extract_resources(zip_path: &Path, arch: Arch, out_dir: &Path) -> Result<Vec<PathBuf>> {
    let zip_path = zip_path.to_path_buf();
    let out_dir = out_dir.to_path_buf();

    tokio::task::spawn_blocking(move || -> Result<Vec<PathBuf>> {
        std::fs::create_dir_all(&out_dir).fs_context("creating output directory", &out_dir)?;
        let mut archive = open(&zip_path)?;
        let mut written = Vec::new();

        for i in 0..archive.len() {
            let mut entry = archive.by_index(i)?;
            if entry.is_dir() {
                continue;
            }
            let name = match split_entry(entry.name()) {
                Some((entry_arch, name)) if entry_arch == arch && is_extracted(name) => {
                    name.to_string()
                }
                _ => continue,
            };

            let target = out_dir.join(&name);
            if let Ok(meta) = std::fs::metadata(&target) {
                if meta.is_file() && meta.len() == entry.size() {
                    log::debug!("{} is up to date", target.display());
                    continue;
                }
            }

            let mut output = File::create(&target).fs_context("creating resource file", &target)?;
            io::copy(&mut entry, &mut output).fs_context("extracting resource", &target)?;
            log::debug!("Extracted {}", target.display());
            written.push(target);
        }

        Ok(written)
    })
    .await
    .map_err(|e| Error::GenericError(format!("Archive extraction task panicked: {}", e)))?
}

fn open(zip_path: &Path) -> Result<ZipArchive<BufReader<File>>> {
    let file = File::open(zip_path).fs_context("opening archive", zip_path)?;
    Ok(ZipArchive::new(BufReader::new(file))?)
}

/// Splits `win64/libcurl.dll` into `(Win64, "libcurl.dll")`. Directory
/// entries yield an empty name. Nested paths keep their inner separators.
fn split_entry(entry_name: &str) -> Option<(Arch, &str)> {
    let normalized = entry_name.trim_end_matches('/');
    let (dir, rest) = match normalized.split_once('/') {
        Some((dir, rest)) => (dir, rest),
        None => (normalized, ""),
    };
    Arch::from_dir_name(dir).map(|arch| (arch, rest))
}

fn is_extracted(name: &str) -> bool {
    !name.contains('/')
        && Path::new(name)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| EXTRACTED_EXTENSIONS.contains(&ext))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::utils::archive::zip_directory;

    async fn sample_zip(root: &Path) -> PathBuf {
        let src = root.join("Resources");
        for arch in ["win32", "win64"] {
            std::fs::create_dir_all(src.join(arch)).unwrap();
            std::fs::write(src.join(arch).join("libcurl.dll"), arch.as_bytes()).unwrap();
            std::fs::write(src.join(arch).join("curl-ca-bundle.crt"), b"certs").unwrap();
        }
        std::fs::write(src.join("win64/README.txt"), b"ignored").unwrap();
        let zip_path = root.join("Resources.zip");
        zip_directory(&src, &zip_path).await.unwrap();
        zip_path
    }

    #[test]
    fn split_entry_recognises_architectures() {
        assert_eq!(split_entry("win32/"), Some((Arch::Win32, "")));
        assert_eq!(split_entry("win64/libssl.dll"), Some((Arch::Win64, "libssl.dll")));
        assert_eq!(split_entry("other/libssl.dll"), None);
    }

    #[tokio::test]
    async fn lists_files_per_architecture() {
        let tmp = tempfile::tempdir().unwrap();
        let zip_path = sample_zip(tmp.path()).await;

        let listing = list_resources(&zip_path).await.unwrap();

        assert_eq!(listing.keys().copied().collect::<Vec<_>>(), Arch::ALL);
        assert_eq!(
            listing[&Arch::Win64],
            vec!["README.txt", "curl-ca-bundle.crt", "libcurl.dll"]
        );
    }

    #[tokio::test]
    async fn extracts_only_matching_architecture_and_extensions() {
        let tmp = tempfile::tempdir().unwrap();
        let zip_path = sample_zip(tmp.path()).await;
        let out = tmp.path().join("out");

        let written = extract_resources(&zip_path, Arch::Win64, &out).await.unwrap();

        assert_eq!(written.len(), 2);
        assert_eq!(std::fs::read(out.join("libcurl.dll")).unwrap(), b"win64");
        assert!(out.join("curl-ca-bundle.crt").exists());
        assert!(!out.join("README.txt").exists());
    }

    #[tokio::test]
    async fn same_size_files_are_not_rewritten() {
        let tmp = tempfile::tempdir().unwrap();
        let zip_path = sample_zip(tmp.path()).await;
        let out = tmp.path().join("out");
        std::fs::create_dir_all(&out).unwrap();
        std::fs::write(out.join("libcurl.dll"), b"WIN32").unwrap();
        std::fs::write(out.join("curl-ca-bundle.crt"), b"stale bundle").unwrap();

        let written = extract_resources(&zip_path, Arch::Win32, &out).await.unwrap();

        assert_eq!(written, vec![out.join("curl-ca-bundle.crt")]);
        assert_eq!(std::fs::read(out.join("libcurl.dll")).unwrap(), b"WIN32");
        assert_eq!(std::fs::read(out.join("curl-ca-bundle.crt")).unwrap(), b"certs");
    }
}
