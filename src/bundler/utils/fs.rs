//! File system utilities for bundling.
//!
//! Idempotent directory and file removal, glob-based copying and renaming,
//! with every IO failure tagged with the operation and path.

use crate::bundler::error::{Error, ErrorExt, Result};
use std::{
    io,
    path::{Path, PathBuf},
};
use tokio::fs;

/// Creates all of the directories of the specified path, erasing it first if specified.
pub async fn create_dir_all(path: &Path, erase: bool) -> Result<()> {
    if erase {
        remove_dir_all(path).await?;
    }

    // create_dir_all is already idempotent - succeeds even if dir exists
    fs::create_dir_all(path)
        .await
        .fs_context("creating directory", path)
}

/// Removes the directory and its contents if it exists.
pub async fn remove_dir_all(path: &Path) -> Result<()> {
    match fs::remove_dir_all(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()), // Idempotent
        Err(e) => Err(Error::Fs {
            context: "removing directory",
            path: path.to_path_buf(),
            error: e,
        }),
    }
}

/// Removes a regular file if it exists. Returns whether a file was removed.
pub async fn remove_file(path: &Path) -> Result<bool> {
    match fs::remove_file(path).await {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::Fs {
            context: "removing file",
            path: path.to_path_buf(),
            error: e,
        }),
    }
}

/// Non-recursively copies every regular file in `src_dir` whose name matches
/// `pattern` (e.g. `*.dll`) into `dst_dir`, keeping file names.
///
/// A missing `src_dir` matches nothing. Returns the destination paths in
/// sorted order.
pub async fn copy_matching(src_dir: &Path, pattern: &str, dst_dir: &Path) -> Result<Vec<PathBuf>> {
    let full_pattern = format!(
        "{}/{}",
        glob::Pattern::escape(&src_dir.to_string_lossy()),
        pattern
    );

    let mut sources: Vec<PathBuf> = tokio::task::spawn_blocking(move || -> Result<Vec<PathBuf>> {
        let mut found = Vec::new();
        for entry in glob::glob(&full_pattern)? {
            let path = entry.map_err(|e| Error::GenericError(e.to_string()))?;
            if path.is_file() {
                found.push(path);
            }
        }
        Ok(found)
    })
    .await
    .map_err(|e| Error::GenericError(format!("Glob task panicked: {}", e)))??;
    sources.sort();

    let mut copied = Vec::with_capacity(sources.len());
    for src in sources {
        let Some(name) = src.file_name() else {
            continue;
        };
        let dst = dst_dir.join(name);
        fs::copy(&src, &dst).await.fs_context("copying file", &src)?;
        log::debug!("Copied {} -> {}", src.display(), dst.display());
        copied.push(dst);
    }

    Ok(copied)
}

/// Renames `from` to `to` if `from` is an existing regular file.
///
/// Returns whether a rename happened.
pub async fn rename_if_file(from: &Path, to: &Path) -> Result<bool> {
    match fs::metadata(from).await {
        Ok(meta) if meta.is_file() => {
            fs::rename(from, to).await.fs_context("renaming file", from)?;
            Ok(true)
        }
        Ok(_) => Ok(false),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::Fs {
            context: "reading file metadata",
            path: from.to_path_buf(),
            error: e,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_dir_all_with_erase_drops_contents() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("build");
        std::fs::create_dir_all(dir.join("stale")).unwrap();
        std::fs::write(dir.join("stale/file.txt"), b"old").unwrap();

        create_dir_all(&dir, true).await.unwrap();

        assert!(dir.is_dir());
        assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn removals_are_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        remove_dir_all(&tmp.path().join("missing")).await.unwrap();
        assert!(!remove_file(&tmp.path().join("missing.zip")).await.unwrap());
    }

    #[tokio::test]
    async fn copy_matching_is_flat_and_filtered() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("pkg [1]").join("bin");
        let dst = tmp.path().join("out");
        std::fs::create_dir_all(src.join("nested")).unwrap();
        std::fs::create_dir_all(&dst).unwrap();
        std::fs::write(src.join("libcurl.dll"), b"curl").unwrap();
        std::fs::write(src.join("curl.exe"), b"exe").unwrap();
        std::fs::write(src.join("nested/inner.dll"), b"inner").unwrap();

        let copied = copy_matching(&src, "*.dll", &dst).await.unwrap();

        assert_eq!(copied, vec![dst.join("libcurl.dll")]);
        assert!(!dst.join("curl.exe").exists());
        assert!(!dst.join("inner.dll").exists());
    }

    #[tokio::test]
    async fn copy_matching_missing_source_copies_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let copied = copy_matching(&tmp.path().join("nope"), "*.crt", tmp.path())
            .await
            .unwrap();
        assert!(copied.is_empty());
    }

    #[tokio::test]
    async fn rename_if_file_skips_missing() {
        let tmp = tempfile::tempdir().unwrap();
        let from = tmp.path().join("a.dll");
        let to = tmp.path().join("b.dll");

        assert!(!rename_if_file(&from, &to).await.unwrap());

        std::fs::write(&from, b"x").unwrap();
        assert!(rename_if_file(&from, &to).await.unwrap());
        assert!(to.exists() && !from.exists());
    }
}
