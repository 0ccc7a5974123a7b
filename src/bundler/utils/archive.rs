//! ZIP archive creation for the resources bundle.

use crate::{
    bail,
    bundler::error::{Error, ErrorExt, Result},
};
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};
use zip::{CompressionMethod, DateTime, ZipWriter, write::SimpleFileOptions};

/// Compresses the contents of `src_dir` into a ZIP archive at `zip_path`.
///
/// Entry names are relative to `src_dir` with `/` separators; directories get
/// their own `name/` entries. Entries are written in sorted order with a fixed
/// timestamp and permissions so identical trees produce identical archives.
///
/// Returns the number of file entries written.
pub async fn zip_directory(src_dir: &Path, zip_path: &Path) -> Result<usize> {
    if !src_dir.is_dir() {
        bail!("{} is not a directory", src_dir.display());
    }

    let src_dir = src_dir.to_path_buf();
    let zip_path = zip_path.to_path_buf();

    tokio::task::spawn_blocking(move || write_archive(&src_dir, &zip_path))
        .await
        .map_err(|e| Error::GenericError(format!("Archive task panicked: {}", e)))?
}

fn write_archive(src_dir: &Path, zip_path: &Path) -> Result<usize> {
    let mut entries: Vec<(String, PathBuf, bool)> = Vec::new();
    for entry in walkdir::WalkDir::new(src_dir).min_depth(1).follow_links(false) {
        let entry = entry?;
        let rel_path = entry.path().strip_prefix(src_dir)?;
        let name = entry_name(rel_path);
        entries.push((name, entry.path().to_path_buf(), entry.file_type().is_dir()));
    }
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    let file = File::create(zip_path).fs_context("creating archive", zip_path)?;
    let mut writer = ZipWriter::new(BufWriter::new(file));

    let dir_options = SimpleFileOptions::default()
        .last_modified_time(DateTime::default())
        .unix_permissions(0o755);
    let file_options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
        .unix_permissions(0o644);

    let mut files = 0;
    for (name, path, is_dir) in entries {
        if is_dir {
            writer.add_directory(format!("{}/", name), dir_options)?;
        } else {
            writer.start_file(name, file_options)?;
            let mut input = File::open(&path).fs_context("opening file for archive", &path)?;
            io::copy(&mut input, &mut writer).fs_context("writing archive entry", &path)?;
            files += 1;
        }
    }

    writer
        .finish()?
        .flush()
        .fs_context("flushing archive", zip_path)?;
    Ok(files)
}

/// Archive entry name for a relative path, always `/`-separated.
fn entry_name(rel_path: &Path) -> String {
    rel_path
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn sample_tree(root: &Path) {
        std::fs::create_dir_all(root.join("win64")).unwrap();
        std::fs::create_dir_all(root.join("win32")).unwrap();
        std::fs::write(root.join("win32/libcurl.dll"), b"curl32").unwrap();
        std::fs::write(root.join("win64/libcurl.dll"), b"curl64").unwrap();
    }

    #[tokio::test]
    async fn writes_sorted_entries_with_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("Resources");
        sample_tree(&src);
        let zip_path = tmp.path().join("Resources.zip");

        let files = zip_directory(&src, &zip_path).await.unwrap();
        assert_eq!(files, 2);

        let mut archive = zip::ZipArchive::new(File::open(&zip_path).unwrap()).unwrap();
        let names: Vec<_> = archive.file_names().map(str::to_string).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert!(names.contains(&"win32/".to_string()));
        assert!(names.contains(&"win64/libcurl.dll".to_string()));

        let mut content = String::new();
        archive
            .by_name("win64/libcurl.dll")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "curl64");
    }

    #[tokio::test]
    async fn missing_source_directory_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = zip_directory(&tmp.path().join("nope"), &tmp.path().join("out.zip"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("is not a directory"));
        assert!(!tmp.path().join("out.zip").exists());
    }

    #[tokio::test]
    async fn identical_trees_give_identical_archives() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("Resources");
        sample_tree(&src);

        let first = tmp.path().join("a.zip");
        let second = tmp.path().join("b.zip");
        zip_directory(&src, &first).await.unwrap();
        zip_directory(&src, &second).await.unwrap();

        assert_eq!(std::fs::read(first).unwrap(), std::fs::read(second).unwrap());
    }
}
