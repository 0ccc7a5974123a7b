//! External tool detection.
//!
//! Locates the 7-Zip executable used to unpack downloaded packages. The
//! search depends only on the [`ToolEnvironment`] passed in.

use crate::bundler::{
    error::{Error, Result},
    settings::ToolEnvironment,
};
use std::path::{Path, PathBuf};

/// Executable names probed in the working directory and on the search path.
pub const ARCHIVER_NAMES: [&str; 2] = ["7z", "7z.exe"];

/// Location of the executable below a program installation root.
const PROGRAM_FILES_ARCHIVER: [&str; 2] = ["7-Zip", "7z.exe"];

/// Finds a 7-Zip executable.
///
/// Probes, in order, stopping at the first executable regular file:
/// 1. `7z` in the working directory, then on the search path
/// 2. `7z.exe` in the working directory, then on the search path
/// 3. `7-Zip/7z.exe` below each program installation root, in order
///
/// No version check is performed on the result.
///
/// # Errors
///
/// [`Error::ToolNotFound`] listing every probed location if nothing matches.
pub fn locate_archiver(env: &ToolEnvironment) -> Result<PathBuf> {
    let mut searched = Vec::new();

    for name in ARCHIVER_NAMES {
        let local = env.cwd.join(name);
        if is_executable(&local) {
            log::debug!("Found {} in working directory: {}", name, local.display());
            return Ok(local);
        }
        searched.push(local);

        if let Some(paths) = env.joined_search_path() {
            match which::which_in(name, Some(paths), &env.cwd) {
                Ok(path) if is_executable(&path) => {
                    log::debug!("Found {} on search path: {}", name, path.display());
                    return Ok(path);
                }
                Ok(path) => {
                    log::debug!("Ignoring non-executable {}", path.display());
                }
                Err(e) => {
                    log::debug!("{} not found on search path: {}", name, e);
                }
            }
        }
        searched.extend(env.search_path.iter().map(|dir| env.resolve(dir).join(name)));
    }

    for root in &env.program_files {
        let candidate = PROGRAM_FILES_ARCHIVER
            .iter()
            .fold(root.clone(), |path, part| path.join(part));
        if is_executable(&candidate) {
            log::debug!("Found 7-Zip installation: {}", candidate.display());
            return Ok(candidate);
        }
        searched.push(candidate);
    }

    Err(Error::ToolNotFound {
        tool: "7-Zip",
        searched,
    })
}

/// Whether `path` is a regular file the current process may execute.
pub fn is_executable(path: &Path) -> bool {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => has_execute_access(path),
        _ => false,
    }
}

#[cfg(unix)]
fn has_execute_access(path: &Path) -> bool {
    nix::unistd::access(path, nix::unistd::AccessFlags::X_OK).is_ok()
}

#[cfg(not(unix))]
fn has_execute_access(_path: &Path) -> bool {
    true
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    fn fake_tool(path: &Path, mode: u32) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, b"#!/bin/sh\nexit 0\n").unwrap();
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode)).unwrap();
    }

    #[test]
    fn working_directory_wins_over_program_files() {
        let tmp = tempfile::tempdir().unwrap();
        let cwd = tmp.path().join("cwd");
        let program_files = tmp.path().join("Program Files");
        fake_tool(&cwd.join("7z"), 0o755);
        fake_tool(&program_files.join("7-Zip/7z.exe"), 0o755);

        let env = ToolEnvironment::new(&cwd).with_program_files([&program_files]);

        assert_eq!(locate_archiver(&env).unwrap(), cwd.join("7z"));
    }

    #[test]
    fn search_path_is_probed() {
        let tmp = tempfile::tempdir().unwrap();
        let cwd = tmp.path().join("cwd");
        let bin = tmp.path().join("bin");
        std::fs::create_dir_all(&cwd).unwrap();
        fake_tool(&bin.join("7z"), 0o755);

        let env = ToolEnvironment::new(&cwd).with_search_path([&bin]);

        assert_eq!(locate_archiver(&env).unwrap(), bin.join("7z"));
    }

    #[test]
    fn exe_name_is_second_choice() {
        let tmp = tempfile::tempdir().unwrap();
        fake_tool(&tmp.path().join("7z.exe"), 0o755);

        let env = ToolEnvironment::new(tmp.path());

        assert_eq!(locate_archiver(&env).unwrap(), tmp.path().join("7z.exe"));
    }

    #[test]
    fn program_files_roots_are_probed_in_order() {
        let tmp = tempfile::tempdir().unwrap();
        let x64 = tmp.path().join("Program Files");
        let x86 = tmp.path().join("Program Files (x86)");
        fake_tool(&x86.join("7-Zip/7z.exe"), 0o755);

        let env = ToolEnvironment::new(tmp.path()).with_program_files([&x64, &x86]);
        assert_eq!(locate_archiver(&env).unwrap(), x86.join("7-Zip/7z.exe"));

        fake_tool(&x64.join("7-Zip/7z.exe"), 0o755);
        assert_eq!(locate_archiver(&env).unwrap(), x64.join("7-Zip/7z.exe"));
    }

    #[test]
    fn non_executable_file_is_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        let program_files = tmp.path().join("pf");
        fake_tool(&tmp.path().join("7z"), 0o644);
        fake_tool(&program_files.join("7-Zip/7z.exe"), 0o755);

        let env = ToolEnvironment::new(tmp.path()).with_program_files([&program_files]);

        assert_eq!(
            locate_archiver(&env).unwrap(),
            program_files.join("7-Zip/7z.exe")
        );
    }

    #[test]
    fn directory_named_7z_is_not_a_tool() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(tmp.path().join("7z")).unwrap();

        assert!(!is_executable(&tmp.path().join("7z")));
    }

    #[test]
    fn nothing_found_is_tool_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let env = ToolEnvironment::new(tmp.path())
            .with_program_files([tmp.path().join("missing")]);

        match locate_archiver(&env).unwrap_err() {
            Error::ToolNotFound { tool, searched } => {
                assert_eq!(tool, "7-Zip");
                assert_eq!(searched.len(), 3);
                assert_eq!(searched[0], tmp.path().join("7z"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
