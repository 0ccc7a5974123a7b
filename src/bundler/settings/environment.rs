//! Process environment used for tool discovery.

use std::{
    ffi::OsString,
    io,
    path::{Path, PathBuf},
};

/// Environment variables naming Windows program installation roots,
/// probed in this order.
pub const PROGRAM_FILES_VARS: [&str; 2] = ["PROGRAMFILES", "PROGRAMFILES(X86)"];

/// Snapshot of the parts of the process environment that tool discovery reads.
///
/// Tool discovery is a function of this value only, so tests can build one
/// by hand instead of mutating the real working directory or variables.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ToolEnvironment {
    /// Working directory; bare tool names are first resolved against it.
    pub cwd: PathBuf,
    /// Executable search path (`PATH`), in lookup order.
    pub search_path: Vec<PathBuf>,
    /// Program installation roots, one per set `PROGRAM_FILES_VARS` variable.
    pub program_files: Vec<PathBuf>,
}

impl ToolEnvironment {
    /// Creates an environment with only a working directory.
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            ..Default::default()
        }
    }

    /// Sets the executable search path.
    pub fn with_search_path<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.search_path = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the program installation roots.
    pub fn with_program_files<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.program_files = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Captures the current process environment.
    pub fn from_process() -> io::Result<Self> {
        let cwd = std::env::current_dir()?;
        let search_path = std::env::var_os("PATH")
            .map(|path| {
                std::env::split_paths(&path)
                    .filter(|dir| !dir.as_os_str().is_empty())
                    .collect()
            })
            .unwrap_or_default();
        let program_files = PROGRAM_FILES_VARS
            .iter()
            .filter_map(|var| std::env::var_os(var))
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .collect();

        Ok(Self {
            cwd,
            search_path,
            program_files,
        })
    }

    /// Search path joined into a single `PATH`-style value.
    pub fn joined_search_path(&self) -> Option<OsString> {
        if self.search_path.is_empty() {
            return None;
        }
        std::env::join_paths(&self.search_path).ok()
    }

    /// Resolves `path` against the working directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }
}
