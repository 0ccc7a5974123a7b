//! Configuration for the .NET project builds.

use std::path::{Path, PathBuf};

/// Library project, relative to the solution root.
pub const LIBRARY_PROJECT: [&str; 2] = ["CurlThin", "CurlThin.csproj"];

/// Native-packaging project, relative to the solution root.
pub const NATIVE_PROJECT: [&str; 2] = ["CurlThin.Native", "CurlThin.Native.csproj"];

/// Build configuration passed to `build` and `pack`.
pub const CONFIGURATION_PROPERTY: &str = "/p:Configuration=Release";

/// Version prefix plus optional pre-release suffix of one project.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VersionSpec {
    prefix: String,
    suffix: Option<String>,
}

impl VersionSpec {
    /// Creates a version. An empty suffix counts as no suffix.
    pub fn new(prefix: impl Into<String>, suffix: Option<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.filter(|s| !s.is_empty()),
        }
    }

    /// Returns the version prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the version suffix, if any.
    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    /// MSBuild properties for `build` and `pack`, in order.
    pub fn msbuild_properties(&self) -> Vec<String> {
        let mut properties = vec![
            CONFIGURATION_PROPERTY.to_string(),
            format!("/p:VersionPrefix={}", self.prefix),
        ];
        if let Some(suffix) = &self.suffix {
            properties.push(format!("/p:VersionSuffix={}", suffix));
        }
        properties
    }
}

/// A project file and the version it is built with.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Project {
    /// Path to the `.csproj` file
    pub path: PathBuf,
    /// Version metadata
    pub version: VersionSpec,
}

/// Immutable configuration for one build run.
#[derive(Clone, Debug)]
pub struct BuildSettings {
    root_directory: PathBuf,
    dotnet: PathBuf,
    library_version: VersionSpec,
    native_version: VersionSpec,
}

impl BuildSettings {
    /// Creates build settings for the solution at `root_directory`.
    pub fn new(
        root_directory: impl Into<PathBuf>,
        dotnet: impl Into<PathBuf>,
        library_version: VersionSpec,
        native_version: VersionSpec,
    ) -> Self {
        Self {
            root_directory: root_directory.into(),
            dotnet: dotnet.into(),
            library_version,
            native_version,
        }
    }

    /// Returns the solution root.
    pub fn root_directory(&self) -> &Path {
        &self.root_directory
    }

    /// Returns the build toolchain executable.
    pub fn dotnet(&self) -> &Path {
        &self.dotnet
    }

    /// The projects to build, in build order: library first, then native.
    pub fn projects(&self) -> [Project; 2] {
        [
            Project {
                path: join_all(&self.root_directory, &LIBRARY_PROJECT),
                version: self.library_version.clone(),
            },
            Project {
                path: join_all(&self.root_directory, &NATIVE_PROJECT),
                version: self.native_version.clone(),
            },
        ]
    }
}

fn join_all(root: &Path, parts: &[&str]) -> PathBuf {
    parts.iter().fold(root.to_path_buf(), |path, part| path.join(part))
}
