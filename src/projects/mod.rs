//! .NET project builds.
//!
//! Runs `dotnet clean`, `restore`, `build` and `pack` for the CurlThin
//! library project and the CurlThin.Native packaging project, each with its
//! own version prefix and optional suffix.

mod builder;
mod settings;

pub use builder::{DotnetStep, ProjectBuilder, StepOutcome, step_args};
pub use settings::{
    BuildSettings, CONFIGURATION_PROPERTY, LIBRARY_PROJECT, NATIVE_PROJECT, Project, VersionSpec,
};
