//! Sequential `dotnet` invocations per project.

use super::settings::{BuildSettings, Project};
use crate::bundler::{
    Result,
    utils::process::{CommandRunner, CommandStatus, display_command},
};
use std::{
    ffi::OsString,
    fmt,
    path::{Path, PathBuf},
};

/// One `dotnet` subcommand in the per-project sequence.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DotnetStep {
    /// `dotnet clean <project>`
    Clean,
    /// `dotnet restore <project>`
    Restore,
    /// `dotnet build <project> <properties>`
    Build,
    /// `dotnet pack <project> <properties>`
    Pack,
}

impl DotnetStep {
    /// Every step, in execution order.
    pub const ALL: [DotnetStep; 4] = [
        DotnetStep::Clean,
        DotnetStep::Restore,
        DotnetStep::Build,
        DotnetStep::Pack,
    ];

    /// The `dotnet` subcommand.
    pub fn as_str(self) -> &'static str {
        match self {
            DotnetStep::Clean => "clean",
            DotnetStep::Restore => "restore",
            DotnetStep::Build => "build",
            DotnetStep::Pack => "pack",
        }
    }

    /// Whether the step receives configuration and version properties.
    pub fn takes_properties(self) -> bool {
        matches!(self, DotnetStep::Build | DotnetStep::Pack)
    }
}

impl fmt::Display for DotnetStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one external call.
#[derive(Clone, Debug)]
pub struct StepOutcome {
    /// Project the step ran against
    pub project: PathBuf,
    /// Which step ran
    pub step: DotnetStep,
    /// Exit status reported by the toolchain
    pub status: CommandStatus,
}

/// Runs clean, restore, build and pack for each project.
///
/// Exit statuses are recorded but never stop the sequence: every step of
/// every project runs even when an earlier one failed. Only a toolchain that
/// cannot be started at all is an error.
#[derive(Debug)]
pub struct ProjectBuilder<R> {
    runner: R,
}

impl<R: CommandRunner> ProjectBuilder<R> {
    /// Creates a builder that runs commands through `runner`.
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Builds every project in [`BuildSettings::projects`] order.
    pub async fn build_all(&self, settings: &BuildSettings) -> Result<Vec<StepOutcome>> {
        let mut outcomes = Vec::new();
        for project in settings.projects() {
            outcomes.extend(self.build_project(settings.dotnet(), &project).await?);
        }
        Ok(outcomes)
    }

    /// Runs the four steps against one project.
    pub async fn build_project(&self, dotnet: &Path, project: &Project) -> Result<Vec<StepOutcome>> {
        log::info!(
            "Building {} (version prefix {})",
            project.path.display(),
            project.version.prefix()
        );

        let mut outcomes = Vec::with_capacity(DotnetStep::ALL.len());
        for step in DotnetStep::ALL {
            let args = step_args(step, project);
            let status = self.runner.run(dotnet, &args).await?;
            if !status.success() {
                log::warn!(
                    "`{}` finished with {}; continuing",
                    display_command(dotnet, &args),
                    status
                );
            }
            outcomes.push(StepOutcome {
                project: project.path.clone(),
                step,
                status,
            });
        }
        Ok(outcomes)
    }
}

/// Arguments for one step: subcommand, project path, then properties for
/// `build` and `pack`.
pub fn step_args(step: DotnetStep, project: &Project) -> Vec<OsString> {
    let mut args = vec![OsString::from(step.as_str()), project.path.clone().into_os_string()];
    if step.takes_properties() {
        args.extend(project.version.msbuild_properties().into_iter().map(OsString::from));
    }
    args
}
