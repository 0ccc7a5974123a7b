//! Project build command.

use crate::{
    bundler::SystemRunner,
    cli::BuildArgs,
    error::Result,
    projects::ProjectBuilder,
};

/// Builds both projects. Failed steps are reported but do not change the
/// exit code.
pub async fn execute_build(args: &BuildArgs) -> Result<i32> {
    let settings = args.to_settings()?;

    let outcomes = ProjectBuilder::new(SystemRunner).build_all(&settings).await?;

    let failed: Vec<_> = outcomes.iter().filter(|o| !o.status.success()).collect();
    for outcome in &failed {
        eprintln!(
            "warning: dotnet {} {} finished with {}",
            outcome.step,
            outcome.project.display(),
            outcome.status
        );
    }
    log::info!(
        "Ran {} dotnet steps, {} reported failure",
        outcomes.len(),
        failed.len()
    );

    Ok(0)
}
