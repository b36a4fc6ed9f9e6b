//! Project lister

use crate::error::{CliError, LabelingCall, Result};
use crate::labeling::{LabelingService, ProjectSelector};
use labelkit_client::Project;
use std::io::Write;
use tracing::info;

/// What the project lister printed
#[derive(Clone, Debug)]
pub struct ProjectListing {
    pub projects: Vec<Project>,
    pub selected: Project,
}

/// Print the listing and one line per project, then the one picked by `selector`
pub async fn get_projects<W: Write>(
    service: &dyn LabelingService,
    selector: ProjectSelector,
    out: &mut W,
) -> Result<ProjectListing> {
    writeln!(out, "get_projects")?;

    service
        .check_connection()
        .await
        .map_err(|e| CliError::labeling(LabelingCall::CheckConnection, e))?;

    let projects = service
        .list_projects()
        .await
        .map_err(|e| CliError::labeling(LabelingCall::ListProjects, e))?;
    info!(count = projects.len(), "listed projects");

    let summary: Vec<String> = projects.iter().map(ToString::to_string).collect();
    writeln!(out, "[{}]", summary.join(", "))?;
    for project in &projects {
        writeln!(
            out,
            "{} {} {}",
            project.id,
            project.title,
            project.description.as_deref().unwrap_or("None")
        )?;
    }

    let selected = selector.resolve(service, &projects).await?;
    writeln!(out, "{}", selected)?;

    Ok(ProjectListing { projects, selected })
}
