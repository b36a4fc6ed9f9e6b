//! Task lister

use crate::error::{CliError, LabelingCall, Result};
use crate::labeling::{LabelingService, ProjectSelector};
use labelkit_client::{Project, Task};
use std::io::Write;
use tracing::info;

/// What the task lister printed
#[derive(Clone, Debug)]
pub struct TaskListing {
    pub project: Project,
    pub task_count: usize,
    pub labeled_tasks: Vec<Task>,
}

/// Print task counts and the annotations of every labeled task of one project
pub async fn get_project_tasks<W: Write>(
    service: &dyn LabelingService,
    selector: ProjectSelector,
    out: &mut W,
) -> Result<TaskListing> {
    writeln!(out, "get_project_tasks")?;

    service
        .check_connection()
        .await
        .map_err(|e| CliError::labeling(LabelingCall::CheckConnection, e))?;

    let projects = service
        .list_projects()
        .await
        .map_err(|e| CliError::labeling(LabelingCall::ListProjects, e))?;
    let project = selector.resolve(service, &projects).await?;
    writeln!(out, "{}", project)?;

    let tasks = service
        .list_tasks(project.id)
        .await
        .map_err(|e| CliError::labeling(LabelingCall::ListTasks, e))?;
    writeln!(out, "Number of tasks: {}", tasks.len())?;

    let labeled_tasks = service
        .labeled_tasks(project.id)
        .await
        .map_err(|e| CliError::labeling(LabelingCall::LabeledTasks, e))?;
    writeln!(out, "Number of labeled tasks: {}", labeled_tasks.len())?;
    info!(project = project.id, tasks = tasks.len(), labeled = labeled_tasks.len(), "listed tasks");

    for task in &labeled_tasks {
        writeln!(out, "Annotations: {}", serde_json::to_string(&task.annotations)?)?;
    }

    Ok(TaskListing {
        project,
        task_count: tasks.len(),
        labeled_tasks,
    })
}
