//! Labeling service access

use crate::config::AppConfig;
use crate::error::{CliError, LabelingCall, Result};
use async_trait::async_trait;
use labelkit_client::{Project, StudioClient, Task};

/// Labeling calls used by the project and task listers
#[async_trait]
pub trait LabelingService: Send + Sync {
    /// Verify the service is reachable with the configured key
    async fn check_connection(&self) -> labelkit_client::Result<()>;

    /// All projects, in server order
    async fn list_projects(&self) -> labelkit_client::Result<Vec<Project>>;

    /// One project by ID
    async fn get_project(&self, id: u64) -> labelkit_client::Result<Project>;

    /// All tasks of a project
    async fn list_tasks(&self, project_id: u64) -> labelkit_client::Result<Vec<Task>>;

    /// Tasks of a project with at least one annotation
    async fn labeled_tasks(&self, project_id: u64) -> labelkit_client::Result<Vec<Task>>;
}

#[async_trait]
impl LabelingService for StudioClient {
    async fn check_connection(&self) -> labelkit_client::Result<()> {
        StudioClient::check_connection(self).await
    }

    async fn list_projects(&self) -> labelkit_client::Result<Vec<Project>> {
        StudioClient::list_projects(self).await
    }

    async fn get_project(&self, id: u64) -> labelkit_client::Result<Project> {
        StudioClient::get_project(self, id).await
    }

    async fn list_tasks(&self, project_id: u64) -> labelkit_client::Result<Vec<Task>> {
        StudioClient::list_tasks(self, project_id).await
    }

    async fn labeled_tasks(&self, project_id: u64) -> labelkit_client::Result<Vec<Task>> {
        StudioClient::labeled_tasks(self, project_id).await
    }
}

/// Build a client for the configured labeling service. No request is sent.
pub fn connect(config: &AppConfig) -> Result<StudioClient> {
    StudioClient::new(config.studio_client_config())
        .map_err(|e| CliError::labeling(LabelingCall::Connect, e))
}

/// How a lister picks the single project it reports on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectSelector {
    /// Fetch the project with this ID, whether or not it was listed
    ById(u64),
    /// Fetch the first project of the listing
    First,
}

impl ProjectSelector {
    /// Selection used by the project lister
    pub const FIXED_ID: Self = Self::ById(1);

    /// Fetch the selected project. `projects` is the listing already retrieved.
    pub async fn resolve(
        &self,
        service: &dyn LabelingService,
        projects: &[Project],
    ) -> Result<Project> {
        let id = match self {
            Self::ById(id) => *id,
            Self::First => projects.first().map(|p| p.id).ok_or(CliError::NoProjects)?,
        };

        service
            .get_project(id)
            .await
            .map_err(|e| CliError::labeling(LabelingCall::GetProject, e))
    }
}
