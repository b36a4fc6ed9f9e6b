//! Runs the requested actions in a fixed order

use crate::config::AppConfig;
use crate::cors::set_cors_configuration;
use crate::error::{CliError, Result};
use crate::labeling::{LabelingService, ProjectSelector};
use crate::metadata::view_bucket_metadata;
use crate::projects::get_projects;
use crate::storage::BucketStore;
use crate::tasks::get_project_tasks;
use std::io::Write;
use tracing::{error, info};

/// Actions requested on the command line
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Actions {
    pub cors: bool,
    pub metadata: bool,
    pub projects: bool,
    pub tasks: bool,
}

impl Actions {
    /// Whether any action talks to the labeling service
    pub fn needs_labeling(&self) -> bool {
        self.projects || self.tasks
    }

    /// Whether nothing was requested
    pub fn is_empty(&self) -> bool {
        !(self.cors || self.metadata || self.projects || self.tasks)
    }
}

/// Sequential dispatcher over the storage and labeling services
pub struct Dispatcher<'a> {
    config: &'a AppConfig,
    storage: &'a dyn BucketStore,
    labeling: Option<&'a dyn LabelingService>,
    project_selector: ProjectSelector,
    task_selector: ProjectSelector,
}

impl<'a> Dispatcher<'a> {
    /// Create a dispatcher without a labeling service
    pub fn new(config: &'a AppConfig, storage: &'a dyn BucketStore) -> Self {
        Self {
            config,
            storage,
            labeling: None,
            project_selector: ProjectSelector::FIXED_ID,
            task_selector: ProjectSelector::First,
        }
    }

    /// Attach the labeling service
    pub fn with_labeling(mut self, labeling: &'a dyn LabelingService) -> Self {
        self.labeling = Some(labeling);
        self
    }

    /// Override the project the project lister fetches
    pub fn with_project_selector(mut self, selector: ProjectSelector) -> Self {
        self.project_selector = selector;
        self
    }

    /// Override the project the task lister reports on
    pub fn with_task_selector(mut self, selector: ProjectSelector) -> Self {
        self.task_selector = selector;
        self
    }

    /// Run CORS, metadata, projects, tasks, in that order.
    ///
    /// A metadata failure is reported and the remaining actions still run.
    /// Any other failure stops the run.
    pub async fn run<W: Write>(&self, actions: Actions, out: &mut W) -> Result<()> {
        if actions.needs_labeling() && !self.config.has_label_studio_key() {
            return Err(CliError::MissingKey);
        }

        let bucket = self.config.storage.bucket.as_str();

        if actions.cors {
            set_cors_configuration(self.storage, bucket, out).await?;
        }

        if actions.metadata {
            if let Err(e) = view_bucket_metadata(self.storage, bucket, out).await {
                error!(bucket, error = %e, "bucket metadata report failed");
                writeln!(out, "Error getting metadata for bucket {}: {}", bucket, e)?;
            }
        }

        if actions.projects {
            get_projects(self.labeling()?, self.project_selector, out).await?;
        }

        if actions.tasks {
            get_project_tasks(self.labeling()?, self.task_selector, out).await?;
        }

        if actions.is_empty() {
            info!("no action requested");
        }
        Ok(())
    }

    fn labeling(&self) -> Result<&'a dyn LabelingService> {
        self.labeling
            .ok_or_else(|| CliError::Config("labeling service is not configured".to_string()))
    }
}
