//! Main client implementation

use crate::{types::*, ClientError, Config, Result};
use reqwest::{header, Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

/// Label Studio client
pub struct StudioClient {
    config: Config,
    http: Client,
}

impl StudioClient {
    /// Create a new client with the given configuration
    pub fn new(config: Config) -> Result<Self> {
        Url::parse(config.base_url())
            .map_err(|e| ClientError::Config(format!("invalid endpoint {}: {}", config.endpoint, e)))?;

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            config
                .user_agent
                .parse()
                .map_err(|_| ClientError::Config("user agent is not a valid header".to_string()))?,
        );

        let http = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(ClientError::Http)?;

        Ok(Self { config, http })
    }

    /// Create with endpoint URL and access key
    pub fn with_endpoint(endpoint: &str, api_key: &str) -> Result<Self> {
        Self::new(Config::new(endpoint).with_api_key(api_key))
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    // ==================== Connectivity ====================

    /// Verify the server is reachable and healthy
    #[instrument(skip(self))]
    pub async fn check_connection(&self) -> Result<()> {
        let response = self.get("/health", &[]).await?;
        let health: Health = decode(response).await?;
        if health.status != "UP" {
            return Err(ClientError::Unhealthy(health.status));
        }
        Ok(())
    }

    // ==================== Projects ====================

    /// List every project, following pagination
    #[instrument(skip(self))]
    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        let mut projects = Vec::new();
        let mut page = 1u32;

        loop {
            let query = [
                ("page", page.to_string()),
                ("page_size", self.config.page_size.to_string()),
            ];
            let response = self.get("/api/projects", &query).await?;
            let body: ProjectPage = decode(response).await?;

            let last = body.next.is_none() || body.results.is_empty();
            projects.extend(body.results);
            if last {
                break;
            }
            page += 1;
        }

        debug!("Listed {} projects", projects.len());
        Ok(projects)
    }

    /// Get one project by ID
    #[instrument(skip(self))]
    pub async fn get_project(&self, id: u64) -> Result<Project> {
        let path = format!("/api/projects/{}/", id);
        match self.get(&path, &[]).await {
            Ok(response) => decode(response).await,
            Err(e) if e.is_not_found() => Err(ClientError::ProjectNotFound(id)),
            Err(e) => Err(e),
        }
    }

    // ==================== Tasks ====================

    /// List every task of a project, following pagination
    #[instrument(skip(self))]
    pub async fn list_tasks(&self, project_id: u64) -> Result<Vec<Task>> {
        let mut tasks = Vec::new();
        let mut page = 1u32;

        loop {
            let query = [
                ("project", project_id.to_string()),
                ("page", page.to_string()),
                ("page_size", self.config.page_size.to_string()),
            ];
            let response = match self.get("/api/tasks", &query).await {
                Ok(response) => response,
                // Older servers answer past-the-end pages with 404
                Err(e) if page > 1 && e.is_not_found() => break,
                Err(e) => return Err(e),
            };
            let body: TaskPage = decode(response).await?;

            if body.tasks.is_empty() {
                break;
            }
            let short_page = (body.tasks.len() as u64) < u64::from(self.config.page_size);
            tasks.extend(body.tasks);
            let done = match body.total {
                Some(total) => tasks.len() as u64 >= total,
                None => short_page,
            };
            if done {
                break;
            }
            page += 1;
        }

        debug!("Listed {} tasks for project {}", tasks.len(), project_id);
        Ok(tasks)
    }

    /// Export the tasks of a project that carry at least one annotation
    #[instrument(skip(self))]
    pub async fn labeled_tasks(&self, project_id: u64) -> Result<Vec<Task>> {
        let path = format!("/api/projects/{}/export", project_id);
        let query = [
            ("exportType", "JSON".to_string()),
            ("download_all_tasks", "false".to_string()),
        ];
        let response = match self.get(&path, &query).await {
            Ok(response) => response,
            Err(e) if e.is_not_found() => return Err(ClientError::ProjectNotFound(project_id)),
            Err(e) => return Err(e),
        };
        let tasks: Vec<Task> = decode(response).await?;
        Ok(tasks.into_iter().filter(Task::is_labeled).collect())
    }

    // ==================== Helper Methods ====================

    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Response> {
        let url = format!("{}{}", self.config.base_url(), path);

        let mut req = self.http.get(&url);
        if !query.is_empty() {
            req = req.query(query);
        }
        if !self.config.api_key.is_empty() {
            req = req.header(header::AUTHORIZATION, format!("Token {}", self.config.api_key));
        }

        debug!("Sending GET request to {}", url);
        let response = req.send().await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ClientError::from_response(status.as_u16(), &text));
        }

        Ok(response)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let url = response.url().path().to_string();
    let text = response.text().await?;
    serde_json::from_str(&text)
        .map_err(|e| ClientError::InvalidResponse(format!("{}: {}", url, e)))
}
