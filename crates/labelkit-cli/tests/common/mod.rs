//! In-memory services that record every call

#![allow(dead_code)]

use async_trait::async_trait;
use labelkit_cli::storage::{self, BucketHead, BucketStore, CorsRule};
use labelkit_cli::{AppConfig, LabelingService, StorageCall, StorageConfig, StorageError};
use labelkit_client::{ClientError, Project, Task};
use parking_lot::Mutex;
use serde_json::json;

pub const BUCKET: &str = "labeling-images";
pub const DATE: &str = "Sun, 18 Oct 2026 09:30:00 GMT";

pub fn config(key: &str) -> AppConfig {
    AppConfig {
        label_studio_url: "http://studio.local:8080".to_string(),
        label_studio_key: key.to_string(),
        storage: StorageConfig {
            bucket: BUCKET.to_string(),
            access_key_id: "AKIDEXAMPLE".to_string(),
            secret_access_key: "secret".to_string(),
            region: "us-east-1".to_string(),
            endpoint_url: None,
        },
    }
}

pub fn output(buf: &[u8]) -> String {
    String::from_utf8_lossy(buf).into_owned()
}

/// Bucket with configurable attributes
#[derive(Default)]
pub struct FakeBucketStore {
    pub location: Option<String>,
    pub policy: Option<String>,
    pub cors: Option<Vec<CorsRule>>,
    pub versioning: Option<String>,
    pub fail_on: Option<StorageCall>,
    pub calls: Mutex<Vec<StorageCall>>,
    pub submitted_cors: Mutex<Vec<Vec<CorsRule>>>,
}

impl FakeBucketStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(call: StorageCall) -> Self {
        Self {
            fail_on: Some(call),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<StorageCall> {
        self.calls.lock().clone()
    }

    fn record(&self, call: StorageCall) -> storage::Result<()> {
        self.calls.lock().push(call);
        if self.fail_on == Some(call) {
            return Err(StorageError::new(call, Some("AccessDenied"), "Access Denied"));
        }
        Ok(())
    }
}

#[async_trait]
impl BucketStore for FakeBucketStore {
    async fn put_bucket_cors(&self, _bucket: &str, rules: &[CorsRule]) -> storage::Result<()> {
        self.record(StorageCall::PutBucketCors)?;
        self.submitted_cors.lock().push(rules.to_vec());
        Ok(())
    }

    async fn head_bucket(&self, _bucket: &str) -> storage::Result<BucketHead> {
        self.record(StorageCall::HeadBucket)?;
        Ok(BucketHead {
            date: Some(DATE.to_string()),
        })
    }

    async fn bucket_location(&self, _bucket: &str) -> storage::Result<Option<String>> {
        self.record(StorageCall::GetBucketLocation)?;
        Ok(self.location.clone())
    }

    async fn bucket_policy(&self, _bucket: &str) -> storage::Result<Option<String>> {
        self.record(StorageCall::GetBucketPolicy)?;
        Ok(self.policy.clone())
    }

    async fn bucket_cors(&self, _bucket: &str) -> storage::Result<Option<Vec<CorsRule>>> {
        self.record(StorageCall::GetBucketCors)?;
        Ok(self.cors.clone())
    }

    async fn bucket_versioning(&self, _bucket: &str) -> storage::Result<Option<String>> {
        self.record(StorageCall::GetBucketVersioning)?;
        Ok(self.versioning.clone())
    }
}

/// Labeling service over a fixed set of projects
#[derive(Default)]
pub struct FakeLabeling {
    pub projects: Vec<Project>,
    pub tasks: Vec<Task>,
    pub calls: Mutex<Vec<&'static str>>,
}

impl FakeLabeling {
    pub fn with_projects(ids: &[u64]) -> Self {
        Self {
            projects: ids.iter().map(|id| project(*id)).collect(),
            tasks: vec![task(1, true), task(2, false), task(3, true)],
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().clone()
    }
}

pub fn project(id: u64) -> Project {
    Project {
        id,
        title: format!("Project {}", id),
        description: Some(format!("description {}", id)),
    }
}

pub fn task(id: u64, labeled: bool) -> Task {
    let annotations = if labeled {
        vec![json!({"id": id * 10, "result": [{"value": {"choices": ["cat"]}}]})]
    } else {
        Vec::new()
    };
    Task {
        id,
        data: json!({"image": format!("s3://{}/{}.png", BUCKET, id)}),
        annotations,
    }
}

#[async_trait]
impl LabelingService for FakeLabeling {
    async fn check_connection(&self) -> labelkit_client::Result<()> {
        self.calls.lock().push("check_connection");
        Ok(())
    }

    async fn list_projects(&self) -> labelkit_client::Result<Vec<Project>> {
        self.calls.lock().push("list_projects");
        Ok(self.projects.clone())
    }

    async fn get_project(&self, id: u64) -> labelkit_client::Result<Project> {
        self.calls.lock().push("get_project");
        self.projects
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(ClientError::ProjectNotFound(id))
    }

    async fn list_tasks(&self, _project_id: u64) -> labelkit_client::Result<Vec<Task>> {
        self.calls.lock().push("list_tasks");
        Ok(self.tasks.clone())
    }

    async fn labeled_tasks(&self, _project_id: u64) -> labelkit_client::Result<Vec<Task>> {
        self.calls.lock().push("labeled_tasks");
        Ok(self.tasks.iter().filter(|t| t.is_labeled()).cloned().collect())
    }
}
