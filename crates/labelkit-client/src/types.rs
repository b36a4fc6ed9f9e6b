//! Common types for the client

use serde::{Deserialize, Serialize};

/// A Label Studio project
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Project {
    /// Project ID
    pub id: u64,
    /// Project title
    #[serde(default)]
    pub title: String,
    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,
}

impl std::fmt::Display for Project {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<Project id={} title={:?}>", self.id, self.title)
    }
}

/// A task and its annotations
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Task {
    /// Task ID
    pub id: u64,
    /// Raw task data
    #[serde(default)]
    pub data: serde_json::Value,
    /// Raw annotation payloads
    #[serde(default)]
    pub annotations: Vec<serde_json::Value>,
}

impl Task {
    /// Whether the task has at least one annotation
    pub fn is_labeled(&self) -> bool {
        !self.annotations.is_empty()
    }
}

/// One page of the project listing
#[derive(Clone, Debug, Deserialize)]
pub struct ProjectPage {
    /// URL of the next page, if any
    #[serde(default)]
    pub next: Option<String>,
    /// Projects on this page
    #[serde(default)]
    pub results: Vec<Project>,
}

/// One page of the task listing
#[derive(Clone, Debug, Deserialize)]
pub struct TaskPage {
    /// Tasks on this page
    #[serde(default)]
    pub tasks: Vec<Task>,
    /// Total number of tasks in the project, when the server reports it
    #[serde(default)]
    pub total: Option<u64>,
}

/// Health check response
#[derive(Clone, Debug, Deserialize)]
pub struct Health {
    /// `UP` when the server is ready
    pub status: String,
}
