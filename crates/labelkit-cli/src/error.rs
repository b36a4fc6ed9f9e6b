//! Error types, tagged with the remote call that failed

use labelkit_client::ClientError;
use thiserror::Error;

/// Result type alias using `CliError`
pub type Result<T> = std::result::Result<T, CliError>;

/// Storage service calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageCall {
    PutBucketCors,
    HeadBucket,
    GetBucketLocation,
    GetBucketPolicy,
    GetBucketCors,
    GetBucketVersioning,
}

impl StorageCall {
    /// Get the operation name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PutBucketCors => "PutBucketCors",
            Self::HeadBucket => "HeadBucket",
            Self::GetBucketLocation => "GetBucketLocation",
            Self::GetBucketPolicy => "GetBucketPolicy",
            Self::GetBucketCors => "GetBucketCors",
            Self::GetBucketVersioning => "GetBucketVersioning",
        }
    }
}

impl std::fmt::Display for StorageCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Labeling service calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelingCall {
    Connect,
    CheckConnection,
    ListProjects,
    GetProject,
    ListTasks,
    LabeledTasks,
}

impl LabelingCall {
    /// Get the operation name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Connect => "Connect",
            Self::CheckConnection => "CheckConnection",
            Self::ListProjects => "ListProjects",
            Self::GetProject => "GetProject",
            Self::ListTasks => "ListTasks",
            Self::LabeledTasks => "LabeledTasks",
        }
    }
}

impl std::fmt::Display for LabelingCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed storage call
#[derive(Error, Debug)]
#[error("{call} failed: {message}")]
pub struct StorageError {
    /// Which call failed
    pub call: StorageCall,
    /// Service error code, when the service returned one
    pub code: Option<String>,
    /// Human readable cause
    pub message: String,
}

impl StorageError {
    /// Create a storage error
    pub fn new(call: StorageCall, code: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            call,
            code: code.map(str::to_string),
            message: message.into(),
        }
    }
}

/// CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid or missing configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Labeling actions were requested without an access key
    #[error("-k argument is required for API access to Label Studio")]
    MissingKey,

    /// Storage call failed
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Labeling call failed
    #[error("{call} failed: {source}")]
    Labeling {
        call: LabelingCall,
        #[source]
        source: ClientError,
    },

    /// Project selection by position found an empty project list
    #[error("No projects found in the account")]
    NoProjects,

    /// Project selection by ID found nothing
    #[error("Project not found: {0}")]
    ProjectNotFound(u64),

    /// Report rendering error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Output error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Tag a labeling client error with the call that produced it
    pub fn labeling(call: LabelingCall, source: ClientError) -> Self {
        match source {
            ClientError::ProjectNotFound(id) => Self::ProjectNotFound(id),
            source => Self::Labeling { call, source },
        }
    }

    /// The storage call that failed, if any
    pub fn storage_call(&self) -> Option<StorageCall> {
        match self {
            Self::Storage(e) => Some(e.call),
            _ => None,
        }
    }

    /// The labeling call that failed, if any
    pub fn labeling_call(&self) -> Option<LabelingCall> {
        match self {
            Self::Labeling { call, .. } => Some(*call),
            _ => None,
        }
    }
}
