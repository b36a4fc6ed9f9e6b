//! # labelkit
//!
//! Administrative CLI for a labeling setup.
//!
//! This crate provides:
//! - **CORS setter**: replaces a bucket's CORS configuration with a fixed policy
//! - **Metadata viewer**: reports location, policy, CORS and versioning of a bucket
//! - **Project lister**: lists Label Studio projects
//! - **Task lister**: reports task counts and annotations of one project
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          Args → AppConfig               │
//! ├─────────────────────────────────────────┤
//! │              Dispatcher                 │
//! │   cors → metadata → projects → tasks    │
//! ├────────────────────┬────────────────────┤
//! │    BucketStore     │  LabelingService   │
//! ├────────────────────┼────────────────────┤
//! │   S3BucketStore    │   StudioClient     │
//! │   (aws-sdk-s3)     │ (labelkit-client)  │
//! └────────────────────┴────────────────────┘
//! ```

pub mod args;
pub mod config;
pub mod cors;
pub mod dispatch;
pub mod error;
pub mod labeling;
pub mod metadata;
pub mod projects;
pub mod storage;
pub mod tasks;

pub use args::Args;
pub use config::{AppConfig, StorageConfig};
pub use dispatch::{Actions, Dispatcher};
pub use error::{CliError, LabelingCall, Result, StorageCall, StorageError};
pub use labeling::{LabelingService, ProjectSelector};
pub use storage::{BucketHead, BucketStore, CorsRule, S3BucketStore};
