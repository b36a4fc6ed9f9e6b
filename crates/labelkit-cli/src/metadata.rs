//! Bucket metadata report

use crate::error::Result;
use crate::storage::{BucketStore, CorsRule};
use std::fmt;
use std::io::Write;
use tracing::debug;

/// Versioning status reported when the bucket never had versioning configured
pub const DEFAULT_VERSIONING_STATUS: &str = "Disabled";

/// Placeholder for absent values
const NONE: &str = "None";

/// Everything the report collects about a bucket
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BucketMetadata {
    pub name: String,
    pub location: Option<String>,
    pub policy: Option<String>,
    pub cors: Option<Vec<CorsRule>>,
    pub versioning_status: String,
    pub creation_date: Option<String>,
}

impl BucketMetadata {
    fn cors_json(&self) -> Option<String> {
        self.cors
            .as_ref()
            .map(|rules| serde_json::to_string(rules).unwrap_or_else(|_| format!("{:?}", rules)))
    }
}

impl fmt::Display for BucketMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Location: {}", self.location.as_deref().unwrap_or(NONE))?;
        writeln!(f, "Policy: {}", self.policy.as_deref().unwrap_or(NONE))?;
        writeln!(f, "CORS: {}", self.cors_json().as_deref().unwrap_or(NONE))?;
        writeln!(f, "Versioning Status: {}", self.versioning_status)?;
        write!(f, "Creation Date: {}", self.creation_date.as_deref().unwrap_or(NONE))
    }
}

/// Print a bucket's metadata.
///
/// Values are printed as they arrive, then summarized. A missing policy or
/// CORS configuration is reported as `None`; any other failure stops the
/// report and is returned, leaving the lines already written in place.
pub async fn view_bucket_metadata<W: Write>(
    store: &dyn BucketStore,
    bucket: &str,
    out: &mut W,
) -> Result<BucketMetadata> {
    writeln!(out, "view_bucket_metadata()")?;

    let head = store.head_bucket(bucket).await?;
    debug!(bucket, "bucket exists");

    let location = store.bucket_location(bucket).await?;
    writeln!(out, "Location: {}", location.as_deref().unwrap_or(NONE))?;

    let policy = store.bucket_policy(bucket).await?;
    if let Some(policy) = &policy {
        writeln!(out, "Policy: {}", policy)?;
    }

    let cors = store.bucket_cors(bucket).await?;
    if let Some(rules) = &cors {
        writeln!(out, "Cors: {}", serde_json::to_string(rules)?)?;
    }

    let versioning_status = store
        .bucket_versioning(bucket)
        .await?
        .unwrap_or_else(|| DEFAULT_VERSIONING_STATUS.to_string());
    writeln!(out, "Versioning Status: {}", versioning_status)?;

    let metadata = BucketMetadata {
        name: bucket.to_string(),
        location,
        policy,
        cors,
        versioning_status,
        creation_date: head.date,
    };
    writeln!(out, "{}", metadata)?;

    Ok(metadata)
}
