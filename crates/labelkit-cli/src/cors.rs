//! CORS setter

use crate::error::Result;
use crate::storage::{BucketStore, CorsRule};
use std::io::Write;
use tracing::info;

/// Methods allowed by the bucket policy
pub const ALLOWED_METHODS: [&str; 5] = ["GET", "PUT", "POST", "DELETE", "HEAD"];

/// Response headers exposed to browsers
pub const EXPOSE_HEADERS: [&str; 3] = ["x-amz-server-side-encryption", "x-amz-request-id", "x-amz-id-2"];

/// Preflight cache lifetime in seconds
pub const MAX_AGE_SECONDS: i32 = 3600;

/// The fixed CORS policy: any origin, any header, the five methods above
pub fn cors_policy() -> Vec<CorsRule> {
    vec![CorsRule {
        allowed_headers: vec!["*".to_string()],
        allowed_methods: ALLOWED_METHODS.iter().map(|m| m.to_string()).collect(),
        allowed_origins: vec!["*".to_string()],
        expose_headers: EXPOSE_HEADERS.iter().map(|h| h.to_string()).collect(),
        max_age_seconds: Some(MAX_AGE_SECONDS),
    }]
}

/// Replace the bucket's CORS configuration with [`cors_policy`]
pub async fn set_cors_configuration<W: Write>(
    store: &dyn BucketStore,
    bucket: &str,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "set_cors_configuration()")?;

    store.put_bucket_cors(bucket, &cors_policy()).await?;

    info!(bucket, "CORS configuration replaced");
    writeln!(out, "Set CORS policies for bucket {}", bucket)?;
    Ok(())
}
