//! Object storage access
//!
//! [`BucketStore`] is the set of bucket calls the tool makes. [`S3BucketStore`]
//! implements it on top of the AWS SDK.

use crate::config::StorageConfig;
use crate::error::{StorageCall, StorageError};
use async_trait::async_trait;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_credential_types::Credentials;
use aws_sdk_s3::{
    config::{
        interceptors::BeforeDeserializationInterceptorContextRef, ConfigBag, Intercept, Region,
        RuntimeComponents, SharedCredentialsProvider,
    },
    error::{BoxError, DisplayErrorContext, ProvideErrorMetadata, SdkError},
    types::{CorsConfiguration, CorsRule as SdkCorsRule},
    Client,
};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Error code returned when a bucket has no policy
pub const NO_SUCH_BUCKET_POLICY: &str = "NoSuchBucketPolicy";

/// Error code returned when a bucket has no CORS configuration
pub const NO_SUCH_CORS_CONFIGURATION: &str = "NoSuchCORSConfiguration";

/// One CORS rule, serialized the way S3 names its fields
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CorsRule {
    /// Headers allowed in preflight requests
    pub allowed_headers: Vec<String>,
    /// HTTP methods allowed
    pub allowed_methods: Vec<String>,
    /// Origins allowed
    pub allowed_origins: Vec<String>,
    /// Response headers exposed to the browser
    pub expose_headers: Vec<String>,
    /// Preflight cache lifetime
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_age_seconds: Option<i32>,
}

/// Result of the existence check
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BucketHead {
    /// `date` header of the response
    pub date: Option<String>,
}

/// Bucket calls used by the CORS setter and the metadata viewer
#[async_trait]
pub trait BucketStore: Send + Sync {
    /// Replace the bucket's CORS configuration
    async fn put_bucket_cors(&self, bucket: &str, rules: &[CorsRule]) -> Result<()>;

    /// Check that the bucket exists
    async fn head_bucket(&self, bucket: &str) -> Result<BucketHead>;

    /// Location constraint, `None` for the default region
    async fn bucket_location(&self, bucket: &str) -> Result<Option<String>>;

    /// Bucket policy document, `None` when no policy is set
    async fn bucket_policy(&self, bucket: &str) -> Result<Option<String>>;

    /// CORS rules, `None` when no configuration is set
    async fn bucket_cors(&self, bucket: &str) -> Result<Option<Vec<CorsRule>>>;

    /// Versioning status, `None` when versioning was never configured
    async fn bucket_versioning(&self, bucket: &str) -> Result<Option<String>>;
}

/// [`BucketStore`] backed by the AWS S3 SDK
#[derive(Clone, Debug)]
pub struct S3BucketStore {
    client: Client,
}

impl S3BucketStore {
    /// Build a client from static credentials
    pub fn new(config: &StorageConfig) -> Self {
        let credentials = Credentials::new(
            config.access_key_id.clone(),
            config.secret_access_key.clone(),
            None,
            None,
            "labelkit_provider",
        );

        let mut builder = SdkConfig::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .credentials_provider(SharedCredentialsProvider::new(credentials));
        if let Some(endpoint) = &config.endpoint_url {
            builder = builder.endpoint_url(endpoint.clone());
        }
        let sdk_config = builder.build();

        // Custom endpoints use path-style addressing
        let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(config.endpoint_url.is_some())
            .build();

        Self {
            client: Client::from_conf(s3_config),
        }
    }
}

#[async_trait]
impl BucketStore for S3BucketStore {
    #[instrument(skip(self, rules))]
    async fn put_bucket_cors(&self, bucket: &str, rules: &[CorsRule]) -> Result<()> {
        let call = StorageCall::PutBucketCors;
        let sdk_rules = rules
            .iter()
            .map(to_sdk_rule)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| StorageError::new(call, None, e.to_string()))?;
        let configuration = CorsConfiguration::builder()
            .set_cors_rules(Some(sdk_rules))
            .build()
            .map_err(|e| StorageError::new(call, None, e.to_string()))?;

        self.client
            .put_bucket_cors()
            .bucket(bucket)
            .cors_configuration(configuration)
            .send()
            .await
            .map_err(|e| sdk_error(call, e))?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn head_bucket(&self, bucket: &str) -> Result<BucketHead> {
        let date = ResponseDate::default();
        self.client
            .head_bucket()
            .bucket(bucket)
            .customize()
            .interceptor(date.clone())
            .send()
            .await
            .map_err(|e| sdk_error(StorageCall::HeadBucket, e))?;

        Ok(BucketHead { date: date.take() })
    }

    #[instrument(skip(self))]
    async fn bucket_location(&self, bucket: &str) -> Result<Option<String>> {
        let output = self
            .client
            .get_bucket_location()
            .bucket(bucket)
            .send()
            .await
            .map_err(|e| sdk_error(StorageCall::GetBucketLocation, e))?;

        Ok(output
            .location_constraint()
            .map(|c| c.as_str().to_string())
            .filter(|c| !c.is_empty()))
    }

    #[instrument(skip(self))]
    async fn bucket_policy(&self, bucket: &str) -> Result<Option<String>> {
        match self.client.get_bucket_policy().bucket(bucket).send().await {
            Ok(output) => Ok(output.policy().map(str::to_string)),
            Err(e) if service_code(&e) == Some(NO_SUCH_BUCKET_POLICY) => {
                debug!("Bucket {} has no policy", bucket);
                Ok(None)
            }
            Err(e) => Err(sdk_error(StorageCall::GetBucketPolicy, e)),
        }
    }

    #[instrument(skip(self))]
    async fn bucket_cors(&self, bucket: &str) -> Result<Option<Vec<CorsRule>>> {
        match self.client.get_bucket_cors().bucket(bucket).send().await {
            Ok(output) => Ok(Some(output.cors_rules().iter().map(from_sdk_rule).collect())),
            Err(e) if service_code(&e) == Some(NO_SUCH_CORS_CONFIGURATION) => {
                debug!("Bucket {} has no CORS configuration", bucket);
                Ok(None)
            }
            Err(e) => Err(sdk_error(StorageCall::GetBucketCors, e)),
        }
    }

    #[instrument(skip(self))]
    async fn bucket_versioning(&self, bucket: &str) -> Result<Option<String>> {
        let output = self
            .client
            .get_bucket_versioning()
            .bucket(bucket)
            .send()
            .await
            .map_err(|e| sdk_error(StorageCall::GetBucketVersioning, e))?;

        Ok(output.status().map(|s| s.as_str().to_string()))
    }
}

/// Captures the `date` header of a response
#[derive(Clone, Debug, Default)]
struct ResponseDate(Arc<Mutex<Option<String>>>);

impl ResponseDate {
    fn take(&self) -> Option<String> {
        self.0.lock().take()
    }
}

impl Intercept for ResponseDate {
    fn name(&self) -> &'static str {
        "ResponseDate"
    }

    fn read_after_transmit(
        &self,
        context: &BeforeDeserializationInterceptorContextRef<'_>,
        _runtime_components: &RuntimeComponents,
        _cfg: &mut ConfigBag,
    ) -> std::result::Result<(), BoxError> {
        if let Some(date) = context.response().headers().get("date") {
            *self.0.lock() = Some(date.to_string());
        }
        Ok(())
    }
}

fn service_code<E, R>(err: &SdkError<E, R>) -> Option<&str>
where
    E: ProvideErrorMetadata,
{
    err.as_service_error().and_then(|e| e.code())
}

fn sdk_error<E, R>(call: StorageCall, err: SdkError<E, R>) -> StorageError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    let code = service_code(&err).map(str::to_string);
    StorageError {
        call,
        code,
        message: DisplayErrorContext(&err).to_string(),
    }
}

fn to_sdk_rule(rule: &CorsRule) -> std::result::Result<SdkCorsRule, aws_sdk_s3::error::BuildError> {
    SdkCorsRule::builder()
        .set_allowed_headers(Some(rule.allowed_headers.clone()))
        .set_allowed_methods(Some(rule.allowed_methods.clone()))
        .set_allowed_origins(Some(rule.allowed_origins.clone()))
        .set_expose_headers(Some(rule.expose_headers.clone()))
        .set_max_age_seconds(rule.max_age_seconds)
        .build()
}

fn from_sdk_rule(rule: &SdkCorsRule) -> CorsRule {
    CorsRule {
        allowed_headers: rule.allowed_headers().to_vec(),
        allowed_methods: rule.allowed_methods().to_vec(),
        allowed_origins: rule.allowed_origins().to_vec(),
        expose_headers: rule.expose_headers().to_vec(),
        max_age_seconds: rule.max_age_seconds(),
    }
}
