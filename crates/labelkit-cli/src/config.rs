//! Process configuration, read once at startup

use labelkit_client::Config as StudioConfig;

/// Default storage region
pub const DEFAULT_REGION: &str = "us-east-1";

/// Storage service settings
#[derive(Clone)]
pub struct StorageConfig {
    /// Bucket to configure and inspect
    pub bucket: String,
    /// Access key ID
    pub access_key_id: String,
    /// Secret access key
    pub secret_access_key: String,
    /// Region
    pub region: String,
    /// S3-compatible endpoint override
    pub endpoint_url: Option<String>,
}

impl std::fmt::Debug for StorageConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageConfig")
            .field("bucket", &self.bucket)
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field("region", &self.region)
            .field("endpoint_url", &self.endpoint_url)
            .finish()
    }
}

/// Application configuration
#[derive(Clone)]
pub struct AppConfig {
    /// Label Studio base URL
    pub label_studio_url: String,
    /// Label Studio access key, empty when not given
    pub label_studio_key: String,
    /// Storage settings
    pub storage: StorageConfig,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("label_studio_url", &self.label_studio_url)
            .field("label_studio_key", &"<redacted>")
            .field("storage", &self.storage)
            .finish()
    }
}

impl AppConfig {
    /// Whether an access key was supplied
    pub fn has_label_studio_key(&self) -> bool {
        !self.label_studio_key.is_empty()
    }

    /// Client configuration for the labeling service
    pub fn studio_client_config(&self) -> StudioConfig {
        StudioConfig::new(&self.label_studio_url).with_api_key(&self.label_studio_key)
    }
}
