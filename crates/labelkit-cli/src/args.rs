//! Command-line arguments

use crate::config::{AppConfig, StorageConfig, DEFAULT_REGION};
use crate::dispatch::Actions;
use clap::{error::ErrorKind, CommandFactory, Parser};

#[derive(Parser, Debug)]
#[command(name = "labelkit")]
#[command(about = "Data Labeling CLI")]
#[command(version)]
pub struct Args {
    /// Set the CORS configuration on the bucket
    #[arg(short, long)]
    pub cors: bool,

    /// View the metadata of the bucket
    #[arg(short, long)]
    pub metadata: bool,

    /// List projects in Label Studio
    #[arg(short, long)]
    pub projects: bool,

    /// View tasks from a project
    #[arg(short, long)]
    pub tasks: bool,

    /// Label Studio API key
    #[arg(short, long, default_value = "")]
    pub key: String,

    /// Label Studio URL
    #[arg(long, env = "LABEL_STUDIO_URL")]
    pub label_studio_url: String,

    /// Bucket to configure and inspect
    #[arg(long, env = "AWS_S3_BUCKET_NAME")]
    pub bucket: String,

    /// Storage access key ID
    #[arg(long, env = "AWS_ACCESS_KEY_ID", hide_env_values = true)]
    pub access_key_id: String,

    /// Storage secret access key
    #[arg(long, env = "AWS_SECRET_ACCESS_KEY", hide_env_values = true)]
    pub secret_access_key: String,

    /// Storage region
    #[arg(long, default_value = DEFAULT_REGION, env = "AWS_REGION")]
    pub region: String,

    /// S3-compatible endpoint URL
    #[arg(long, env = "AWS_ENDPOINT_URL")]
    pub endpoint_url: Option<String>,

    /// Enable debug logging
    #[arg(short, long, env = "LABELKIT_DEBUG")]
    pub debug: bool,
}

impl Args {
    /// The actions selected by the flags
    pub fn actions(&self) -> Actions {
        Actions {
            cors: self.cors,
            metadata: self.metadata,
            projects: self.projects,
            tasks: self.tasks,
        }
    }

    /// Reject flag combinations clap cannot express
    pub fn validate(&self) -> Result<(), clap::Error> {
        if self.actions().needs_labeling() && self.key.is_empty() {
            return Err(Self::command().error(
                ErrorKind::MissingRequiredArgument,
                "-k argument is required for API access to Label Studio",
            ));
        }
        Ok(())
    }

    /// Build the application configuration
    pub fn into_config(self) -> AppConfig {
        AppConfig {
            label_studio_url: self.label_studio_url,
            label_studio_key: self.key,
            storage: StorageConfig {
                bucket: self.bucket,
                access_key_id: self.access_key_id,
                secret_access_key: self.secret_access_key,
                region: self.region,
                endpoint_url: self.endpoint_url,
            },
        }
    }
}
