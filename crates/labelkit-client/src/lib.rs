//! # labelkit client
//!
//! A small async client for the Label Studio REST API.
//!
//! ## Features
//!
//! - **Token auth**: sends `Authorization: Token <key>` on every request
//! - **Pagination**: project and task listings follow the server's pages
//! - **Typed errors**: HTTP failures map onto [`ClientError`]
//!
//! ## Example
//!
//! ```rust,ignore
//! use labelkit_client::{StudioClient, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = StudioClient::new(
//!         Config::new("http://localhost:8080").with_api_key("your-api-key"),
//!     )?;
//!
//!     client.check_connection().await?;
//!
//!     for project in client.list_projects().await? {
//!         println!("{} {}", project.id, project.title);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod types;

pub use client::StudioClient;
pub use config::Config;
pub use error::{ClientError, Result};
pub use types::*;
