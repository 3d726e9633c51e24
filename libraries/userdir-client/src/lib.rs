//! User Directory Client
//!
//! HTTP client library for the remote user directory API.
//!
//! Each operation is a thin request/response mapping over one of the five
//! CRUD verbs. There is no retry, no caching, and no local transformation
//! of payloads; failures surface as typed [`ClientError`] values.
//!
//! # Example
//!
//! ```ignore
//! use userdir_client::{DirectoryClient, DirectoryConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DirectoryClient::new(DirectoryConfig::default())?;
//!
//!     let users = client.list_users().await?;
//!     println!("{} users in the directory", users.len());
//!
//!     Ok(())
//! }
//! ```

mod client;
mod directory;
mod error;
mod types;

// Re-export main types
pub use client::DirectoryClient;
pub use directory::UserDirectory;
pub use error::{ClientError, Result};
pub use types::{DirectoryConfig, DEFAULT_BASE_URL};
