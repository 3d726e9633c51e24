//! Main user directory client.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response};
use tracing::debug;
use userdir_core::{UserDraft, UserRecord};

use crate::error::{ClientError, Result};
use crate::types::DirectoryConfig;

/// Client for the remote user directory API.
///
/// Wraps the five CRUD verbs against `{base}/users`. Every call is a single
/// request with no retry; a non-success status or a transport failure is
/// returned to the caller unchanged as a [`ClientError`].
///
/// # Example
///
/// ```ignore
/// use userdir_client::{DirectoryClient, DirectoryConfig};
///
/// let client = DirectoryClient::new(DirectoryConfig::default())?;
/// let users = client.list_users().await?;
/// ```
pub struct DirectoryClient {
    http: Client,
    base_url: String,
}

impl DirectoryClient {
    /// Create a new client with the given configuration.
    pub fn new(config: DirectoryConfig) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("user-directory/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self { http, base_url })
    }

    /// Get the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full set of user records.
    pub async fn list_users(&self) -> Result<Vec<UserRecord>> {
        let url = format!("{}/users", self.base_url);
        debug!(url = %url, "Listing users");

        let response = self.execute(self.http.get(&url)).await?;
        let status = response.status();

        if status.is_success() {
            let users: Vec<UserRecord> = response.json().await.map_err(|e| {
                ClientError::Parse(format!("Failed to parse user list: {}", e))
            })?;

            debug!(count = users.len(), "Fetched user list");
            Ok(users)
        } else {
            Err(Self::status_error(response).await)
        }
    }

    /// Fetch a single user by identifier.
    pub async fn get_user(&self, id: &str) -> Result<UserRecord> {
        let url = format!("{}/users/{}", self.base_url, id);
        debug!(url = %url, user_id = %id, "Fetching user");

        let response = self.execute(self.http.get(&url)).await?;
        let status = response.status();

        if status.is_success() {
            response.json().await.map_err(|e| {
                ClientError::Parse(format!("Failed to parse user response: {}", e))
            })
        } else if status.as_u16() == 404 {
            Err(ClientError::NotFound(id.to_string()))
        } else {
            Err(Self::status_error(response).await)
        }
    }

    /// Create a user and return the server-assigned record.
    pub async fn create_user(&self, draft: &UserDraft) -> Result<UserRecord> {
        let url = format!("{}/users", self.base_url);
        debug!(url = %url, "Creating user");

        let response = self.execute(self.http.post(&url).json(draft)).await?;
        let status = response.status();

        if status.is_success() {
            let user: UserRecord = response.json().await.map_err(|e| {
                ClientError::Parse(format!("Failed to parse created user: {}", e))
            })?;

            debug!(user_id = %user.id, "User created");
            Ok(user)
        } else {
            Err(Self::status_error(response).await)
        }
    }

    /// Replace a user's fields and return the record as stored by the server.
    ///
    /// The returned record is the server's response, never a locally
    /// reconstructed one.
    pub async fn update_user(&self, id: &str, draft: &UserDraft) -> Result<UserRecord> {
        let url = format!("{}/users/{}", self.base_url, id);
        debug!(url = %url, user_id = %id, "Updating user");

        let response = self.execute(self.http.put(&url).json(draft)).await?;
        let status = response.status();

        if status.is_success() {
            let user: UserRecord = response.json().await.map_err(|e| {
                ClientError::Parse(format!("Failed to parse updated user: {}", e))
            })?;

            debug!(user_id = %user.id, "User updated");
            Ok(user)
        } else if status.as_u16() == 404 {
            Err(ClientError::NotFound(id.to_string()))
        } else {
            Err(Self::status_error(response).await)
        }
    }

    /// Delete a user by identifier.
    pub async fn delete_user(&self, id: &str) -> Result<()> {
        let url = format!("{}/users/{}", self.base_url, id);
        debug!(url = %url, user_id = %id, "Deleting user");

        let response = self.execute(self.http.delete(&url)).await?;
        let status = response.status();

        if status.is_success() {
            debug!(user_id = %id, "User deleted");
            Ok(())
        } else if status.as_u16() == 404 {
            Err(ClientError::NotFound(id.to_string()))
        } else {
            Err(Self::status_error(response).await)
        }
    }

    /// Send a request, mapping connect/timeout failures to `Unreachable`.
    async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        request.send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                ClientError::Unreachable(e.to_string())
            } else {
                ClientError::Request(e)
            }
        })
    }

    /// Build the error for a non-success, non-404 response.
    async fn status_error(response: Response) -> ClientError {
        let status = response.status();
        let message = response.text().await.unwrap_or_default();
        ClientError::Server {
            status: status.as_u16(),
            message,
        }
    }
}
