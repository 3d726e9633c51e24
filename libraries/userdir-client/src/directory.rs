//! Service seam for the user directory.

use async_trait::async_trait;
use userdir_core::{UserDraft, UserRecord};

use crate::client::DirectoryClient;
use crate::error::Result;

/// The five CRUD operations of the user directory service.
///
/// [`DirectoryClient`] is the production implementation; consumers that
/// orchestrate directory state (the view layer, tests) depend on this trait
/// rather than on the HTTP client directly.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Fetch the full set of user records.
    async fn list_users(&self) -> Result<Vec<UserRecord>>;

    /// Fetch a single user by identifier.
    async fn get_user(&self, id: &str) -> Result<UserRecord>;

    /// Create a user and return the server-assigned record.
    async fn create_user(&self, draft: &UserDraft) -> Result<UserRecord>;

    /// Replace a user's fields and return the server's record.
    async fn update_user(&self, id: &str, draft: &UserDraft) -> Result<UserRecord>;

    /// Delete a user by identifier.
    async fn delete_user(&self, id: &str) -> Result<()>;
}

#[async_trait]
impl UserDirectory for DirectoryClient {
    async fn list_users(&self) -> Result<Vec<UserRecord>> {
        DirectoryClient::list_users(self).await
    }

    async fn get_user(&self, id: &str) -> Result<UserRecord> {
        DirectoryClient::get_user(self, id).await
    }

    async fn create_user(&self, draft: &UserDraft) -> Result<UserRecord> {
        DirectoryClient::create_user(self, draft).await
    }

    async fn update_user(&self, id: &str, draft: &UserDraft) -> Result<UserRecord> {
        DirectoryClient::update_user(self, id, draft).await
    }

    async fn delete_user(&self, id: &str) -> Result<()> {
        DirectoryClient::delete_user(self, id).await
    }
}
