//! User Directory View
//!
//! The stateful component coordinating form input and list display for the
//! user directory. It owns a transient, non-authoritative copy of the user
//! list; the remote service is the sole source of truth, and the local copy
//! is patched only from server responses.
//!
//! The view is generic over [`userdir_client::UserDirectory`], so it runs
//! against the production HTTP client or a test double alike.
//!
//! # Example
//!
//! ```ignore
//! use userdir_client::{DirectoryClient, DirectoryConfig};
//! use userdir_view::DirectoryView;
//!
//! let client = DirectoryClient::new(DirectoryConfig::default())?;
//! let mut view = DirectoryView::new(client);
//!
//! view.initialize().await?;
//! view.open_create();
//! view.form_mut().name = "Ann".to_string();
//! view.form_mut().email = "ann@example.com".to_string();
//! view.form_mut().mobile = "5551234567".to_string();
//! let outcome = view.submit().await?;
//! ```

mod error;
mod state;
mod view;

// Public exports
pub use error::{Result, ViewError};
pub use state::{Modal, SubmitOutcome};
pub use view::DirectoryView;
