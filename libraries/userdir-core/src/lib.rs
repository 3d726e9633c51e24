//! User Directory Core
//!
//! Domain types and pure form logic shared by the directory client and the
//! directory view.
//!
//! This crate defines:
//! - **Domain Types**: [`UserRecord`], [`UserDraft`]
//! - **Ordering**: [`sort_by_recency`], the invariant-restoring sort applied
//!   after every load and mutation
//! - **Form Logic**: [`UserForm`] and its pure [`UserForm::validate`]
//!
//! # Example
//!
//! ```rust
//! use userdir_core::{sort_by_recency, UserForm, UserRecord};
//!
//! let mut form = UserForm::new();
//! form.name = "Ann".to_string();
//! form.email = "ann@example.com".to_string();
//! form.mobile = "5551234567".to_string();
//! assert!(form.validate().is_empty());
//!
//! let mut users: Vec<UserRecord> = Vec::new();
//! sort_by_recency(&mut users);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod form;
pub mod types;

// Re-export commonly used types
pub use form::{UserForm, Violation};
pub use types::{sort_by_recency, UserDraft, UserRecord};
