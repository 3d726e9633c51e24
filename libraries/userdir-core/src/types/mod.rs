//! Domain types for the user directory.

mod user;

pub use user::{sort_by_recency, UserDraft, UserRecord};
