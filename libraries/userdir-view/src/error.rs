use thiserror::Error;

use userdir_client::ClientError;

/// Errors that can occur while driving the directory view.
#[derive(Error, Debug)]
pub enum ViewError {
    /// A directory service call failed; the view state is unchanged.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Submit was called with no editor open.
    #[error("no editor is open")]
    ModalClosed,
}

/// Result type for view operations.
pub type Result<T> = std::result::Result<T, ViewError>;
