use userdir_core::{UserRecord, Violation};

/// Editor state of the directory view.
///
/// `Edit` carries the record being edited so the original identifier and
/// creation timestamp are available at submit time; neither is editable
/// through the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// No editor open
    Closed,
    /// Creating a new user
    Create,
    /// Editing an existing user
    Edit(UserRecord),
}

impl Modal {
    /// Whether an editor is currently open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self, Modal::Closed)
    }
}

/// What happened when the form was submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new record was created; carries the server-assigned record.
    Created(UserRecord),
    /// An existing record was replaced; carries the server's record.
    Updated(UserRecord),
    /// The form failed validation and nothing was dispatched.
    Rejected(Vec<Violation>),
}
