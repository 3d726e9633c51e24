//! The directory view: modal, form, and list orchestration.

use chrono::{SecondsFormat, Utc};
use tracing::{debug, info};
use userdir_client::UserDirectory;
use userdir_core::{sort_by_recency, UserForm, UserRecord};

use crate::error::{Result, ViewError};
use crate::state::{Modal, SubmitOutcome};

/// Stateful view over a user directory.
///
/// Holds an in-memory, recency-sorted copy of the user list plus the form
/// and editor state. Every mutation goes through the directory service
/// first; the local list is patched from the server's response and then
/// re-sorted. On any service failure the view changes nothing: the modal
/// stays open and the list keeps its previous contents.
///
/// One operation is expected to be in flight at a time. Two concurrent
/// submits are not guarded against and can produce duplicate records.
pub struct DirectoryView<D: UserDirectory> {
    directory: D,
    users: Vec<UserRecord>,
    form: UserForm,
    modal: Modal,
}

impl<D: UserDirectory> DirectoryView<D> {
    /// Create a view over the given directory service.
    ///
    /// The list starts empty; call [`DirectoryView::initialize`] to load it.
    pub fn new(directory: D) -> Self {
        Self {
            directory,
            users: Vec::new(),
            form: UserForm::new(),
            modal: Modal::Closed,
        }
    }

    /// Fetch the full list, sort it newest-first, and reset the form.
    ///
    /// Suspends until the fetch resolves. On failure the error propagates
    /// and the view keeps its previous (initially empty) list.
    pub async fn initialize(&mut self) -> Result<()> {
        let mut users = self.directory.list_users().await?;
        sort_by_recency(&mut users);
        self.users = users;
        self.form.clear();

        info!(count = self.users.len(), "Directory view initialized");
        Ok(())
    }

    /// Open the editor in create mode with an empty form.
    pub fn open_create(&mut self) {
        self.form.clear();
        self.modal = Modal::Create;
    }

    /// Open the editor in edit mode, populating the form from `record`.
    ///
    /// Only name, email, and mobile are copied into the form; the
    /// identifier and creation timestamp ride along in the modal state.
    pub fn open_edit(&mut self, record: UserRecord) {
        self.form = UserForm::from_record(&record);
        self.modal = Modal::Edit(record);
    }

    /// Close the editor and reset the form without submitting.
    pub fn close_modal(&mut self) {
        self.modal = Modal::Closed;
        self.form.clear();
    }

    /// Submit the form, dispatching a create or update by editor mode.
    ///
    /// If the form fails validation this returns
    /// [`SubmitOutcome::Rejected`] without dispatching anything. On a
    /// successful create the server's record is prepended; on a successful
    /// update the matching record is replaced by the server's response,
    /// echoing the original creation timestamp in the request. Either way
    /// the modal closes and the list is re-sorted. On a service failure the
    /// error propagates with the modal still open and the list untouched.
    pub async fn submit(&mut self) -> Result<SubmitOutcome> {
        let violations = self.form.validate();

        match self.modal.clone() {
            Modal::Closed => Err(ViewError::ModalClosed),
            _ if !violations.is_empty() => {
                debug!(?violations, "Submit rejected by validation");
                Ok(SubmitOutcome::Rejected(violations))
            }
            Modal::Create => {
                let stamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
                let draft = self.form.to_draft(stamp);

                let created = self.directory.create_user(&draft).await?;
                info!(user_id = %created.id, "User created");

                self.users.insert(0, created.clone());
                self.close_modal();
                self.sort_by_recency();
                Ok(SubmitOutcome::Created(created))
            }
            Modal::Edit(original) => {
                // The creation timestamp is immutable: echo the original's.
                let draft = self.form.to_draft(original.created_at.clone());

                let updated = self.directory.update_user(&original.id, &draft).await?;
                info!(user_id = %updated.id, "User updated");

                if let Some(slot) = self.users.iter_mut().find(|u| u.id == updated.id) {
                    *slot = updated.clone();
                }
                self.close_modal();
                self.sort_by_recency();
                Ok(SubmitOutcome::Updated(updated))
            }
        }
    }

    /// Delete a user, then drop it from the local list and re-sort.
    ///
    /// On a service failure the error propagates and the list is untouched.
    pub async fn remove(&mut self, id: &str) -> Result<()> {
        self.directory.delete_user(id).await?;
        info!(user_id = %id, "User deleted");

        self.users.retain(|u| u.id != id);
        self.sort_by_recency();
        Ok(())
    }

    /// Re-order the list newest-first.
    ///
    /// This runs automatically after load and after every mutation; it is
    /// public as the explicit invariant-restoring step.
    pub fn sort_by_recency(&mut self) {
        sort_by_recency(&mut self.users);
    }

    /// The current, recency-sorted user list.
    #[must_use]
    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    /// The current editor state.
    #[must_use]
    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    /// Whether an editor is currently open.
    #[must_use]
    pub fn is_modal_open(&self) -> bool {
        self.modal.is_open()
    }

    /// Read access to the form fields.
    #[must_use]
    pub fn form(&self) -> &UserForm {
        &self.form
    }

    /// Mutable access to the form fields.
    pub fn form_mut(&mut self) -> &mut UserForm {
        &mut self.form
    }
}
