//! Form state and validation for the user editor.
//!
//! The form is a plain value struct; [`UserForm::validate`] is a pure
//! function returning the set of violated constraints. An empty result
//! means the form may be submitted.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::types::{UserDraft, UserRecord};

/// A ten digit mobile number, nothing more.
const MOBILE_PATTERN: &str = "^[0-9]{10}$";

/// RFC-style address shape: dot-atom local part, `@`, dotted domain labels.
const EMAIL_PATTERN: &str = r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$";

fn mobile_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(MOBILE_PATTERN).expect("mobile pattern compiles"))
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

/// A form constraint that did not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Violation {
    /// Name field is empty
    #[error("name is required")]
    NameRequired,

    /// Email field is empty
    #[error("email is required")]
    EmailRequired,

    /// Email field does not look like an address
    #[error("email is not a valid address")]
    EmailInvalid,

    /// Mobile field is empty
    #[error("mobile is required")]
    MobileRequired,

    /// Mobile field is not exactly ten digits
    #[error("mobile must be exactly ten digits")]
    MobileInvalid,
}

/// Editable state of the user form.
///
/// Only the three user-editable fields live here; the identifier and the
/// creation timestamp are carried by the surrounding edit state instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    /// Display name
    pub name: String,

    /// Contact email address
    pub email: String,

    /// Mobile number
    pub mobile: String,
}

impl UserForm {
    /// Create an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate the form from an existing record (name, email, mobile only).
    #[must_use]
    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            mobile: record.mobile.clone(),
        }
    }

    /// Reset all fields to empty.
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.mobile.clear();
    }

    /// Check every constraint and return the ones that failed.
    ///
    /// Empty fields report only their `Required` violation; the pattern
    /// checks apply to non-empty input.
    #[must_use]
    pub fn validate(&self) -> Vec<Violation> {
        let mut violations = Vec::new();

        if self.name.trim().is_empty() {
            violations.push(Violation::NameRequired);
        }

        if self.email.is_empty() {
            violations.push(Violation::EmailRequired);
        } else if !email_regex().is_match(&self.email) {
            violations.push(Violation::EmailInvalid);
        }

        if self.mobile.is_empty() {
            violations.push(Violation::MobileRequired);
        } else if !mobile_regex().is_match(&self.mobile) {
            violations.push(Violation::MobileInvalid);
        }

        violations
    }

    /// Whether the form currently satisfies every constraint.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Combine the form fields with a creation timestamp into a request body.
    #[must_use]
    pub fn to_draft(&self, created_at: impl Into<String>) -> UserDraft {
        UserDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            mobile: self.mobile.clone(),
            created_at: created_at.into(),
        }
    }
}
