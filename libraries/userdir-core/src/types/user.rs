/// User domain types
use std::cmp::Reverse;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user as stored by the remote directory service.
///
/// `id` is opaque and server-assigned. `created_at` is set once at creation
/// and kept verbatim afterwards; updates must echo it rather than regenerate
/// it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Server-assigned opaque identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Contact email address
    pub email: String,

    /// Mobile number, ten digits
    pub mobile: String,

    /// Creation timestamp (ISO-8601 string)
    pub created_at: String,
}

impl UserRecord {
    /// Parse `created_at` into a comparable instant.
    ///
    /// Accepts RFC 3339, a bare `YYYY-MM-DDTHH:MM:SS`, or a bare
    /// `YYYY-MM-DD`. Returns `None` for anything else; callers decide how
    /// unparseable records order (see [`sort_by_recency`]).
    #[must_use]
    pub fn recency_key(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }
}

/// Payload for creating or replacing a user.
///
/// The identifier is never part of a request body; the server assigns it.
/// For updates, `created_at` carries the original record's value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    /// Display name
    pub name: String,

    /// Contact email address
    pub email: String,

    /// Mobile number, ten digits
    pub mobile: String,

    /// Creation timestamp (ISO-8601 string)
    pub created_at: String,
}

/// Sort records newest-first by `created_at`.
///
/// The sort is stable: records with equal timestamps keep their relative
/// order. Records whose timestamp cannot be parsed sort after all dated
/// ones, with their own relative order preserved.
pub fn sort_by_recency(records: &mut [UserRecord]) {
    records.sort_by_cached_key(|record| Reverse(record.recency_key()));
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
