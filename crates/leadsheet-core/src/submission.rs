//! Contact payloads and the validated records built from them.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Message returned when a required field is missing or empty.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Name, email, and message are required fields.";

/// Sheet header row, in column order.
pub const HEADERS: [&str; 5] = ["Name", "Email", "Company", "Message", "Date"];

/// Raw contact form payload as sent by the site.
///
/// Every field is optional on the wire; [`ContactRequest::into_submission`]
/// decides what is acceptable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    /// Sender name (required)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Sender email (required, presence only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Sender company
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// Message body (required)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// How required fields are checked for emptiness.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Trim first, then reject empty values. Whitespace-only input is rejected.
    #[default]
    Trimmed,
    /// Reject only absent or zero-length raw values, then trim.
    ///
    /// Whitespace-only input passes and is stored as an empty string.
    Raw,
}

impl ValidationMode {
    /// Mode matching the `validation.trim_before_check` config flag.
    pub fn from_trim_before_check(trim_before_check: bool) -> Self {
        if trim_before_check {
            ValidationMode::Trimmed
        } else {
            ValidationMode::Raw
        }
    }
}

impl ContactRequest {
    /// Builds a request from the four form fields.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        company: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            company: Some(company.into()),
            message: Some(message.into()),
        }
    }

    /// Validates the payload and stamps it with `received_at`.
    ///
    /// Fails with [`Error::Validation`] carrying [`REQUIRED_FIELDS_MESSAGE`]
    /// when `name`, `email`, or `message` is unacceptable under `mode`.
    pub fn into_submission(
        self,
        mode: ValidationMode,
        received_at: DateTime<Utc>,
    ) -> Result<Submission> {
        let name = required(self.name, mode)?;
        let email = required(self.email, mode)?;
        let message = required(self.message, mode)?;
        let company = self
            .company
            .map(|c| c.trim().to_string())
            .unwrap_or_default();

        Ok(Submission {
            name,
            email,
            company,
            message,
            submitted_at: format_timestamp(received_at),
        })
    }
}

fn required(value: Option<String>, mode: ValidationMode) -> Result<String> {
    let accepted = match (&value, mode) {
        (Some(v), ValidationMode::Trimmed) => !v.trim().is_empty(),
        (Some(v), ValidationMode::Raw) => !v.is_empty(),
        (None, _) => false,
    };
    match value {
        Some(v) if accepted => Ok(v.trim().to_string()),
        _ => Err(Error::validation(REQUIRED_FIELDS_MESSAGE)),
    }
}

/// One persisted contact record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    /// Sender name
    pub name: String,
    /// Sender email
    pub email: String,
    /// Sender company, empty when not given
    pub company: String,
    /// Message body
    pub message: String,
    /// Arrival time as written to the store.
    ///
    /// Kept as text: rows already in the store are not guaranteed to parse.
    pub submitted_at: String,
}

impl Submission {
    /// Cell values in [`HEADERS`] order.
    pub fn cells(&self) -> [&str; 5] {
        [
            self.name.as_str(),
            self.email.as_str(),
            self.company.as_str(),
            self.message.as_str(),
            self.submitted_at.as_str(),
        ]
    }

    /// Rebuilds a record from a lookup of header text to cell text.
    pub fn from_columns<F>(mut column: F) -> Self
    where
        F: FnMut(&str) -> String,
    {
        Self {
            name: column(HEADERS[0]),
            email: column(HEADERS[1]),
            company: column(HEADERS[2]),
            message: column(HEADERS[3]),
            submitted_at: column(HEADERS[4]),
        }
    }

    /// Parses `submitted_at`, if it is a valid RFC 3339 timestamp.
    pub fn submitted_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.submitted_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Formats a timestamp as UTC RFC 3339 with milliseconds and a `Z` suffix.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
