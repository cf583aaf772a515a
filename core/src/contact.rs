use std::cell::Cell;

use serde::Deserialize;

use crate::config::{CONTACT_FAILURE_NOTICE, CONTACT_SUCCESS_NOTICE};
use crate::error::SubmitError;

pub const CONTACT_FORM_ID: &str = "contact-form";
pub const ACCEPT_JSON: &str = "application/json";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMethod {
    Get,
    Post,
}

impl FormMethod {
    /// `HTMLFormElement.method` reports lowercase names and falls back to `get`.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("post") {
            FormMethod::Post
        } else {
            FormMethod::Get
        }
    }
}

/// Appends an encoded query to `action`, keeping any query it already has.
pub fn query_url(action: &str, query: &str) -> String {
    if query.is_empty() {
        return action.to_string();
    }
    let (base, fragment) = match action.split_once('#') {
        Some((base, fragment)) => (base, Some(fragment)),
        None => (action, None),
    };
    let separator = if base.contains('?') { '&' } else { '?' };
    match fragment {
        Some(fragment) => format!("{base}{separator}{query}#{fragment}"),
        None => format!("{base}{separator}{query}"),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Failed(SubmitError),
}

impl SubmitOutcome {
    pub fn from_status(status: u16) -> Self {
        if (200..300).contains(&status) {
            SubmitOutcome::Sent
        } else {
            SubmitOutcome::Failed(SubmitError::Status(status))
        }
    }

    pub fn is_sent(&self) -> bool {
        matches!(self, SubmitOutcome::Sent)
    }

    pub fn notice(&self) -> &'static str {
        match self {
            SubmitOutcome::Sent => CONTACT_SUCCESS_NOTICE,
            SubmitOutcome::Failed(_) => CONTACT_FAILURE_NOTICE,
        }
    }

    /// Only a successful send clears the form.
    pub fn clears_form(&self) -> bool {
        self.is_sent()
    }
}

/// Error body returned by form endpoints such as Formspree.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct ContactReply {
    #[serde(default)]
    pub errors: Vec<FieldError>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct FieldError {
    #[serde(default)]
    pub field: Option<String>,
    pub message: String,
}

impl ContactReply {
    pub fn summary(&self) -> Option<String> {
        if self.errors.is_empty() {
            return None;
        }
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|error| match &error.field {
                Some(field) => format!("{field}: {}", error.message),
                None => error.message.clone(),
            })
            .collect();
        Some(parts.join("; "))
    }
}

/// Allows one submission in flight per form.
#[derive(Debug, Default)]
pub struct SubmitGate {
    in_flight: Cell<bool>,
}

impl SubmitGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_begin(&self) -> Result<(), SubmitError> {
        if self.in_flight.replace(true) {
            return Err(SubmitError::InFlight);
        }
        Ok(())
    }

    pub fn finish(&self) {
        self.in_flight.set(false);
    }
}
