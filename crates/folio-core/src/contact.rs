//! Contact form submission state machine.
//!
//! Transport lives in the front end. This module decides whether a request
//! may be sent, builds its body, and folds the transport outcome back into
//! the form state.

use crate::constants::{FORM_ENDPOINT, SUCCESS_DISPLAY_MS};
use instant::Instant;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub email: String,
    pub message: String,
}

/// A validated request that is ready to be POSTed as JSON.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitRequest {
    pub endpoint: &'static str,
    pub payload: ContactPayload,
}

impl SubmitRequest {
    pub fn body(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.payload)
    }
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in both your email and a message.")]
    MissingFields { email: bool, message: bool },
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BeginError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("a submission is already in flight")]
    Busy,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Oops! There was a network error.")]
    Network(String),
    #[error("Oops! There was a problem sending your form.")]
    Rejected { status: u16 },
}

/// Map an HTTP status to the submission outcome; any 2xx succeeds.
pub fn check_status(status: u16) -> Result<(), SubmitError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SubmitError::Rejected { status })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded {
        until: Instant,
    },
}

#[derive(Debug)]
pub struct ContactForm {
    email: String,
    message: String,
    status: SubmitStatus,
    endpoint: &'static str,
    success_hold: Duration,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self::with_endpoint(FORM_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: &'static str) -> Self {
        Self {
            email: String::new(),
            message: String::new(),
            status: SubmitStatus::Idle,
            endpoint,
            success_hold: Duration::from_millis(SUCCESS_DISPLAY_MS),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn validate(&self) -> Result<ContactPayload, ValidationError> {
        let email_missing = self.email.is_empty();
        let message_missing = self.message.is_empty();
        if email_missing || message_missing {
            return Err(ValidationError::MissingFields {
                email: email_missing,
                message: message_missing,
            });
        }
        Ok(ContactPayload {
            email: self.email.clone(),
            message: self.message.clone(),
        })
    }

    /// Validate and move to `Submitting`. Only an `Ok` carries something to send.
    pub fn begin_submit(&mut self) -> Result<SubmitRequest, BeginError> {
        if self.submit_disabled() {
            return Err(BeginError::Busy);
        }
        let payload = self.validate()?;
        self.status = SubmitStatus::Submitting;
        log::debug!("[contact] submitting to {}", self.endpoint);
        Ok(SubmitRequest {
            endpoint: self.endpoint,
            payload,
        })
    }

    /// Fold the transport outcome into the form. Errors are handed back for
    /// the caller to surface; the form is already back to `Idle` by then.
    pub fn complete(&mut self, outcome: Result<(), SubmitError>, now: Instant) -> Result<(), SubmitError> {
        match outcome {
            Ok(()) => {
                self.email.clear();
                self.message.clear();
                self.status = SubmitStatus::Succeeded {
                    until: now + self.success_hold,
                };
                Ok(())
            }
            Err(e) => {
                log::warn!("[contact] submission failed: {:?}", e);
                self.status = SubmitStatus::Idle;
                Err(e)
            }
        }
    }

    /// Expire the success indicator. Returns true when the status changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.status {
            SubmitStatus::Succeeded { until } if now >= until => {
                self.status = SubmitStatus::Idle;
                true
            }
            _ => false,
        }
    }

    /// Time left on the success indicator, if it is showing.
    pub fn success_remaining(&self, now: Instant) -> Option<Duration> {
        match self.status {
            SubmitStatus::Succeeded { until } if until > now => Some(until - now),
            SubmitStatus::Succeeded { .. } => Some(Duration::ZERO),
            _ => None,
        }
    }

    pub fn is_success_visible(&self) -> bool {
        matches!(self.status, SubmitStatus::Succeeded { .. })
    }

    pub fn submit_disabled(&self) -> bool {
        !matches!(self.status, SubmitStatus::Idle)
    }

    /// CSS modifier for the submit button.
    pub fn button_class(&self) -> &'static str {
        match self.status {
            SubmitStatus::Idle => "",
            SubmitStatus::Submitting => "loading",
            SubmitStatus::Succeeded { .. } => "success",
        }
    }
}
