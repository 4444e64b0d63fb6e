use std::fmt::Display;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{domain::SubmissionResult, protocol::server_error_message};

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const INVALID_RESPONSE_MESSAGE: &str = "Invalid response from server";
pub const UNREACHABLE_MESSAGE: &str =
    "Unable to connect to server. Please check your internet connection.";
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    Response,
    Parse,
    Transport,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please enter a valid email address")]
pub struct ValidationError {
    pub email: String,
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Validation
    }
}

/// Failure of one submission attempt.
///
/// `Rejected` is the only variant that saw a status code; the other two
/// never got a usable response.
#[derive(Debug, Clone, Error)]
pub enum SubmissionError {
    #[error("{message}")]
    Rejected {
        message: String,
        status: u16,
        details: SubmissionResult,
    },
    #[error("Invalid response from server")]
    InvalidResponse { reason: String },
    #[error("Unable to connect to server. Please check your internet connection.")]
    Unreachable { reason: String },
}

impl SubmissionError {
    pub fn rejected(status: u16, body: serde_json::Value) -> Self {
        Self::Rejected {
            message: server_error_message(&body),
            status,
            details: SubmissionResult(body),
        }
    }

    pub fn invalid_response(reason: impl Display) -> Self {
        Self::InvalidResponse {
            reason: reason.to_string(),
        }
    }

    pub fn unreachable(reason: impl Display) -> Self {
        Self::Unreachable {
            reason: reason.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Rejected { .. } => ErrorKind::Response,
            Self::InvalidResponse { .. } => ErrorKind::Parse,
            Self::Unreachable { .. } => ErrorKind::Transport,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn details(&self) -> Option<&SubmissionResult> {
        match self {
            Self::Rejected { details, .. } => Some(details),
            _ => None,
        }
    }

    /// Text for the error panel.
    pub fn user_message(&self) -> String {
        let message = self.message();
        if message.is_empty() {
            FALLBACK_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }
}
