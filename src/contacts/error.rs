use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::fmt;
use thiserror::Error;

/// Operation that needs an `id` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdOperation {
    Update,
    Delete,
}

/// Every way a request against `/contacts` can fail.
///
/// All of them end the request; the message is sent back as the plain-text body.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    /// Create body was not a contact. Carries the decoder message.
    #[error("{0}")]
    Decode(String),

    /// Update body was not a contact.
    #[error("Failed to Update Contact")]
    InvalidUpdate,

    #[error("Contact Not Found")]
    NotFound,

    #[error("Failed to {0} Contact")]
    MissingId(IdOperation),

    #[error("Method not Allowed")]
    MethodNotAllowed,
}

impl fmt::Display for IdOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdOperation::Update => f.write_str("Update"),
            IdOperation::Delete => f.write_str("Delete"),
        }
    }
}

impl ContactError {
    pub fn status(&self) -> StatusCode {
        match self {
            ContactError::Decode(_)
            | ContactError::InvalidUpdate
            | ContactError::MissingId(_) => StatusCode::BAD_REQUEST,
            ContactError::NotFound => StatusCode::NOT_FOUND,
            ContactError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
