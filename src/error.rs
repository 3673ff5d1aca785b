//! Error taxonomy for the credential service.
//!
//! Every variant's display string is the exact message clients see in the
//! `{"error": ...}` envelope, so the wire contract lives here in one place.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// A required field was missing or empty.
    #[error("email and password was required")]
    InvalidInput,

    /// Registration attempted with an email that is already taken.
    #[error("user email already exists")]
    DuplicateAccount,

    /// Login attempted with an unknown email.
    #[error("not found user")]
    NotFound,

    /// Password did not match the stored hash.
    #[error("wrong email or password")]
    InvalidCredentials,

    /// Hashing or token generation failed during registration.
    #[error("failed to issue access token")]
    HashFailure,

    /// A blocking task was cancelled or panicked.
    #[error("internal server error")]
    Internal,
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::InvalidInput
            | AuthError::DuplicateAccount
            | AuthError::NotFound
            | AuthError::InvalidCredentials => StatusCode::BAD_REQUEST,
            AuthError::HashFailure | AuthError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_messages() {
        assert_eq!(
            AuthError::InvalidInput.to_string(),
            "email and password was required"
        );
        assert_eq!(
            AuthError::DuplicateAccount.to_string(),
            "user email already exists"
        );
        assert_eq!(AuthError::NotFound.to_string(), "not found user");
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "wrong email or password"
        );
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(AuthError::InvalidInput.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AuthError::NotFound.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AuthError::HashFailure.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
