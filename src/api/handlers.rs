//! HTTP handlers for the account endpoints.
//!
//! Both endpoints accept POST only and answer any other method with a 405
//! JSON envelope, so the method check lives in the handler rather than in
//! axum's method router (whose built-in rejection has an empty body).
//! Bodies are read and decoded by hand for the same reason: decode
//! failures must map to the contract's 500 envelope.

use axum::body::to_bytes;
use axum::extract::{Request, State};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use tracing::{debug, warn};

use super::types::{CredentialsRequest, ErrorBody};
use super::ApiState;

// Requests carry a single email/password pair; anything larger is abuse.
const BODY_LIMIT: usize = 64 * 1024;

fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
        .into_response()
}

/// Read and decode the request body. The body itself is never logged:
/// it carries a plaintext password.
async fn decode_credentials(req: Request) -> Result<CredentialsRequest, Response> {
    let body = to_bytes(req.into_body(), BODY_LIMIT).await.map_err(|err| {
        warn!("failed to read request body: {}", err);
        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "failed to read request body",
        )
    })?;

    serde_json::from_slice(&body).map_err(|err| {
        warn!("failed to decode request body: {}", err);
        error_response(StatusCode::INTERNAL_SERVER_ERROR, "failed to unmarshal json")
    })
}

/// POST /users/create — register a new account.
pub async fn create_user(State(state): State<ApiState>, req: Request) -> Response {
    debug!(method = %req.method(), path = %req.uri().path(), "inbound request");

    if req.method() != Method::POST {
        return error_response(
            StatusCode::METHOD_NOT_ALLOWED,
            "/users/create supports post method only",
        );
    }

    let params = match decode_credentials(req).await {
        Ok(params) => params,
        Err(resp) => return resp,
    };

    match state.service.register(&params.email, &params.password).await {
        Ok(account) => (StatusCode::CREATED, Json(account)).into_response(),
        Err(err) => {
            warn!(email = %params.email, "registration rejected: {}", err);
            err.into_response()
        }
    }
}

/// POST /users/login — validate credentials and return the stored account.
pub async fn login_user(State(state): State<ApiState>, req: Request) -> Response {
    debug!(method = %req.method(), path = %req.uri().path(), "inbound request");

    if req.method() != Method::POST {
        return error_response(
            StatusCode::METHOD_NOT_ALLOWED,
            "/users/login supports post method only",
        );
    }

    let params = match decode_credentials(req).await {
        Ok(params) => params,
        Err(resp) => return resp,
    };

    match state
        .service
        .authenticate(&params.email, &params.password)
        .await
    {
        Ok(account) => (StatusCode::OK, Json(account)).into_response(),
        Err(err) => {
            warn!(email = %params.email, "login rejected: {}", err);
            err.into_response()
        }
    }
}
