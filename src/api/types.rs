//! Wire types for the HTTP API.

use serde::{Deserialize, Serialize};

/// Request body shared by /users/create and /users/login.
///
/// Fields default to empty so a missing key decodes cleanly and is then
/// rejected as invalid input rather than as a decode failure.
#[derive(Deserialize, Debug)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// JSON error envelope returned on every failure path.
#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorBody {
    pub error: String,
}
