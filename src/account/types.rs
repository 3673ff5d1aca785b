//! Account type definitions.

use serde::{Deserialize, Serialize};

/// A registered user.
///
/// The plaintext password never appears here; registration stores the
/// Argon2id hash only. `access_token` is issued once at registration and
/// reused for every subsequent login.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Account {
    pub email: String,

    // Wire name pinned by the client contract
    #[serde(rename = "hashed_password")]
    pub password_hash: String,

    pub access_token: String,
}
