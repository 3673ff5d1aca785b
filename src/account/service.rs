//! Core register / authenticate logic on top of the account store.

use tracing::{debug, info};

use super::auth::{hash_password, issue_access_token, verify_password};
use super::store::AccountStore;
use super::types::Account;
use crate::error::AuthError;

pub struct CredentialService {
    store: AccountStore,
}

impl CredentialService {
    pub fn new() -> Self {
        Self {
            store: AccountStore::new(),
        }
    }

    /// Register a new account.
    ///
    /// Validates input, hashes the password, issues a fresh access token
    /// and inserts the record. The plaintext is dropped here and never
    /// logged or echoed back.
    pub async fn register(&self, email: &str, password: &str) -> Result<Account, AuthError> {
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::InvalidInput);
        }

        // Early duplicate check so most callers fail before paying for the
        // hash. Not authoritative: `insert` re-checks under the write lock.
        if self.store.find_by_email(email).is_some() {
            return Err(AuthError::DuplicateAccount);
        }

        // Argon2 is slow on purpose. Run it off the async workers, and
        // never while holding the store lock.
        let plaintext = password.to_owned();
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&plaintext))
            .await
            .map_err(|_| AuthError::Internal)??;

        let account = Account {
            email: email.to_owned(),
            password_hash,
            access_token: issue_access_token(),
        };

        self.store.insert(account.clone())?;
        info!(email = %account.email, "account created");

        Ok(account)
    }

    /// Validate a login attempt and return the stored account.
    ///
    /// No new token is issued; the registration-time token is returned
    /// unchanged.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<Account, AuthError> {
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::InvalidInput);
        }

        let account = self
            .store
            .find_by_email(email)
            .ok_or(AuthError::NotFound)?;

        let plaintext = password.to_owned();
        let stored_hash = account.password_hash.clone();
        tokio::task::spawn_blocking(move || verify_password(&plaintext, &stored_hash))
            .await
            .map_err(|_| AuthError::Internal)??;

        debug!(email = %account.email, "login verified");
        Ok(account)
    }

    pub fn store(&self) -> &AccountStore {
        &self.store
    }
}

impl Default for CredentialService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_register_and_authenticate() {
        let service = CredentialService::new();

        let created = service.register("alice@x.com", "secret1").await.unwrap();
        assert_eq!(created.email, "alice@x.com");
        assert_ne!(created.password_hash, "secret1");
        assert!(!created.access_token.is_empty());

        // Correct password returns the registration-time token
        let logged_in = service.authenticate("alice@x.com", "secret1").await.unwrap();
        assert_eq!(logged_in.access_token, created.access_token);

        // Wrong password
        let err = service.authenticate("alice@x.com", "wrong").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_empty_fields_rejected() {
        let service = CredentialService::new();

        assert!(matches!(
            service.register("", "secret1").await.unwrap_err(),
            AuthError::InvalidInput
        ));
        assert!(matches!(
            service.register("alice@x.com", "").await.unwrap_err(),
            AuthError::InvalidInput
        ));
        assert!(matches!(
            service.authenticate("", "").await.unwrap_err(),
            AuthError::InvalidInput
        ));
        assert_eq!(service.store().count(), 0);
    }

    #[tokio::test]
    async fn test_duplicate_registration_keeps_first() {
        let service = CredentialService::new();

        let first = service.register("alice@x.com", "secret1").await.unwrap();
        let err = service.register("alice@x.com", "secret2").await.unwrap_err();
        assert!(matches!(err, AuthError::DuplicateAccount));

        assert_eq!(service.store().count(), 1);
        let stored = service.store().find_by_email("alice@x.com").unwrap();
        assert_eq!(stored.access_token, first.access_token);
        assert_eq!(stored.password_hash, first.password_hash);
    }

    #[tokio::test]
    async fn test_unknown_email_is_not_found() {
        let service = CredentialService::new();
        let err = service.authenticate("ghost@x.com", "secret1").await.unwrap_err();
        assert!(matches!(err, AuthError::NotFound));
    }

    #[tokio::test]
    async fn test_tokens_are_distinct_across_accounts() {
        let service = CredentialService::new();
        let a = service.register("a@x.com", "pw-a").await.unwrap();
        let b = service.register("b@x.com", "pw-b").await.unwrap();
        assert_ne!(a.access_token, b.access_token);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_registration_single_winner() {
        let service = Arc::new(CredentialService::new());

        let mut handles = Vec::new();
        for i in 0..8 {
            let service = Arc::clone(&service);
            handles.push(tokio::spawn(async move {
                service
                    .register("race@x.com", &format!("password{}", i))
                    .await
            }));
        }

        let mut successes = 0;
        let mut duplicates = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => successes += 1,
                Err(AuthError::DuplicateAccount) => duplicates += 1,
                Err(other) => panic!("unexpected error: {other}"),
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(duplicates, 7);
        assert_eq!(service.store().count(), 1);
    }
}
