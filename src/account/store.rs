//! In-memory account storage.
//!
//! Accounts live for the lifetime of the process and are lost on restart.
//! The store is append-only: no update or delete operations exist.

use std::sync::RwLock;

use super::types::Account;
use crate::error::AuthError;

/// Shared account container guarded by a reader-writer lock.
///
/// Lookups take the shared lock and may run concurrently; `insert` takes
/// the exclusive lock and re-checks uniqueness before appending, so two
/// racing registrations of the same email cannot both land.
pub struct AccountStore {
    accounts: RwLock<Vec<Account>>,
}

impl AccountStore {
    /// Create a new empty account store
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(Vec::new()),
        }
    }

    /// Get an account by email, cloned out so callers never hold a
    /// reference into the store.
    pub fn find_by_email(&self, email: &str) -> Option<Account> {
        let accounts = match self.accounts.read() {
            Ok(guard) => guard,
            // A poisoned lock only means some thread panicked while holding
            // it; the Vec is never left mid-update, so the data is intact.
            Err(poisoned) => poisoned.into_inner(),
        };
        accounts.iter().find(|a| a.email == email).cloned()
    }

    /// Insert a new account, failing if the email is already taken.
    ///
    /// The existence check and the append happen under the same write
    /// lock, which is what actually guarantees the one-account-per-email
    /// invariant under concurrent callers.
    pub fn insert(&self, account: Account) -> Result<(), AuthError> {
        let mut accounts = match self.accounts.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if accounts.iter().any(|a| a.email == account.email) {
            return Err(AuthError::DuplicateAccount);
        }
        accounts.push(account);
        Ok(())
    }

    /// Number of stored accounts.
    pub fn count(&self) -> usize {
        match self.accounts.read() {
            Ok(guard) => guard.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }
}

impl Default for AccountStore {
    fn default() -> Self {
        Self::new()
    }
}
