//! Core traits for the account simulator
//!
//! This module defines the trait seams that let the session swap in
//! deterministic collaborators under test.

use crate::types::AccountNumber;

/// Source of identifiers for newly opened accounts
///
/// Implementations can be random (production) or fixed (tests and the
/// `--account-number` flag).
pub trait AccountNumberSource {
    /// Produce the number for the next account
    fn next_account_number(&mut self) -> AccountNumber;
}

impl<S: AccountNumberSource + ?Sized> AccountNumberSource for Box<S> {
    fn next_account_number(&mut self) -> AccountNumber {
        (**self).next_account_number()
    }
}
