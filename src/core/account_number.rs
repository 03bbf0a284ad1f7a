//! Account number generation
//!
//! Provides the random four-digit generator used by default and a fixed
//! source used when the number must be known in advance.

use crate::core::traits::AccountNumberSource;
use crate::types::AccountNumber;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

/// Range of generated account numbers (four digits)
pub const ACCOUNT_NUMBER_RANGE: RangeInclusive<AccountNumber> = 1000..=9999;

/// Uniformly random four-digit account numbers
///
/// Seeded instances produce the same sequence for the same seed.
#[derive(Debug, Clone)]
pub struct RandomAccountNumbers {
    rng: StdRng,
}

impl RandomAccountNumbers {
    /// Create a generator seeded from operating system entropy
    pub fn new() -> Self {
        RandomAccountNumbers {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a deterministic generator
    pub fn seeded(seed: u64) -> Self {
        RandomAccountNumbers {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAccountNumbers {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountNumberSource for RandomAccountNumbers {
    fn next_account_number(&mut self) -> AccountNumber {
        self.rng.gen_range(ACCOUNT_NUMBER_RANGE)
    }
}

/// Always yields the same account number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedAccountNumber(AccountNumber);

impl FixedAccountNumber {
    pub fn new(account_number: AccountNumber) -> Self {
        FixedAccountNumber(account_number)
    }
}

impl AccountNumberSource for FixedAccountNumber {
    fn next_account_number(&mut self) -> AccountNumber {
        self.0
    }
}
