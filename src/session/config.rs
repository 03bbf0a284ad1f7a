//! Session configuration
//!
//! Built from command-line arguments by [`CliArgs::to_session_config`](crate::cli::CliArgs::to_session_config).

use crate::core::account_number::{FixedAccountNumber, RandomAccountNumbers};
use crate::core::traits::AccountNumberSource;
use crate::types::AccountNumber;

/// Settings for one interactive session
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Use this account number instead of generating one
    pub account_number: Option<AccountNumber>,
    /// Seed for the account number generator
    pub seed: Option<u64>,
}

impl SessionConfig {
    /// Account number source selected by this configuration
    ///
    /// A fixed number wins over a seed; with neither, numbers come from an
    /// entropy-seeded generator.
    pub fn number_source(&self) -> Box<dyn AccountNumberSource> {
        match (self.account_number, self.seed) {
            (Some(account_number), _) => Box::new(FixedAccountNumber::new(account_number)),
            (None, Some(seed)) => Box::new(RandomAccountNumbers::seeded(seed)),
            (None, None) => Box::new(RandomAccountNumbers::new()),
        }
    }
}
