//! Core module
//!
//! This module contains the collaborators the session is built from:
//! - `traits` - Trait abstractions for interchangeable implementations
//! - `account_number` - Random and fixed account number sources

pub mod account_number;
pub mod traits;

pub use account_number::{FixedAccountNumber, RandomAccountNumbers, ACCOUNT_NUMBER_RANGE};
pub use traits::AccountNumberSource;
