//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: The account, its identifier and balance operations
//! - `error`: Error types for account operations and the interactive session

pub mod account;
pub mod error;

pub use account::{format_amount, Account, AccountNumber, Operation};
pub use error::{AccountError, ExpectedInput, SessionError};
