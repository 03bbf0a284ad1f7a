//! Error types for the bank account simulator
//!
//! This module defines the errors raised by account operations and by the
//! interactive session. Messages are written for direct display to the user.
//!
//! # Error Categories
//!
//! - **Account Errors**: Invalid amounts, insufficient funds, arithmetic overflow
//! - **Session Errors**: Malformed input tokens, out-of-range menu choices, terminal I/O

use super::account::{format_amount, Operation};
use rust_decimal::Decimal;
use std::fmt;
use thiserror::Error;

/// Errors returned by [`Account`](crate::types::Account) operations
///
/// Every variant is recoverable: the account state is left unchanged and the
/// session reports the message before re-prompting.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AccountError {
    /// Amount is zero or negative
    #[error("{operation} amount must be positive.")]
    InvalidAmount {
        /// Operation the amount was submitted to
        operation: Operation,
        /// The rejected amount
        amount: Decimal,
    },

    /// Withdrawal amount exceeds the current balance
    #[error(
        "Insufficient funds for withdrawal: balance ${}, requested ${}",
        display_amount(.balance),
        display_amount(.requested)
    )]
    InsufficientFunds {
        /// Balance at the time of the request
        balance: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// The resulting balance cannot be represented
    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: Operation,
    },
}

impl AccountError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(operation: Operation, amount: Decimal) -> Self {
        AccountError::InvalidAmount { operation, amount }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(balance: Decimal, requested: Decimal) -> Self {
        AccountError::InsufficientFunds { balance, requested }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: Operation) -> Self {
        AccountError::ArithmeticOverflow { operation }
    }
}

fn display_amount(amount: &Decimal) -> String {
    format_amount(*amount)
}

/// Kind of token a prompt was waiting for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedInput {
    /// A menu selection (integer)
    MenuOption,
    /// A monetary amount (integer or decimal)
    Amount,
}

impl fmt::Display for ExpectedInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectedInput::MenuOption => f.write_str("a valid menu option"),
            ExpectedInput::Amount => f.write_str("a numeric value"),
        }
    }
}

/// Errors raised while driving the interactive session
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    /// A prompt received a token of the wrong shape
    ///
    /// This is a recoverable error - the token is discarded and the
    /// prompt is repeated.
    #[error("Input error: Please enter {expected}.")]
    MalformedInput {
        /// The discarded token
        token: String,
        /// What the prompt was waiting for
        expected: ExpectedInput,
    },

    /// Numeric menu selection outside the listed options
    ///
    /// This is a recoverable error - the menu is shown again.
    #[error("Invalid choice. Please select 1-4.")]
    InvalidChoice {
        /// The rejected selection
        choice: i64,
    },

    /// Reading the input or writing the output failed
    ///
    /// This is a fatal error that ends the session.
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },
}

impl From<std::io::Error> for SessionError {
    fn from(error: std::io::Error) -> Self {
        SessionError::Io {
            message: error.to_string(),
        }
    }
}

impl SessionError {
    /// Create a MalformedInput error
    pub fn malformed_input(token: &str, expected: ExpectedInput) -> Self {
        SessionError::MalformedInput {
            token: token.to_string(),
            expected,
        }
    }

    /// Create an InvalidChoice error
    pub fn invalid_choice(choice: i64) -> Self {
        SessionError::InvalidChoice { choice }
    }
}
