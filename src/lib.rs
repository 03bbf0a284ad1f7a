//! Bank Account Simulator Library
//! # Overview
//!
//! This library provides a single-user, in-memory bank account driven by an
//! interactive text menu.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, errors)
//! - [`core`] - Account number sources and the traits they implement
//! - [`io`] - Input stream reading and token parsing
//! - [`session`] - The interactive menu state machine
//! - [`cli`] - CLI arguments parsing
//! - [`logging`] - Tracing subscriber setup
//!
//! # Operations
//!
//! - **Deposit**: Credit a strictly positive amount to the account
//! - **Withdraw**: Debit a strictly positive amount no larger than the balance
//! - **View**: Show holder name, account number and balance
//!
//! # Example
//!
//! ```
//! use bank_account_simulator::core::FixedAccountNumber;
//! use bank_account_simulator::session::Session;
//! use rust_decimal::Decimal;
//! use std::io::Cursor;
//!
//! let mut output = Vec::new();
//! let session = Session::new(
//!     Cursor::new("Alice\n1\n100\nn\n4\n"),
//!     &mut output,
//!     Box::new(FixedAccountNumber::new(4321)),
//! );
//!
//! let account = session.run().unwrap().unwrap();
//! assert_eq!(account.balance(), Decimal::new(100, 0));
//! ```

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod logging;
pub mod session;
pub mod types;

pub use crate::core::{AccountNumberSource, FixedAccountNumber, RandomAccountNumbers};
pub use crate::session::{Session, SessionConfig, SessionState};
pub use crate::types::{Account, AccountError, AccountNumber, Operation, SessionError};
