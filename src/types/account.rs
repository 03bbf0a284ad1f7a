//! Account-related types for the bank account simulator
//!
//! This module defines the Account structure and the balance operations that
//! enforce its invariants.

use super::error::AccountError;
use crate::core::traits::AccountNumberSource;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

/// Account identifier
///
/// Generated account numbers fall in 1000..=9999
pub type AccountNumber = u16;

/// Account operation a monetary amount is submitted to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Credit funds to the account
    Deposit,
    /// Debit funds from the account
    Withdraw,
}

impl Operation {
    /// Verb used in prompts ("Enter amount to deposit")
    pub fn verb(self) -> &'static str {
        match self {
            Operation::Deposit => "deposit",
            Operation::Withdraw => "withdraw",
        }
    }

    /// Past tense used when reporting an accepted operation
    pub fn past_tense(self) -> &'static str {
        match self {
            Operation::Deposit => "Deposited",
            Operation::Withdraw => "Withdrawn",
        }
    }

    /// Apply this operation to `account`
    pub fn apply(self, account: &mut Account, amount: Decimal) -> Result<Decimal, AccountError> {
        match self {
            Operation::Deposit => account.deposit(amount),
            Operation::Withdraw => account.withdraw(amount),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Deposit => f.write_str("Deposit"),
            Operation::Withdraw => f.write_str("Withdrawal"),
        }
    }
}

/// Single-holder bank account
///
/// The holder name and account number are fixed at creation. The balance is
/// the only mutable field and never drops below zero: every mutation goes
/// through [`Account::deposit`] or [`Account::withdraw`], which reject
/// non-positive amounts and overdrafts without touching the balance.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    holder_name: String,
    account_number: AccountNumber,
    balance: Decimal,
}

impl Account {
    /// Create an account with a zero balance and an explicit account number
    pub fn new(holder_name: impl Into<String>, account_number: AccountNumber) -> Self {
        Account {
            holder_name: holder_name.into(),
            account_number,
            balance: Decimal::ZERO,
        }
    }

    /// Create an account whose number is drawn from `source`
    pub fn open(holder_name: impl Into<String>, source: &mut dyn AccountNumberSource) -> Self {
        Account::new(holder_name, source.next_account_number())
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn account_number(&self) -> AccountNumber {
        self.account_number
    }

    /// Current balance
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Deposit funds into the account
    ///
    /// # Returns
    ///
    /// * `Ok(amount)` - The amount credited
    /// * `Err(AccountError)` - If the amount is not positive or the balance would overflow
    pub fn deposit(&mut self, amount: Decimal) -> Result<Decimal, AccountError> {
        if amount <= Decimal::ZERO {
            return Err(AccountError::invalid_amount(Operation::Deposit, amount));
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| AccountError::arithmetic_overflow(Operation::Deposit))?;

        Ok(amount)
    }

    /// Withdraw funds from the account
    ///
    /// # Returns
    ///
    /// * `Ok(amount)` - The amount debited
    /// * `Err(AccountError)` - If the amount is not positive or exceeds the balance
    ///
    /// # Errors
    ///
    /// The amount check runs first, so a negative request against an empty
    /// account reports `InvalidAmount` rather than `InsufficientFunds`.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Decimal, AccountError> {
        if amount <= Decimal::ZERO {
            return Err(AccountError::invalid_amount(Operation::Withdraw, amount));
        }

        if amount > self.balance {
            return Err(AccountError::insufficient_funds(self.balance, amount));
        }

        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| AccountError::arithmetic_overflow(Operation::Withdraw))?;

        Ok(amount)
    }

    /// Holder name, account number and balance in display form
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account Holder: {}\nAccount Number: {}\nBalance: ${}",
            self.holder_name,
            self.account_number,
            format_amount(self.balance)
        )
    }
}

/// Format a monetary amount with exactly two decimal places
///
/// Midpoints round away from zero.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}
