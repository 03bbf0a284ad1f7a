//! Session state machine
//!
//! `AwaitingName -> MenuLoop -> {Depositing, Withdrawing, ViewingInfo} -> MenuLoop -> Exited`

use crate::io::MenuChoice;
use crate::types::Operation;

/// Where the interactive session currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for the holder name that opens the account
    AwaitingName,
    /// Showing the main menu and waiting for a selection
    MenuLoop,
    /// Repeating deposit prompts until the user declines
    Depositing,
    /// Repeating withdrawal prompts until the user declines
    Withdrawing,
    /// Printing the account description
    ViewingInfo,
    /// Terminal state
    Exited,
}

impl SessionState {
    /// Account operation driven by this state, if any
    pub fn operation(self) -> Option<Operation> {
        match self {
            SessionState::Depositing => Some(Operation::Deposit),
            SessionState::Withdrawing => Some(Operation::Withdraw),
            _ => None,
        }
    }
}

impl From<MenuChoice> for SessionState {
    fn from(choice: MenuChoice) -> Self {
        match choice {
            MenuChoice::Deposit => SessionState::Depositing,
            MenuChoice::Withdraw => SessionState::Withdrawing,
            MenuChoice::ViewInfo => SessionState::ViewingInfo,
            MenuChoice::Exit => SessionState::Exited,
        }
    }
}
