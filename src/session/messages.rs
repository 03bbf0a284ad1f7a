//! User-facing text printed by the session

pub const WELCOME: &str = "Welcome to the Online Bank Account Management System!";
pub const NAME_PROMPT: &str = "Please enter your name to create a new account: ";
pub const ACCOUNT_CREATED: &str = "Account created successfully!";

pub const MENU: &str = "\n=== Bank Account Menu ===\n\
                        1. Deposit Money\n\
                        2. Withdraw Money\n\
                        3. View Balance and Account Info\n\
                        4. Exit";
pub const CHOICE_PROMPT: &str = "Enter your choice: ";

pub const FAREWELL: &str = "Exiting... Thank you!";
pub const INPUT_CLOSED: &str = "Input closed.";
