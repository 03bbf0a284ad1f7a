//! Interactive session
//!
//! Drives a single [`Account`] from a text menu. The session reads from one
//! buffered input through a [`TokenReader`], writes plain text to one output,
//! and moves through the states in [`SessionState`].
//!
//! # Error Handling
//!
//! Malformed tokens, out-of-range menu choices and rejected account
//! operations are printed and the user is prompted again. Only I/O failures
//! on the input or output end the session with an error.
//!
//! # Resource Handling
//!
//! [`Session::run`] consumes the session. The input reader is dropped before
//! `run` returns on every path, including I/O failures, and the release is
//! announced on the output.

pub mod config;
pub mod messages;
pub mod state;

pub use config::SessionConfig;
pub use state::SessionState;

use crate::core::traits::AccountNumberSource;
use crate::io::{is_affirmative, parse_amount, parse_menu_choice, MenuChoice, TokenReader};
use crate::types::{format_amount, Account, Operation, SessionError};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// Interactive account session over an input and an output stream
pub struct Session<R, W> {
    input: TokenReader<R>,
    output: W,
    numbers: Box<dyn AccountNumberSource>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session that draws the account number from `numbers`
    pub fn new(input: R, output: W, numbers: Box<dyn AccountNumberSource>) -> Self {
        Session {
            input: TokenReader::new(input),
            output,
            numbers,
        }
    }

    /// Create a session using the account number source chosen by `config`
    pub fn with_config(input: R, output: W, config: &SessionConfig) -> Self {
        Session::new(input, output, config.number_source())
    }

    /// Run the session until the user exits or the input ends
    ///
    /// # Returns
    ///
    /// * `Ok(Some(account))` - The account as it stood when the session ended
    /// * `Ok(None)` - The input ended before a holder name was entered
    /// * `Err(SessionError)` - Reading the input or writing the output failed
    pub fn run(mut self) -> Result<Option<Account>, SessionError> {
        let outcome = self.drive();

        let Session {
            input, mut output, ..
        } = self;
        drop(input);

        let announced = writeln!(output, "{}", messages::INPUT_CLOSED).and_then(|_| output.flush());
        let account = outcome?;
        announced?;

        Ok(account)
    }

    fn drive(&mut self) -> Result<Option<Account>, SessionError> {
        let mut account: Option<Account> = None;
        let mut state = SessionState::AwaitingName;

        while state != SessionState::Exited {
            debug!(?state, "entering state");
            state = match state {
                SessionState::AwaitingName => {
                    account = self.open_account()?;
                    if account.is_some() {
                        SessionState::MenuLoop
                    } else {
                        SessionState::Exited
                    }
                }
                SessionState::MenuLoop => self.select_from_menu()?,
                SessionState::ViewingInfo => match account.as_ref() {
                    Some(account) => {
                        writeln!(self.output, "{}", account.describe())?;
                        SessionState::MenuLoop
                    }
                    None => SessionState::Exited,
                },
                SessionState::Depositing | SessionState::Withdrawing => {
                    match (account.as_mut(), state.operation()) {
                        (Some(account), Some(operation)) => {
                            self.repeat_operation(account, operation)?
                        }
                        _ => SessionState::Exited,
                    }
                }
                SessionState::Exited => SessionState::Exited,
            };
        }

        Ok(account)
    }

    fn open_account(&mut self) -> Result<Option<Account>, SessionError> {
        writeln!(self.output, "{}", messages::WELCOME)?;
        self.prompt(messages::NAME_PROMPT)?;

        let Some(holder_name) = self.input.next_line()? else {
            info!("input ended before an account was opened");
            return Ok(None);
        };

        let account = Account::open(holder_name, self.numbers.as_mut());
        info!(account_number = account.account_number(), "account opened");

        writeln!(self.output, "{}", messages::ACCOUNT_CREATED)?;
        writeln!(self.output, "{}", account.describe())?;

        Ok(Some(account))
    }

    fn select_from_menu(&mut self) -> Result<SessionState, SessionError> {
        writeln!(self.output, "{}", messages::MENU)?;
        self.prompt(messages::CHOICE_PROMPT)?;

        let Some(token) = self.input.next_token()? else {
            info!("input ended at the main menu");
            return Ok(SessionState::Exited);
        };

        match parse_menu_choice(&token) {
            Ok(MenuChoice::Exit) => {
                writeln!(self.output, "{}", messages::FAREWELL)?;
                Ok(SessionState::Exited)
            }
            Ok(choice) => Ok(SessionState::from(choice)),
            Err(error) => {
                self.report_input_error(&error)?;
                Ok(SessionState::MenuLoop)
            }
        }
    }

    /// Deposit or withdraw until the user declines to continue
    ///
    /// Every attempt, accepted or not, is followed by the "more?" question.
    fn repeat_operation(
        &mut self,
        account: &mut Account,
        operation: Operation,
    ) -> Result<SessionState, SessionError> {
        loop {
            self.prompt(&format!("Enter amount to {}: ", operation.verb()))?;

            let Some(token) = self.input.next_token()? else {
                info!(%operation, "input ended while waiting for an amount");
                return Ok(SessionState::Exited);
            };

            match parse_amount(&token) {
                Ok(amount) => match operation.apply(account, amount) {
                    Ok(applied) => {
                        info!(%operation, amount = %applied, "operation accepted");
                        writeln!(
                            self.output,
                            "{}: ${}",
                            operation.past_tense(),
                            format_amount(applied)
                        )?;
                    }
                    Err(error) => {
                        warn!(%operation, %amount, %error, "operation rejected");
                        writeln!(self.output, "Error: {}", error)?;
                    }
                },
                Err(error) => self.report_input_error(&error)?,
            }

            self.prompt(&format!("Do you want to {} more? (y/n): ", operation.verb()))?;

            let Some(answer) = self.input.next_answer()? else {
                info!(%operation, "input ended while waiting for an answer");
                return Ok(SessionState::Exited);
            };

            if !is_affirmative(&answer) {
                return Ok(SessionState::MenuLoop);
            }
        }
    }

    /// Print a rejected token's message; only parse errors reach here
    fn report_input_error(&mut self, error: &SessionError) -> Result<(), SessionError> {
        if let SessionError::MalformedInput { token, expected } = error {
            warn!(%token, %expected, "malformed input discarded");
        } else {
            warn!(%error, "input rejected");
        }
        writeln!(self.output, "{}", error)?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<(), SessionError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::account_number::FixedAccountNumber;
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::io::{self, Cursor, Read};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    /// Run a scripted session and return the final account with the transcript
    fn run_script(script: &str) -> (Option<Account>, String) {
        run_bytes(script.as_bytes())
    }

    fn run_bytes(script: &[u8]) -> (Option<Account>, String) {
        let mut output = Vec::new();
        let session = Session::new(
            Cursor::new(script.to_vec()),
            &mut output,
            Box::new(FixedAccountNumber::new(4321)),
        );

        let account = session.run().expect("session failed");
        (account, String::from_utf8(output).expect("non-UTF-8 output"))
    }

    /// Input that records whether it has been dropped
    struct TrackedInput {
        inner: Cursor<Vec<u8>>,
        released: Arc<AtomicBool>,
    }

    impl TrackedInput {
        fn new(script: &str) -> (Self, Arc<AtomicBool>) {
            let released = Arc::new(AtomicBool::new(false));
            let input = TrackedInput {
                inner: Cursor::new(script.as_bytes().to_vec()),
                released: Arc::clone(&released),
            };
            (input, released)
        }
    }

    impl Read for TrackedInput {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.inner.read(buf)
        }
    }

    impl BufRead for TrackedInput {
        fn fill_buf(&mut self) -> io::Result<&[u8]> {
            self.inner.fill_buf()
        }

        fn consume(&mut self, amt: usize) {
            self.inner.consume(amt)
        }
    }

    impl Drop for TrackedInput {
        fn drop(&mut self) {
            self.released.store(true, Ordering::SeqCst);
        }
    }

    struct BrokenOutput;

    impl Write for BrokenOutput {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "output closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "output closed"))
        }
    }

    fn balance_of(account: Option<Account>) -> Decimal {
        account.expect("account was not opened").balance()
    }

    #[test]
    fn test_deposit_then_decline_returns_to_menu() {
        let (account, transcript) = run_script("Alice\n1\n50\nn\n4\n");

        assert_eq!(balance_of(account), Decimal::new(50, 0));
        assert!(transcript.contains("Deposited: $50.00\nDo you want to deposit more? (y/n): \n=== Bank Account Menu ==="));
        assert!(transcript.ends_with("Exiting... Thank you!\nInput closed.\n"));
    }

    #[test]
    fn test_malformed_menu_input_is_reported_and_reprompted() {
        let (account, transcript) = run_script("Alice\nabc\n4\n");

        assert_eq!(balance_of(account), Decimal::ZERO);
        assert!(transcript.contains("Enter your choice: Input error: Please enter a valid menu option.\n"));
        assert_eq!(transcript.matches("=== Bank Account Menu ===").count(), 2);
        assert!(!transcript.contains("Invalid choice"));
    }

    #[rstest]
    #[case::zero("0")]
    #[case::five("5")]
    #[case::negative("-2")]
    fn test_out_of_range_menu_choice(#[case] choice: &str) {
        let (_, transcript) = run_script(&format!("Alice\n{}\n4\n", choice));

        assert!(transcript.contains("Enter your choice: Invalid choice. Please select 1-4.\n"));
        assert_eq!(transcript.matches("=== Bank Account Menu ===").count(), 2);
    }

    #[test]
    fn test_overdraft_is_reported_and_balance_kept() {
        let (account, transcript) = run_script("Alice\n1\n100\nn\n2\n150\nn\n4\n");

        assert_eq!(balance_of(account), Decimal::new(100, 0));
        assert!(transcript.contains(
            "Error: Insufficient funds for withdrawal: balance $100.00, requested $150.00\n"
        ));
    }

    #[test]
    fn test_negative_withdrawal_is_reported_and_balance_kept() {
        let (account, transcript) = run_script("Alice\n1\n100\nn\n2\n-5\nn\n4\n");

        assert_eq!(balance_of(account), Decimal::new(100, 0));
        assert!(transcript.contains("Error: Withdrawal amount must be positive.\n"));
    }

    #[test]
    fn test_repeated_deposits_continue_on_yes() {
        let (account, transcript) = run_script("Alice\n1\n50\ny\n25.5\nY\n-1\nn\n4\n");

        assert_eq!(balance_of(account), Decimal::new(7550, 2));
        assert_eq!(transcript.matches("Enter amount to deposit: ").count(), 3);
        assert!(transcript.contains("Error: Deposit amount must be positive.\n"));
    }

    #[test]
    fn test_malformed_amount_is_discarded() {
        let (account, transcript) = run_script("Alice\n1\nten\ny\n20\nn\n4\n");

        assert_eq!(balance_of(account), Decimal::new(20, 0));
        assert!(transcript.contains(
            "Enter amount to deposit: Input error: Please enter a numeric value.\nDo you want to deposit more? (y/n): "
        ));
    }

    #[test]
    fn test_invalid_utf8_menu_input_is_malformed() {
        let mut script = b"Alice\n".to_vec();
        script.extend_from_slice(&[0xFF, 0xFE, b'\n']);
        script.extend_from_slice(b"1\n50\nn\n4\n");

        let (account, transcript) = run_bytes(&script);

        assert_eq!(balance_of(account), Decimal::new(50, 0));
        assert!(transcript.contains("Enter your choice: Input error: Please enter a valid menu option.\n"));
        assert!(transcript.ends_with("Exiting... Thank you!\nInput closed.\n"));
    }

    #[test]
    fn test_invalid_utf8_amount_is_malformed() {
        let mut script = b"Alice\n1\n".to_vec();
        script.extend_from_slice(&[0xFF, b'\n']);
        script.extend_from_slice(b"n\n4\n");

        let (account, transcript) = run_bytes(&script);

        assert_eq!(balance_of(account), Decimal::ZERO);
        assert!(transcript.contains("Enter amount to deposit: Input error: Please enter a numeric value.\n"));
    }

    #[test]
    fn test_sub_cent_overdraft_message_matches_rounded_amounts() {
        let (account, transcript) = run_script("A\n1\n0.005\nn\n2\n0.009\nn\n4\n");

        assert_eq!(balance_of(account), Decimal::new(5, 3));
        assert!(transcript.contains("Deposited: $0.01\n"));
        assert!(transcript.contains(
            "Error: Insufficient funds for withdrawal: balance $0.01, requested $0.01\n"
        ));
    }

    #[test]
    fn test_empty_answer_means_no() {
        let (account, transcript) = run_script("Alice\n1\n50\n\n4\n");

        assert_eq!(balance_of(account), Decimal::new(50, 0));
        assert_eq!(transcript.matches("Enter amount to deposit: ").count(), 1);
        assert!(transcript.contains("Exiting... Thank you!"));
    }

    #[test]
    fn test_view_info_prints_description() {
        let (_, transcript) = run_script("Alice\n1\n12.345\nn\n3\n4\n");

        assert!(transcript.contains(
            "Enter your choice: Account Holder: Alice\nAccount Number: 4321\nBalance: $12.35\n"
        ));
    }

    #[test]
    fn test_holder_name_taken_verbatim() {
        let (account, _) = run_script("  Ada Lovelace \n4\n");

        assert_eq!(account.unwrap().holder_name(), "  Ada Lovelace ");
    }

    #[test]
    fn test_end_of_input_before_name() {
        let (account, transcript) = run_script("");

        assert!(account.is_none());
        assert!(transcript.ends_with(
            "Please enter your name to create a new account: Input closed.\n"
        ));
    }

    #[test]
    fn test_end_of_input_mid_operation_keeps_accepted_amounts() {
        let (account, transcript) = run_script("Alice\n1\n30\ny\n");

        assert_eq!(balance_of(account), Decimal::new(30, 0));
        assert!(!transcript.contains("Exiting... Thank you!"));
        assert!(transcript.ends_with("Enter amount to deposit: Input closed.\n"));
    }

    #[test]
    fn test_input_released_on_exit() {
        let (input, released) = TrackedInput::new("Alice\n4\n");
        let mut output = Vec::new();
        let session = Session::new(input, &mut output, Box::new(FixedAccountNumber::new(4321)));

        session.run().unwrap();

        assert!(released.load(Ordering::SeqCst));
    }

    #[test]
    fn test_input_released_on_output_failure() {
        let (input, released) = TrackedInput::new("Alice\n4\n");
        let session = Session::new(input, BrokenOutput, Box::new(FixedAccountNumber::new(4321)));

        let result = session.run();

        assert!(matches!(result, Err(SessionError::Io { .. })));
        assert!(released.load(Ordering::SeqCst));
    }

    #[test]
    fn test_with_config_uses_fixed_account_number() {
        let config = SessionConfig {
            account_number: Some(9876),
            seed: None,
        };
        let mut output = Vec::new();
        let session = Session::with_config(Cursor::new(b"Bob\n4\n".to_vec()), &mut output, &config);

        let account = session.run().unwrap().unwrap();

        assert_eq!(account.account_number(), 9876);
    }
}
