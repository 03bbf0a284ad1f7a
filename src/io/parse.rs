//! Token parsing for the interactive prompts
//!
//! Converts raw tokens into menu selections and amounts, reporting anything
//! of the wrong shape as a typed, recoverable [`SessionError`].

use crate::types::{ExpectedInput, SessionError};
use rust_decimal::Decimal;

/// Main menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// 1. Deposit Money
    Deposit,
    /// 2. Withdraw Money
    Withdraw,
    /// 3. View Balance and Account Info
    ViewInfo,
    /// 4. Exit
    Exit,
}

impl TryFrom<i64> for MenuChoice {
    type Error = SessionError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(MenuChoice::Deposit),
            2 => Ok(MenuChoice::Withdraw),
            3 => Ok(MenuChoice::ViewInfo),
            4 => Ok(MenuChoice::Exit),
            other => Err(SessionError::invalid_choice(other)),
        }
    }
}

/// Parse a menu selection token
///
/// # Errors
///
/// - `MalformedInput` if the token is not an integer
/// - `InvalidChoice` if the integer is not one of the listed options
pub fn parse_menu_choice(token: &str) -> Result<MenuChoice, SessionError> {
    let value = token
        .parse::<i64>()
        .map_err(|_| SessionError::malformed_input(token, ExpectedInput::MenuOption))?;

    MenuChoice::try_from(value)
}

/// Largest number of decimal places a [`Decimal`] can hold
const MAX_SCALE: i64 = 28;

/// Parse an amount token
///
/// Accepts integers, decimals and scientific notation. The sign is kept:
/// rejecting non-positive amounts is the account's job. The value must be
/// represented exactly; digit separators are not accepted.
///
/// # Errors
///
/// `MalformedInput` if the token is not a number, contains `_`, or has more
/// precision than a `Decimal` holds.
pub fn parse_amount(token: &str) -> Result<Decimal, SessionError> {
    let malformed = || SessionError::malformed_input(token, ExpectedInput::Amount);

    if token.contains('_') {
        return Err(malformed());
    }

    Decimal::from_str_exact(token)
        .ok()
        .or_else(|| parse_scientific(token))
        .ok_or_else(malformed)
}

/// Exact parse of `<mantissa>e<exponent>`
fn parse_scientific(token: &str) -> Option<Decimal> {
    let (mantissa, exponent) = token.split_once(['e', 'E'])?;
    let mantissa = Decimal::from_str_exact(mantissa).ok()?;
    let exponent = exponent.parse::<i64>().ok()?;

    if mantissa.is_zero() {
        return Some(Decimal::ZERO);
    }

    let scale = i64::from(mantissa.scale()).checked_sub(exponent)?;
    if scale >= 0 {
        if scale > MAX_SCALE {
            return None;
        }
        let scale = u32::try_from(scale).ok()?;
        return Decimal::try_from_i128_with_scale(mantissa.mantissa(), scale).ok();
    }

    // Beyond this every non-zero mantissa overflows.
    if -scale > MAX_SCALE + 1 {
        return None;
    }
    let mut value = Decimal::try_from_i128_with_scale(mantissa.mantissa(), 0).ok()?;
    for _ in 0..-scale {
        value = value.checked_mul(Decimal::TEN)?;
    }
    Some(value)
}

/// Whether a y/n answer means "yes"
///
/// Only a case-insensitive `y` is affirmative; every other answer, including
/// an empty one, means no.
pub fn is_affirmative(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("y")
}
