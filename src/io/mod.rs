//! I/O module
//!
//! Handles reading the interactive input stream:
//! - `token_reader`: Scanner-style line, token and answer reader
//! - `parse`: Conversion of tokens into menu choices and amounts

pub mod parse;
pub mod token_reader;

pub use parse::{is_affirmative, parse_amount, parse_menu_choice, MenuChoice};
pub use token_reader::TokenReader;
