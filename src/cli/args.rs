use crate::logging::LogLevel;
use crate::session::SessionConfig;
use crate::types::AccountNumber;
use clap::Parser;

/// Interactive single-account bank simulator
#[derive(Parser, Debug)]
#[command(name = "bank-account-simulator")]
#[command(about = "Interactive single-account bank simulator", long_about = None)]
pub struct CliArgs {
    /// Fixed account number for the new account
    #[arg(
        long = "account-number",
        value_name = "NUMBER",
        value_parser = clap::value_parser!(u16).range(1000..=9999),
        help = "Use this account number instead of a random one (1000-9999)"
    )]
    pub account_number: Option<AccountNumber>,

    /// Seed for the account number generator
    #[arg(
        long = "seed",
        value_name = "SEED",
        conflicts_with = "account_number",
        help = "Seed the random account number generator for reproducible runs"
    )]
    pub seed: Option<u64>,

    /// Log verbosity (events are written to stderr)
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        help = "Log level: error, warn, info, debug or trace (RUST_LOG overrides)"
    )]
    pub log_level: LogLevel,
}

impl CliArgs {
    /// Create a SessionConfig from CLI arguments
    pub fn to_session_config(&self) -> SessionConfig {
        SessionConfig {
            account_number: self.account_number,
            seed: self.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::no_options(&["program"], None, None)]
    #[case::account_number(&["program", "--account-number", "4321"], Some(4321), None)]
    #[case::seed(&["program", "--seed", "42"], None, Some(42))]
    fn test_session_config_conversion(
        #[case] args: &[&str],
        #[case] account_number: Option<AccountNumber>,
        #[case] seed: Option<u64>,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        let config = parsed.to_session_config();

        assert_eq!(config, SessionConfig { account_number, seed });
    }

    #[rstest]
    #[case::default_level(&["program"], LogLevel::Warn)]
    #[case::explicit_level(&["program", "--log-level", "debug"], LogLevel::Debug)]
    fn test_log_level_parsing(#[case] args: &[&str], #[case] expected: LogLevel) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.log_level, expected);
    }

    #[rstest]
    #[case::three_digit_number(&["program", "--account-number", "999"])]
    #[case::five_digit_number(&["program", "--account-number", "10000"])]
    #[case::non_numeric_number(&["program", "--account-number", "abcd"])]
    #[case::number_and_seed(&["program", "--account-number", "4321", "--seed", "1"])]
    #[case::invalid_level(&["program", "--log-level", "loud"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
