//! Bank Account Simulator CLI
//!
//! Interactive menu for a single in-memory bank account.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --account-number 4321
//! cargo run -- --seed 42 --log-level info
//! ```
//!
//! The program reads the holder name, menu choices and amounts from stdin
//! and writes the session text to stdout. Log events go to stderr.
//!
//! # Exit Codes
//!
//! - 0: Session ended by menu choice 4 or end of input
//! - 1: Error (stdin or stdout failed)

use bank_account_simulator::cli;
use bank_account_simulator::logging;
use bank_account_simulator::session::Session;
use std::io;
use std::process;

fn main() {
    let args = cli::parse_args();
    logging::init_tracing(args.log_level);

    let config = args.to_session_config();
    let session = Session::with_config(io::stdin().lock(), io::stdout(), &config);

    if let Err(e) = session.run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
