//! Cashpoint CLI
//!
//! Command-line interface for running account operations and dispatching
//! payments.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- account --balance 1000 withdraw 300
//! cargo run -- account --id 7 --balance 0 --deposit-limit 500 deposit 250
//! cargo run -- pay --method 3 250
//! ```
//!
//! The `account` subcommand builds an account from the given opening
//! balance and applies the requested operation through the invoker,
//! printing the closing balance on success. The `pay` subcommand routes
//! the amount through the payment dispatcher using the selector code.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (rejected operation, unknown payment selector, etc.)

use cashpoint::cli;
use cashpoint::cli::{AccountAction, Command};
use cashpoint::{
    Account, DepositOperation, Invoker, Operation, PaymentDispatcher, WithdrawOperation,
};
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    match args.command {
        Command::Account(account_args) => {
            let mut account = match account_args.deposit_limit {
                Some(limit) => Account::with_deposit_limit(
                    account_args.id,
                    account_args.opening_balance,
                    limit,
                ),
                None => Account::new(account_args.id, account_args.opening_balance),
            };

            {
                let operation: Box<dyn Operation + '_> = match account_args.action {
                    AccountAction::Deposit { amount } => {
                        Box::new(DepositOperation::new(&mut account, amount))
                    }
                    AccountAction::Withdraw { amount } => {
                        Box::new(WithdrawOperation::new(&mut account, amount))
                    }
                };

                let mut invoker = Invoker::new(operation);
                if let Err(e) = invoker.trigger() {
                    eprintln!("Error: {}", e);
                    process::exit(1);
                }
            }

            println!("account {}: balance {}", account.id(), account.balance());
        }
        Command::Pay(pay_args) => {
            let dispatcher = PaymentDispatcher;

            match dispatcher.process_payment(pay_args.method, pay_args.amount) {
                Ok(true) => println!("payment of {} accepted", pay_args.amount),
                Ok(false) => {
                    eprintln!("payment of {} declined", pay_args.amount);
                    process::exit(1);
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    process::exit(1);
                }
            }
        }
    }
}
