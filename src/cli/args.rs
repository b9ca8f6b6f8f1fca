use crate::types::{AccountId, SelectorCode};
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;

/// Run account operations and dispatch payments
#[derive(Parser, Debug)]
#[command(name = "cashpoint")]
#[command(about = "Run account operations and dispatch payments", long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply a deposit or withdrawal to an account
    Account(AccountArgs),

    /// Dispatch a payment by selector code
    Pay(PayArgs),
}

/// Arguments for the `account` subcommand
#[derive(Args, Debug)]
pub struct AccountArgs {
    /// Account identifier
    #[arg(long, value_name = "ID", default_value_t = 1)]
    pub id: AccountId,

    /// Opening balance before the operation runs
    #[arg(long = "balance", value_name = "AMOUNT")]
    pub opening_balance: Decimal,

    /// Per-deposit ceiling (default: 10000)
    #[arg(long = "deposit-limit", value_name = "AMOUNT")]
    pub deposit_limit: Option<Decimal>,

    #[command(subcommand)]
    pub action: AccountAction,
}

/// The operation to apply to the account
#[derive(Subcommand, Debug)]
pub enum AccountAction {
    /// Add the amount to the balance
    Deposit {
        /// Amount to deposit
        #[arg(value_name = "AMOUNT")]
        amount: Decimal,
    },

    /// Remove the amount from the balance
    Withdraw {
        /// Amount to withdraw
        #[arg(value_name = "AMOUNT")]
        amount: Decimal,
    },
}

/// Arguments for the `pay` subcommand
#[derive(Args, Debug)]
pub struct PayArgs {
    /// Payment method selector (1 = credit card, 2 = debit card, 3 = cash)
    #[arg(
        long = "method",
        value_name = "CODE",
        allow_negative_numbers = true,
        help = "Payment method selector: 1 = credit card, 2 = debit card, 3 = cash"
    )]
    pub method: SelectorCode,

    /// Amount to pay
    #[arg(value_name = "AMOUNT")]
    pub amount: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::deposit(&["cashpoint", "account", "--balance", "100", "deposit", "50"], Decimal::new(50, 0))]
    #[case::withdraw(&["cashpoint", "account", "--balance", "100", "withdraw", "30"], Decimal::new(30, 0))]
    #[case::fractional(&["cashpoint", "account", "--balance", "100", "deposit", "0.25"], Decimal::new(25, 2))]
    fn test_account_action_parsing(#[case] args: &[&str], #[case] expected_amount: Decimal) {
        let parsed = CliArgs::try_parse_from(args).unwrap();

        let Command::Account(account) = parsed.command else {
            panic!("Expected account subcommand");
        };
        let amount = match account.action {
            AccountAction::Deposit { amount } => amount,
            AccountAction::Withdraw { amount } => amount,
        };
        assert_eq!(amount, expected_amount);
    }

    #[test]
    fn test_account_defaults_and_overrides() {
        let parsed = CliArgs::try_parse_from([
            "cashpoint",
            "account",
            "--id",
            "7",
            "--balance",
            "1000",
            "--deposit-limit",
            "500",
            "deposit",
            "50",
        ])
        .unwrap();

        let Command::Account(account) = parsed.command else {
            panic!("Expected account subcommand");
        };
        assert_eq!(account.id, 7);
        assert_eq!(account.opening_balance, Decimal::new(1000, 0));
        assert_eq!(account.deposit_limit, Some(Decimal::new(500, 0)));
    }

    #[test]
    fn test_account_id_defaults_to_one() {
        let parsed =
            CliArgs::try_parse_from(["cashpoint", "account", "--balance", "0", "deposit", "1"])
                .unwrap();

        let Command::Account(account) = parsed.command else {
            panic!("Expected account subcommand");
        };
        assert_eq!(account.id, 1);
        assert_eq!(account.deposit_limit, None);
    }

    #[rstest]
    #[case::cash(&["cashpoint", "pay", "--method", "3", "250"], 3)]
    #[case::credit_card(&["cashpoint", "pay", "--method", "1", "100"], 1)]
    #[case::negative_selector(&["cashpoint", "pay", "--method", "-1", "100"], -1)]
    fn test_pay_parsing(#[case] args: &[&str], #[case] expected_method: SelectorCode) {
        let parsed = CliArgs::try_parse_from(args).unwrap();

        let Command::Pay(pay) = parsed.command else {
            panic!("Expected pay subcommand");
        };
        assert_eq!(pay.method, expected_method);
    }

    #[rstest]
    #[case::no_subcommand(&["cashpoint"])]
    #[case::missing_balance(&["cashpoint", "account", "deposit", "50"])]
    #[case::missing_amount(&["cashpoint", "account", "--balance", "100", "deposit"])]
    #[case::missing_method(&["cashpoint", "pay", "250"])]
    #[case::malformed_amount(&["cashpoint", "pay", "--method", "3", "abc"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
