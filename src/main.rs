use std::process;

use account_ledger::domain::Account;
use account_ledger::Amount;
use chrono::NaiveDate;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Walks the account through the acceptance scenario and both rejection
/// paths, printing the resulting statement.
fn run() -> Result<(), String> {
    let mut account = Account::new();

    account
        .deposit_on(Amount::new(1000), date(2012, 1, 10)?)
        .map_err(|e| e.to_string())?;
    account
        .deposit_on(Amount::new(2000), date(2012, 1, 13)?)
        .map_err(|e| e.to_string())?;
    account
        .withdraw_on(Amount::new(500), date(2012, 1, 14)?)
        .map_err(|e| e.to_string())?;

    account.print_statement();

    println!();
    println!("Balance: {}", account.balance());
    println!("Transactions recorded: {}", account.transaction_count());

    // Both rejection paths leave the account untouched
    if let Err(e) = account.deposit(Amount::new(-100)) {
        println!("Rejected deposit: {}", e);
    }
    if let Err(e) = account.withdraw(Amount::new(1_000_000)) {
        println!("Rejected withdrawal: {}", e);
    }
    println!("Balance after rejections: {}", account.balance());

    Ok(())
}

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate, String> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| format!("Invalid date: {:04}-{:02}-{:02}", year, month, day))
}
