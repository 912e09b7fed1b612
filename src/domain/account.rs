use std::io::{self, Write};

use chrono::{Local, NaiveDate};

use crate::domain::types::{Amount, Operation, Transaction};
use crate::error::{LedgerError, Result};
use crate::statement;

/// A single-holder account: a running balance plus the append-only
/// history of every accepted movement.
///
/// The balance always equals the snapshot stored on the most recently
/// appended transaction (zero when the history is empty), and never goes
/// negative: withdrawals exceeding the balance are rejected up front.
#[derive(Debug, Clone, Default)]
pub struct Account {
    balance: Amount,
    transactions: Vec<Transaction>,
}

impl Account {
    pub fn new() -> Self {
        Account {
            balance: Amount::ZERO,
            transactions: Vec::new(),
        }
    }

    /// Records a deposit dated today.
    pub fn deposit(&mut self, amount: Amount) -> Result<()> {
        self.deposit_on(amount, today())
    }

    /// Records a withdrawal dated today.
    pub fn withdraw(&mut self, amount: Amount) -> Result<()> {
        self.withdraw_on(amount, today())
    }

    /// Records a deposit with an explicit date, for backfilling history
    /// or deterministic tests. Dates are stored as given; the ledger
    /// never re-sorts by date.
    pub fn deposit_on(&mut self, amount: Amount, date: NaiveDate) -> Result<()> {
        validate_amount(Operation::Deposit, amount)?;

        self.balance += amount;
        self.transactions
            .push(Transaction::new(date, amount, self.balance));
        Ok(())
    }

    /// Records a withdrawal with an explicit date.
    pub fn withdraw_on(&mut self, amount: Amount, date: NaiveDate) -> Result<()> {
        validate_amount(Operation::Withdrawal, amount)?;

        if amount > self.balance {
            return Err(LedgerError::InsufficientFunds {
                balance: self.balance,
            });
        }

        self.balance -= amount;
        self.transactions
            .push(Transaction::new(date, -amount, self.balance));
        Ok(())
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Recorded history in insertion order, oldest first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Writes the statement into `writer`: a header line followed by one
    /// line per transaction, most recently recorded first.
    pub fn write_statement<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        statement::write_statement(writer, &self.transactions)
    }

    /// Prints the statement to stdout.
    pub fn print_statement(&self) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        let _ = self.write_statement(&mut handle);
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Deposits and withdrawals share one positivity rule, so no stored
/// transaction can carry a zero amount.
fn validate_amount(operation: Operation, amount: Amount) -> Result<()> {
    if !amount.is_positive() {
        return Err(LedgerError::InvalidAmount { operation, amount });
    }
    Ok(())
}
