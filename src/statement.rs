use std::io::Write;

use crate::domain::types::Transaction;

/// Date pattern used on statement lines.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

const HEADER: &str = "Date       || Amount || Balance";

/// Writes the statement header followed by one line per transaction,
/// most recently recorded first. Rendering walks the slice in reverse;
/// storage order is never touched.
pub fn write_statement<W: Write>(
    writer: &mut W,
    transactions: &[Transaction],
) -> std::io::Result<()> {
    writeln!(writer, "{}", HEADER)?;

    for transaction in transactions.iter().rev() {
        writeln!(
            writer,
            "{} || {} || {}",
            transaction.date.format(DATE_FORMAT),
            transaction.amount,
            transaction.balance
        )?;
    }

    Ok(())
}
