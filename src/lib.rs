//! Single-account ledger: deposits, withdrawals and a reverse-chronological
//! account statement.

pub mod domain;
pub mod error;
pub mod statement;

pub use domain::{Account, Amount, Transaction};
pub use error::LedgerError;
