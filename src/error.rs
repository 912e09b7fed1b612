//! Error type of the public API.

use thiserror::Error;

use crate::domain::types::{Amount, Operation};

/// A rejected operation. Every variant leaves the account unchanged and
/// the account stays usable for subsequent calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The requested amount was zero or negative.
    #[error("{operation} amount must be positive. Received: {amount}")]
    InvalidAmount { operation: Operation, amount: Amount },

    /// A withdrawal asked for more than the current balance holds.
    #[error("Insufficient funds. Current balance: {balance}")]
    InsufficientFunds { balance: Amount },
}

pub type Result<T> = std::result::Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_amount_message() {
        let err = LedgerError::InvalidAmount {
            operation: Operation::Deposit,
            amount: Amount::new(-100),
        };
        assert_eq!(
            err.to_string(),
            "Deposit amount must be positive. Received: -100"
        );
    }

    #[test]
    fn test_insufficient_funds_message() {
        let err = LedgerError::InsufficientFunds {
            balance: Amount::new(200),
        };
        assert_eq!(err.to_string(), "Insufficient funds. Current balance: 200");
    }
}
