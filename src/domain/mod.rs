pub mod account;
pub mod types;

pub use account::Account;
pub use types::{Amount, Transaction};
