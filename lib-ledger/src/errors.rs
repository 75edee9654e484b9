//! Reward Ledger Errors

use lib_types::Address;
use thiserror::Error;

/// Error during ledger operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Unauthorized: {caller} is not a flagged minter")]
    Unauthorized { caller: Address },

    #[error("OwnableUnauthorized: {caller} is not the ledger owner")]
    OwnableUnauthorized { caller: Address },

    #[error("Arithmetic overflow")]
    Overflow,
}

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
