//! Spacenet Reward Token Ledger
//!
//! This crate defines the reward token ledger primitives.
//!
//! Registration-coupled minting is driven by `lib-registry`.
//!
//! # Key Types
//!
//! - [`RewardLedger`]: balances, minter allow-list, and total supply
//! - [`RewardMinter`]: the minting capability consumed by the registry
//! - [`LedgerError`]: typed rejection taxonomy
//!
//! # Execution
//!
//! All mutations are synchronous and all-or-nothing: a rejected call leaves
//! the ledger exactly as it was.

pub mod errors;
pub mod ledger;

pub use errors::{LedgerError, LedgerResult};
pub use ledger::{RewardLedger, RewardMinter};
