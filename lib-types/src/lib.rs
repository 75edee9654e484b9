//! Spacenet primitives.
//! Stable, protocol-neutral, behavior-free.
//!
//! Rule: No String identifiers in registry or ledger state. Ever.

pub mod primitives;

pub use primitives::{Address, Amount, LocationHash, SpaceId, Timestamp, ZoneHash};
