//! Space Registry Errors

use lib_ledger::LedgerError;
use lib_types::{SpaceId, Timestamp};
use thiserror::Error;

/// Error during registry operations
///
/// Every variant is a synchronous, local rejection with zero observable
/// state change. Retry policy, if any, belongs to the external caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("InvalidCapacity: capacity must be greater than zero")]
    InvalidCapacity,

    #[error("InvalidTimeRange: start {start}, end {end}")]
    InvalidTimeRange { start: Timestamp, end: Timestamp },

    #[error("NotSpaceOwner: caller is not the host of space {space_id}")]
    NotSpaceOwner { space_id: SpaceId },

    #[error("Space not found: {0}")]
    SpaceNotFound(SpaceId),

    #[error("Zone capacity overflow")]
    ZoneCapacityOverflow,

    #[error("Reward amount overflow")]
    RewardOverflow,

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;
