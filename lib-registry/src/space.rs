//! Space and Zone Records
//!
//! A Space is a unit of storage capacity registered by a host; a Zone is the
//! aggregate bucket all Spaces sharing a zone key roll up into.
//!
//! # Invariants (Non-Negotiable)
//!
//! 1. **Capacity Invariant**: every stored Space has `capacity > 0`
//! 2. **Window Invariant**: `end - start >= MIN_AVAILABILITY_DURATION` for
//!    every stored availability window
//! 3. **Immutability**: `host`, `zone_hash`, `location_hash`, and `capacity`
//!    never change after creation; only `is_active` and `availability` are
//!    mutable, and only by the host
//! 4. **Permanence**: no deletion exists; deactivation is the only
//!    soft-removal

use serde::{Deserialize, Serialize};

use lib_types::{Address, LocationHash, SpaceId, Timestamp, ZoneHash};

use crate::errors::{RegistryError, RegistryResult};

/// Minimum availability window length (time units)
pub const MIN_AVAILABILITY_DURATION: Timestamp = 3_600;

/// Time window during which a Space is offered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    /// Window start
    pub start: Timestamp,
    /// Window end (exclusive, strictly after start)
    pub end: Timestamp,
}

impl Availability {
    /// Validate and construct an availability window
    ///
    /// # Errors
    /// Returns `RegistryError::InvalidTimeRange` if `end <= start` or the
    /// window is shorter than [`MIN_AVAILABILITY_DURATION`]
    pub fn checked(start: Timestamp, end: Timestamp) -> RegistryResult<Self> {
        if end <= start || end - start < MIN_AVAILABILITY_DURATION {
            return Err(RegistryError::InvalidTimeRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Window length in time units
    pub const fn duration(&self) -> Timestamp {
        self.end - self.start
    }
}

/// A registered storage Space
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    /// Sequential identifier (dense, assigned in creation order)
    pub id: SpaceId,
    /// Principal who registered the Space (sole lifecycle authority)
    pub host: Address,
    /// Registered capacity in storage units (immutable, always > 0)
    pub capacity: u64,
    /// Consumed volume (reserved for a future booking feature, always 0)
    pub used_volume: u64,
    /// Whether the Space is currently active
    pub is_active: bool,
    /// Offered time window
    pub availability: Availability,
    /// Zone bucket this Space rolls up into
    pub zone_hash: ZoneHash,
    /// Off-chain address store reference (written once, never read back)
    pub location_hash: LocationHash,
}

/// Per-zone aggregate counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    /// Sum of every capacity ever registered under this zone key;
    /// never decremented, not even by deactivation
    pub total_capacity: u64,
    /// Consumed capacity (reserved for a future booking feature, always 0)
    pub used_capacity: u64,
}
