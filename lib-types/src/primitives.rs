//! Canonical Primitive Types for the Spacenet Registry
//!
//! Rule: No String identifiers in registry or ledger state. Ever.
//!
//! These types are the foundational building blocks for all registry and
//! ledger data structures. They are designed to be:
//! - Fixed-size (no dynamic allocation)
//! - Deterministically serializable
//! - Efficient to copy and compare

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// Token amounts in base units (supports up to ~340 undecillion units)
pub type Amount = u128;

/// Sequential Space identifier (dense, 0-indexed, assigned in creation order)
pub type SpaceId = u64;

/// Availability timestamps (seconds since epoch)
pub type Timestamp = u64;

// ============================================================================
// IDENTITY TYPES
// ============================================================================

/// 32-byte principal address (externally authenticated caller identity)
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize, Default)]
pub struct Address(pub [u8; 32]);

impl Address {
    /// Create a new Address from raw bytes
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Create a zeroed Address
    pub const fn zero() -> Self {
        Self([0u8; 32])
    }

    /// Get the underlying bytes
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Check if this is the zero address
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.0))
    }
}

impl From<[u8; 32]> for Address {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

// ============================================================================
// GEOGRAPHIC KEY TYPES
// ============================================================================

/// 32-byte zone key (hash of a geographic zone identifier, e.g. a city name)
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize, Default)]
pub struct ZoneHash(pub [u8; 32]);

impl ZoneHash {
    /// Create a new ZoneHash from raw bytes
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Create a zeroed ZoneHash
    pub const fn zero() -> Self {
        Self([0u8; 32])
    }

    /// Get the underlying bytes
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Check if this is the zero hash
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Debug for ZoneHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ZoneHash({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for ZoneHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.0))
    }
}

impl From<[u8; 32]> for ZoneHash {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for ZoneHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// 32-byte location key (hash reference into the off-chain address store;
/// the registry only ever writes this reference and never reads it back)
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize, Default)]
pub struct LocationHash(pub [u8; 32]);

impl LocationHash {
    /// Create a new LocationHash from raw bytes
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Create a zeroed LocationHash
    pub const fn zero() -> Self {
        Self([0u8; 32])
    }

    /// Get the underlying bytes
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Check if this is the zero hash
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Debug for LocationHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocationHash({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for LocationHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.0))
    }
}

impl From<[u8; 32]> for LocationHash {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for LocationHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_basics() {
        let addr = Address::new([3u8; 32]);
        assert!(!addr.is_zero());
        assert_eq!(addr.as_bytes(), &[3u8; 32]);

        let zero = Address::zero();
        assert!(zero.is_zero());
    }

    #[test]
    fn test_zone_hash_basics() {
        let zone = ZoneHash::new([1u8; 32]);
        assert!(!zone.is_zero());
        assert_eq!(zone.as_bytes(), &[1u8; 32]);

        let zero = ZoneHash::zero();
        assert!(zero.is_zero());
    }

    #[test]
    fn test_location_hash_basics() {
        let loc = LocationHash::new([2u8; 32]);
        assert!(!loc.is_zero());
        assert_eq!(loc.as_bytes(), &[2u8; 32]);
    }

    #[test]
    fn test_display_is_full_hex() {
        let addr = Address::new([0xabu8; 32]);
        assert_eq!(format!("{}", addr), "ab".repeat(32));

        let zone = ZoneHash::new([0x01u8; 32]);
        assert_eq!(format!("{}", zone), "01".repeat(32));
    }

    #[test]
    fn test_debug_is_truncated_hex() {
        let addr = Address::new([0xffu8; 32]);
        assert_eq!(format!("{:?}", addr), format!("Address({})", "ff".repeat(8)));
    }

    #[test]
    fn test_serialization_roundtrip() {
        let zone = ZoneHash::new([42u8; 32]);
        let serialized = bincode::serialize(&zone).unwrap();
        let deserialized: ZoneHash = bincode::deserialize(&serialized).unwrap();
        assert_eq!(zone, deserialized);

        let addr = Address::new([7u8; 32]);
        let json = serde_json::to_string(&addr).unwrap();
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(addr, back);
    }

    #[test]
    fn test_from_array() {
        let bytes = [5u8; 32];
        let zone: ZoneHash = bytes.into();
        assert_eq!(zone.0, bytes);

        let addr: Address = bytes.into();
        assert_eq!(addr.0, bytes);

        let loc: LocationHash = bytes.into();
        assert_eq!(loc.0, bytes);
    }
}
