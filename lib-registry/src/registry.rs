//! Space Registry Execution
//!
//! The registry owns the authoritative Space set and the per-zone aggregate
//! counters, and drives reward minting through the injected [`RewardMinter`]
//! capability.
//!
//! # Enforcement
//!
//! - **Capacity gate**: `capacity > 0` at registration
//! - **Window gate**: availability windows validated at registration and at
//!   every later update
//! - **Ownership gate**: lifecycle and availability mutations only by the
//!   Space's host
//! - **Conservation**: every registration mints exactly
//!   `capacity x reward_per_unit` to the registrant
//! - **Atomicity**: the ledger mint is the only fallible step after input
//!   validation; registry writes commit only once it has succeeded, so a
//!   failure at any point leaves all state untouched

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, info};

use lib_ledger::RewardMinter;
use lib_types::{Address, Amount, LocationHash, SpaceId, Timestamp, ZoneHash};

use crate::errors::{RegistryError, RegistryResult};
use crate::events::RegistryEvent;
use crate::space::{Availability, Space, Zone};

/// Reward minted per unit of registered capacity: one full token
/// (10^18 base units)
pub const REWARD_PER_UNIT: Amount = 1_000_000_000_000_000_000;

/// The Space/Zone registry state machine
///
/// Mutating operations are designed for a single authoritative execution
/// order: wrap the registry in [`crate::SharedSpaceRegistry`] so that id
/// assignment, zone aggregation, and minting cannot interleave.
#[derive(Debug)]
pub struct SpaceRegistry<L: RewardMinter> {
    /// Dense id -> Space map (ids assigned in creation order, never removed)
    spaces: BTreeMap<SpaceId, Space>,

    /// Zone key -> aggregate counters
    zones: HashMap<ZoneHash, Zone>,

    /// Next id to assign (equals the number of registrations so far)
    next_space_id: SpaceId,

    /// Administrative principal
    owner: Address,

    /// Principal the registry presents to the ledger when minting;
    /// must be granted the minter flag out-of-band
    registry_address: Address,

    /// Fixed reward per unit of capacity, set at initialization
    reward_per_unit: Amount,

    /// Injected minting capability
    ledger: L,

    /// Committed-operation log, drained by external subscribers
    events: Vec<RegistryEvent>,
}

impl<L: RewardMinter> SpaceRegistry<L> {
    /// Create an empty registry
    ///
    /// `registry_address` is the principal this registry presents to the
    /// ledger; registration can only succeed once that principal has been
    /// flagged as a minter.
    pub fn new(owner: Address, registry_address: Address, ledger: L) -> Self {
        Self {
            spaces: BTreeMap::new(),
            zones: HashMap::new(),
            next_space_id: 0,
            owner,
            registry_address,
            reward_per_unit: REWARD_PER_UNIT,
            ledger,
            events: Vec::new(),
        }
    }

    // ========================================================================
    // MUTATIONS
    // ========================================================================

    /// Register a new Space for `caller` and mint its reward
    ///
    /// # Errors
    /// Returns `RegistryError::InvalidCapacity` if `capacity == 0`
    /// Returns `RegistryError::InvalidTimeRange` for a bad availability window
    /// Returns `RegistryError::Ledger` if the mint is rejected
    ///
    /// Any failure aborts before a single registry mutation.
    pub fn register_space(
        &mut self,
        caller: Address,
        capacity: u64,
        zone_hash: ZoneHash,
        location_hash: LocationHash,
        start: Timestamp,
        end: Timestamp,
    ) -> RegistryResult<SpaceId> {
        if capacity == 0 {
            return Err(RegistryError::InvalidCapacity);
        }
        let availability = Availability::checked(start, end)?;

        let reward = Amount::from(capacity)
            .checked_mul(self.reward_per_unit)
            .ok_or(RegistryError::RewardOverflow)?;

        // Pre-validate the zone aggregate so nothing can fail after the mint
        let zone_total = self
            .zones
            .get(&zone_hash)
            .map(|z| z.total_capacity)
            .unwrap_or(0)
            .checked_add(capacity)
            .ok_or(RegistryError::ZoneCapacityOverflow)?;

        self.ledger.mint(self.registry_address, caller, reward)?;

        let id = self.next_space_id;
        self.next_space_id += 1;
        self.spaces.insert(
            id,
            Space {
                id,
                host: caller,
                capacity,
                used_volume: 0,
                is_active: true,
                availability,
                zone_hash,
                location_hash,
            },
        );
        self.zones.entry(zone_hash).or_default().total_capacity = zone_total;
        self.events.push(RegistryEvent::SpaceRegistered {
            space_id: id,
            host: caller,
        });

        info!(
            "registered space {} (host {:?}, capacity {}, zone {:?}), minted {}",
            id, caller, capacity, zone_hash, reward
        );
        Ok(id)
    }

    /// Deactivate a Space (host-gated; idempotent when already inactive)
    pub fn deactivate_space(&mut self, caller: Address, id: SpaceId) -> RegistryResult<()> {
        let space = self.owned_space_mut(caller, id)?;
        if !space.is_active {
            debug!("space {} already inactive", id);
            return Ok(());
        }
        space.is_active = false;
        self.events
            .push(RegistryEvent::SpaceDeactivated { space_id: id });
        info!("deactivated space {}", id);
        Ok(())
    }

    /// Reactivate a Space (host-gated; idempotent when already active)
    pub fn reactivate_space(&mut self, caller: Address, id: SpaceId) -> RegistryResult<()> {
        let space = self.owned_space_mut(caller, id)?;
        if space.is_active {
            debug!("space {} already active", id);
            return Ok(());
        }
        space.is_active = true;
        self.events
            .push(RegistryEvent::SpaceReactivated { space_id: id });
        info!("reactivated space {}", id);
        Ok(())
    }

    /// Overwrite a Space's availability window (host-gated)
    ///
    /// The new window is validated exactly as at registration; on success it
    /// replaces the stored window with no other state change.
    pub fn update_availability(
        &mut self,
        caller: Address,
        id: SpaceId,
        start: Timestamp,
        end: Timestamp,
    ) -> RegistryResult<()> {
        let space = self.owned_space_mut(caller, id)?;
        let availability = Availability::checked(start, end)?;
        space.availability = availability;
        self.events.push(RegistryEvent::AvailabilityUpdated {
            space_id: id,
            start,
            end,
        });
        info!("updated availability of space {} to {}..{}", id, start, end);
        Ok(())
    }

    /// Drain the committed-operation log
    pub fn take_events(&mut self) -> Vec<RegistryEvent> {
        std::mem::take(&mut self.events)
    }

    // ========================================================================
    // READS
    // ========================================================================

    /// Look up a Space by id
    pub fn space(&self, id: SpaceId) -> Option<&Space> {
        self.spaces.get(&id)
    }

    /// Zone aggregates `(total_capacity, used_capacity)`; zeroes for a zone
    /// key nothing was ever registered under
    pub fn zone_info(&self, zone_hash: &ZoneHash) -> (u64, u64) {
        self.zones
            .get(zone_hash)
            .map(|z| (z.total_capacity, z.used_capacity))
            .unwrap_or((0, 0))
    }

    /// Next id to be assigned (equals the registration count)
    pub const fn next_space_id(&self) -> SpaceId {
        self.next_space_id
    }

    /// Number of registered Spaces
    pub fn space_count(&self) -> usize {
        self.spaces.len()
    }

    /// Administrative principal
    pub const fn owner(&self) -> Address {
        self.owner
    }

    /// Principal presented to the ledger when minting
    pub const fn registry_address(&self) -> Address {
        self.registry_address
    }

    /// Fixed reward per unit of capacity
    pub const fn reward_per_unit(&self) -> Amount {
        self.reward_per_unit
    }

    /// Committed events not yet drained
    pub fn events(&self) -> &[RegistryEvent] {
        &self.events
    }

    /// The injected ledger (read access)
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// The injected ledger (admin access, e.g. minter flag management)
    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.ledger
    }

    // ========================================================================
    // INTERNAL
    // ========================================================================

    /// Fetch a Space mutably after the existence and ownership checks
    fn owned_space_mut(&mut self, caller: Address, id: SpaceId) -> RegistryResult<&mut Space> {
        let space = self
            .spaces
            .get_mut(&id)
            .ok_or(RegistryError::SpaceNotFound(id))?;
        if space.host != caller {
            return Err(RegistryError::NotSpaceOwner { space_id: id });
        }
        Ok(space)
    }
}
