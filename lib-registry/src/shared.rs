//! Shared Registry Wrapper
//!
//! The registry's correctness model assumes a single authoritative execution
//! order for mutations. The shared wrapper realizes that boundary: the
//! registry (and the ledger it owns) live behind one `RwLock`, so id
//! assignment, zone aggregation, and minting execute as one indivisible
//! transaction relative to every other mutation, while reads are served
//! concurrently against the committed snapshot.

use std::sync::Arc;
use tokio::sync::RwLock;

use lib_ledger::RewardLedger;
use lib_types::Address;

use crate::events::RegistryEventPublisher;
use crate::registry::SpaceRegistry;

/// Thread-safe handle to the registry/ledger pair
pub type SharedSpaceRegistry = Arc<RwLock<SpaceRegistry<RewardLedger>>>;

/// Create a shared registry over a pre-configured ledger
///
/// The caller is responsible for granting `registry_address` the minter flag
/// (out-of-band, via `RewardLedger::set_minter`) before or after wrapping.
pub fn new_shared_registry(
    owner: Address,
    registry_address: Address,
    ledger: RewardLedger,
) -> SharedSpaceRegistry {
    Arc::new(RwLock::new(SpaceRegistry::new(
        owner,
        registry_address,
        ledger,
    )))
}

/// Drain committed events and fan them out to subscribers
///
/// Events are drained under the write lock but published outside it, so slow
/// listeners never extend the transaction boundary.
pub async fn publish_committed(
    registry: &SharedSpaceRegistry,
    publisher: &RegistryEventPublisher,
) {
    let drained = registry.write().await.take_events();
    for event in drained {
        publisher.publish(event).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{CapturingListener, RegistryEvent};
    use crate::space::MIN_AVAILABILITY_DURATION;
    use lib_types::{LocationHash, Timestamp, ZoneHash};

    const START: Timestamp = 1_700_000_000;
    const END: Timestamp = START + MIN_AVAILABILITY_DURATION;

    fn deployed_shared() -> SharedSpaceRegistry {
        let admin = Address::new([0xaau8; 32]);
        let registry_address = Address::new([0xc0u8; 32]);
        let mut ledger = RewardLedger::new(admin);
        ledger.set_minter(admin, registry_address, true).unwrap();
        new_shared_registry(admin, registry_address, ledger)
    }

    #[tokio::test]
    async fn test_mutation_then_concurrent_reads() {
        let shared = deployed_shared();
        let host = Address::new([1u8; 32]);

        let id = shared
            .write()
            .await
            .register_space(
                host,
                100,
                ZoneHash::new([0u8; 32]),
                LocationHash::new([1u8; 32]),
                START,
                END,
            )
            .unwrap();
        assert_eq!(id, 0);

        // Two readers against the committed snapshot
        let (first, second) = tokio::join!(
            async {
                let guard = shared.read().await;
                guard.next_space_id()
            },
            async {
                let guard = shared.read().await;
                guard.zone_info(&ZoneHash::new([0u8; 32]))
            }
        );
        assert_eq!(first, 1);
        assert_eq!(second, (100, 0));
    }

    #[tokio::test]
    async fn test_publish_committed_forwards_and_drains() {
        let shared = deployed_shared();
        let host = Address::new([1u8; 32]);

        shared
            .write()
            .await
            .register_space(
                host,
                5,
                ZoneHash::new([0u8; 32]),
                LocationHash::new([1u8; 32]),
                START,
                END,
            )
            .unwrap();

        let publisher = RegistryEventPublisher::new();
        let listener = CapturingListener::new();
        let listener_ref = listener.clone();
        publisher.subscribe(Box::new(listener)).await;

        publish_committed(&shared, &publisher).await;

        assert_eq!(
            listener_ref.captured().await,
            vec![RegistryEvent::SpaceRegistered { space_id: 0, host }]
        );
        assert!(shared.read().await.events().is_empty());
    }
}
