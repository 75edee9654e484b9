//! Spacenet Space/Zone Registry
//!
//! Authoritative set of Space records and per-zone aggregate capacity
//! counters, coupled to the reward token ledger: every successful
//! registration mints `capacity x reward_per_unit` to the registrant.
//!
//! # Key Types
//!
//! - [`SpaceRegistry`]: the registry state machine (validation, ownership
//!   gating, zone accounting, reward minting)
//! - [`Space`] / [`Zone`]: the persisted records
//! - [`RegistryEvent`]: committed-operation notifications
//! - [`SharedSpaceRegistry`]: thread-safe wrapper realizing the single-writer
//!   transaction boundary
//!
//! # Execution
//!
//! Every public mutation is all-or-nothing: a validation failure or a ledger
//! rejection leaves registry state, ledger state, and the event log exactly
//! as they were before the call.

pub mod errors;
pub mod events;
pub mod registry;
pub mod shared;
pub mod space;

pub use errors::{RegistryError, RegistryResult};
pub use events::{RegistryEvent, RegistryEventListener, RegistryEventPublisher};
pub use registry::{SpaceRegistry, REWARD_PER_UNIT};
pub use shared::{new_shared_registry, SharedSpaceRegistry};
pub use space::{Availability, Space, Zone, MIN_AVAILABILITY_DURATION};
