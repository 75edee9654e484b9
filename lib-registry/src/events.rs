//! Registry Event Emission
//!
//! Every committed mutation appends a [`RegistryEvent`] to the registry's
//! internal log; external subscribers receive drained events through the
//! [`RegistryEventPublisher`]. Listener failures are logged and never affect
//! committed registry state.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;

use lib_types::{Address, SpaceId, Timestamp};

// ============================================================================
// EVENT TYPES
// ============================================================================

/// Registry-level events emitted on committed operations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum RegistryEvent {
    /// A new Space was registered (and its reward minted)
    SpaceRegistered { space_id: SpaceId, host: Address },

    /// A Space transitioned Active -> Inactive
    SpaceDeactivated { space_id: SpaceId },

    /// A Space transitioned Inactive -> Active
    SpaceReactivated { space_id: SpaceId },

    /// A Space's availability window was overwritten
    AvailabilityUpdated {
        space_id: SpaceId,
        start: Timestamp,
        end: Timestamp,
    },
}

impl std::fmt::Display for RegistryEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryEvent::SpaceRegistered { space_id, host } => {
                write!(f, "SpaceRegistered(id={}, host={:?})", space_id, host)
            }
            RegistryEvent::SpaceDeactivated { space_id } => {
                write!(f, "SpaceDeactivated(id={})", space_id)
            }
            RegistryEvent::SpaceReactivated { space_id } => {
                write!(f, "SpaceReactivated(id={})", space_id)
            }
            RegistryEvent::AvailabilityUpdated { space_id, start, end } => {
                write!(f, "AvailabilityUpdated(id={}, {}..{})", space_id, start, end)
            }
        }
    }
}

// ============================================================================
// EVENT LISTENER TRAIT
// ============================================================================

/// Trait for entities that listen to registry events
#[async_trait]
pub trait RegistryEventListener: Send {
    /// Called for every committed registry event
    async fn on_event(&mut self, event: RegistryEvent) -> Result<()>;
}

// ============================================================================
// EVENT PUBLISHER
// ============================================================================

/// Thread-safe publisher fanning registry events out to subscribers
#[derive(Clone, Default)]
pub struct RegistryEventPublisher {
    listeners: Arc<Mutex<Vec<Box<dyn RegistryEventListener>>>>,
}

impl std::fmt::Debug for RegistryEventPublisher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryEventPublisher").finish()
    }
}

impl RegistryEventPublisher {
    /// Create a publisher with no subscribers
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to registry events
    pub async fn subscribe(&self, listener: Box<dyn RegistryEventListener>) {
        let mut listeners = self.listeners.lock().await;
        listeners.push(listener);
    }

    /// Publish an event to all subscribers
    ///
    /// A failing listener is logged and skipped; remaining listeners are
    /// still notified.
    pub async fn publish(&self, event: RegistryEvent) {
        let mut listeners = self.listeners.lock().await;
        for listener in listeners.iter_mut() {
            if let Err(e) = listener.on_event(event.clone()).await {
                tracing::warn!("registry event listener error: {}", e);
            }
        }
    }

    /// Number of subscribed listeners
    pub async fn listener_count(&self) -> usize {
        self.listeners.lock().await.len()
    }
}

// ============================================================================
// CAPTURING TEST LISTENER
// ============================================================================

/// Listener that captures events for assertions in tests
#[derive(Debug, Clone, Default)]
pub struct CapturingListener {
    /// Events captured so far
    pub events: Arc<Mutex<Vec<RegistryEvent>>>,
}

impl CapturingListener {
    /// Create an empty capturing listener
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of captured events
    pub async fn captured(&self) -> Vec<RegistryEvent> {
        self.events.lock().await.clone()
    }
}

#[async_trait]
impl RegistryEventListener for CapturingListener {
    async fn on_event(&mut self, event: RegistryEvent) -> Result<()> {
        self.events.lock().await.push(event);
        Ok(())
    }
}

// ============================================================================
// UNIT TESTS
// ============================================================================
