//! Versioned mapping table snapshots.
//!
//! # Responsibilities
//! - Hold the currently deployed table
//! - Hand out lock-free snapshots to chain builders
//! - Publish redeployed tables atomically
//!
//! # Design Decisions
//! - `ArcSwap` instead of `RwLock`: readers never block a redeploy and vice versa
//! - A builder keeps the snapshot it was created from; it never sees a
//!   half-applied redeploy
//! - Generation counter lets callers detect that a redeploy happened

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use arc_swap::ArcSwap;
use tokio::sync::mpsc;

use crate::chain::ChainBuilder;
use crate::mapping::table::MappingTable;
use crate::observability::metrics;

/// Holder of the current [`MappingTable`].
#[derive(Debug)]
pub struct MappingStore {
    current: ArcSwap<MappingTable>,
    generation: AtomicU64,
}

impl MappingStore {
    /// Create a store with an initial table at generation 0.
    pub fn new(table: MappingTable) -> Self {
        Self {
            current: ArcSwap::from_pointee(table),
            generation: AtomicU64::new(0),
        }
    }

    /// The current table.
    pub fn snapshot(&self) -> Arc<MappingTable> {
        self.current.load_full()
    }

    /// A chain builder bound to the current table.
    pub fn builder(&self) -> ChainBuilder {
        ChainBuilder::new(self.snapshot())
    }

    /// Replace the current table. Returns the new generation.
    pub fn publish(&self, table: MappingTable) -> u64 {
        let mappings = table.len();
        self.current.store(Arc::new(table));
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        tracing::info!(generation, mappings, "Mapping table published");
        generation
    }

    /// Number of tables published since creation.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }
}

/// Publish every table received on `updates` until the sender side closes.
pub async fn run_reload_loop(store: Arc<MappingStore>, mut updates: mpsc::UnboundedReceiver<MappingTable>) {
    while let Some(table) = updates.recv().await {
        store.publish(table);
        metrics::record_reload(true);
    }
    tracing::debug!("Mapping table update channel closed");
}
