//! Filter mapping subsystem.
//!
//! # Data Flow
//! ```text
//! DeploymentConfig (validated)
//!     → table.rs (expand mappings, index registrations by name)
//!     → MappingTable (immutable snapshot)
//!     → store.rs (ArcSwap, published atomically on redeploy)
//!     → ChainBuilder (reads one snapshot per build)
//! ```
//!
//! # Design Decisions
//! - Declaration order is the only ordering; nothing is sorted
//! - Tables are never mutated after construction, only replaced
//! - Registrations are shared via Arc so chains never copy filter data

pub mod dispatcher;
pub mod store;
pub mod table;

pub use dispatcher::{DispatcherType, DispatcherTypes};
pub use store::MappingStore;
pub use table::{FilterMapping, FilterRegistration, MappingTable, MappingTableBuilder, MatchTarget};
