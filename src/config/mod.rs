//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! deployment descriptor (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → MappingTable (immutable snapshot)
//!     → MappingStore (shared via Arc by all chain builders)
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads new descriptor
//!     → validation.rs validates
//!     → new table sent to the reload loop
//!     → atomic swap inside MappingStore
//! ```
//!
//! # Design Decisions
//! - A descriptor is immutable once loaded; changes require full reload
//! - All sections have defaults to allow minimal descriptors
//! - Validation separates syntactic (serde) from semantic checks
//! - An invalid reload keeps the current table

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, load_table, parse_config, ConfigError};
pub use schema::{DeploymentConfig, FilterConfig, FilterMappingConfig, ObservabilityConfig, ServletConfig};
pub use validation::ValidationError;
