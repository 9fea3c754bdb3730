//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! chain builder, mapping store, descriptor watcher
//!     → logging.rs (structured tracing events)
//!     → metrics.rs (counters, histograms via the `metrics` facade)
//! ```
//!
//! # Design Decisions
//! - Structured fields, never preformatted strings
//! - Metrics go through the facade; without an installed recorder they are no-ops
//! - The library installs nothing global; binaries call `logging::init`

pub mod logging;
pub mod metrics;
