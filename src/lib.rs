//! Servlet filter chain construction.
//!
//! Given a dispatch (target handler, request path, servlet name, dispatcher
//! type), computes the ordered filters that wrap the handler:
//!
//! ```text
//!  deployment descriptor ──▶ config ──▶ MappingTable ──▶ MappingStore (ArcSwap)
//!                                                              │ snapshot
//!                                                              ▼
//!  dispatch ─────────────────────────────────────────────▶ ChainBuilder
//!                                                              │ matching::{path, name}
//!                                                              ▼
//!                                                   Chain { filters, handler }
//! ```
//!
//! ```
//! use std::sync::Arc;
//! use filter_chain::{ChainBuilder, Dispatch, DispatcherType, FilterRegistration, MappingTable};
//!
//! let table = MappingTable::builder()
//!     .filter(FilterRegistration::new("Auth"))
//!     .filter(FilterRegistration::new("Logger"))
//!     .url_mapping("Auth", "/*", [DispatcherType::Request])
//!     .servlet_mapping("Logger", "*", [DispatcherType::Request])
//!     .build();
//!
//! let builder = ChainBuilder::new(Arc::new(table));
//! let chain = builder
//!     .build(Some(Arc::new("Echo")), &Dispatch::request("/echo", "Echo"))
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(chain.filter_names().collect::<Vec<_>>(), ["Auth", "Logger"]);
//! ```

pub mod chain;
pub mod config;
pub mod mapping;
pub mod matching;
pub mod observability;

pub use chain::{Chain, ChainBuilder, ChainError, Dispatch};
pub use config::DeploymentConfig;
pub use mapping::{DispatcherType, FilterMapping, FilterRegistration, MappingStore, MappingTable, MatchTarget};
