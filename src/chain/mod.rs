//! Filter chain construction subsystem.
//!
//! # Data Flow
//! ```text
//! Dispatch (handler, request path, servlet name, dispatcher type)
//!     → builder.rs
//!         pass 1: url-pattern mappings, declaration order
//!         pass 2: servlet-name mappings, declaration order
//!     → Chain (filters + terminal handler), or None without a handler
//!     → external execution engine invokes it
//! ```
//!
//! # Design Decisions
//! - Two plain linear passes; "url before name" is structural, not bookkept
//! - Every matching mapping contributes, duplicates included
//! - A mapping naming an unknown filter fails the build
//! - No caching: each build is a fresh scan of one snapshot

pub mod builder;
pub mod chain;
pub mod error;

pub use builder::{ChainBuilder, Dispatch};
pub use chain::Chain;
pub use error::ChainError;
