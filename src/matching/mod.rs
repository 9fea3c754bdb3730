//! Pattern matching subsystem.
//!
//! # Data Flow
//! ```text
//! FilterMapping (url pattern | servlet-name pattern)
//!     → path.rs (url pattern vs context-relative request path)
//!     → name.rs (servlet-name pattern vs target servlet name)
//!     → bool: mapping applies / does not apply
//! ```
//!
//! # Design Decisions
//! - Pure functions, no allocation on the hot path
//! - Absent inputs are a non-match, never an error
//! - Case-sensitive comparison everywhere
//! - No regex: four fixed url match kinds (exact, universal, path prefix, extension)

pub mod name;
pub mod path;

pub use path::UrlPatternKind;
