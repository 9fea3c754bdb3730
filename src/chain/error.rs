//! Chain construction errors.

use thiserror::Error;

/// Errors that can occur while building a filter chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    /// A matching mapping names a filter with no registration. Building an
    /// incomplete chain would silently skip that filter.
    #[error("filter mapping #{mapping_index} references unregistered filter '{filter_name}'")]
    MissingRegistration {
        filter_name: String,
        mapping_index: usize,
    },
}

/// Result type for chain construction.
pub type ChainResult<T> = Result<T, ChainError>;
