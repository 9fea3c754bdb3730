//! Filter chain builder.
//!
//! # Responsibilities
//! - Select the mappings that apply to one dispatch
//! - Order url-matched filters before servlet-name-matched filters
//! - Resolve filter names against the table's registry
//!
//! # Design Decisions
//! - Bound to one immutable table snapshot; no locks, no blocking
//! - Synchronous and bounded by the number of mappings
//! - Unresolvable filter names are an error, never a skip

use std::sync::Arc;
use std::time::Instant;

use crate::chain::chain::Chain;
use crate::chain::error::{ChainError, ChainResult};
use crate::mapping::{DispatcherType, FilterMapping, FilterRegistration, MappingTable, MatchTarget};
use crate::matching::{name, path};
use crate::observability::metrics;

/// Per-dispatch inputs to chain construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatch<'a> {
    /// Normalized context-relative path; absent for named dispatches.
    pub request_path: Option<&'a str>,
    /// Registered name of the target handler.
    pub servlet_name: Option<&'a str>,
    pub dispatcher_type: DispatcherType,
}

impl<'a> Dispatch<'a> {
    /// A dispatch with neither path nor servlet name.
    pub fn new(dispatcher_type: DispatcherType) -> Self {
        Self {
            request_path: None,
            servlet_name: None,
            dispatcher_type,
        }
    }

    /// A direct client request for `request_path`, targeting `servlet_name`.
    pub fn request(request_path: &'a str, servlet_name: &'a str) -> Self {
        Self::new(DispatcherType::Request)
            .with_path(request_path)
            .with_servlet_name(servlet_name)
    }

    pub fn with_path(mut self, request_path: &'a str) -> Self {
        self.request_path = Some(request_path);
        self
    }

    pub fn with_servlet_name(mut self, servlet_name: &'a str) -> Self {
        self.servlet_name = Some(servlet_name);
        self
    }
}

/// Builds filter chains against one mapping table snapshot.
///
/// Cheap to clone; clones share the snapshot.
#[derive(Debug, Clone)]
pub struct ChainBuilder {
    table: Arc<MappingTable>,
}

impl ChainBuilder {
    pub fn new(table: Arc<MappingTable>) -> Self {
        Self { table }
    }

    /// The snapshot this builder reads.
    pub fn table(&self) -> &Arc<MappingTable> {
        &self.table
    }

    /// Build the chain wrapping `handler` for `dispatch`.
    ///
    /// Returns `Ok(None)` when there is no handler to wrap. Once a handler is
    /// present the result is always a chain, possibly with no filters.
    pub fn build<H>(
        &self,
        handler: Option<Arc<H>>,
        dispatch: &Dispatch<'_>,
    ) -> ChainResult<Option<Chain<H>>> {
        let Some(handler) = handler else {
            tracing::trace!(
                dispatcher = %dispatch.dispatcher_type,
                "No handler to wrap, skipping filter chain"
            );
            return Ok(None);
        };

        let start = Instant::now();
        let mut chain = Chain::new(handler);

        if self.table.is_empty() {
            metrics::record_chain_built(dispatch.dispatcher_type, 0, start);
            return Ok(Some(chain));
        }

        // Pass 1: url patterns.
        for (index, mapping) in self.table.mappings().iter().enumerate() {
            if !mapping.applies_to(dispatch.dispatcher_type) {
                continue;
            }
            let MatchTarget::Url(pattern) = mapping.target() else {
                continue;
            };
            if !path::matches(Some(pattern.as_str()), dispatch.request_path) {
                continue;
            }
            chain.push(self.resolve(index, mapping)?);
        }

        // Pass 2: servlet names.
        for (index, mapping) in self.table.mappings().iter().enumerate() {
            if !mapping.applies_to(dispatch.dispatcher_type) {
                continue;
            }
            let MatchTarget::ServletName(pattern) = mapping.target() else {
                continue;
            };
            if !name::matches(pattern, dispatch.servlet_name) {
                continue;
            }
            chain.push(self.resolve(index, mapping)?);
        }

        tracing::debug!(
            dispatcher = %dispatch.dispatcher_type,
            path = dispatch.request_path.unwrap_or("-"),
            servlet = dispatch.servlet_name.unwrap_or("-"),
            filters = chain.len(),
            "Filter chain built"
        );
        metrics::record_chain_built(dispatch.dispatcher_type, chain.len(), start);

        Ok(Some(chain))
    }

    fn resolve(&self, index: usize, mapping: &FilterMapping) -> ChainResult<Arc<FilterRegistration>> {
        match self.table.registration(mapping.filter_name()) {
            Some(registration) => Ok(Arc::clone(registration)),
            None => {
                tracing::error!(
                    filter = mapping.filter_name(),
                    mapping_index = index,
                    pattern = mapping.target().pattern(),
                    "Filter mapping references an unregistered filter"
                );
                metrics::record_integrity_failure();
                Err(ChainError::MissingRegistration {
                    filter_name: mapping.filter_name().to_string(),
                    mapping_index: index,
                })
            }
        }
    }
}
