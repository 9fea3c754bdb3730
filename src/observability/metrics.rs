//! Metrics collection.
//!
//! # Metrics
//! - `filter_chain_builds_total` (counter): chains built, by dispatcher type
//! - `filter_chain_length` (histogram): filters per built chain
//! - `filter_chain_build_duration_seconds` (histogram): time spent scanning mappings
//! - `filter_chain_integrity_failures_total` (counter): builds failed on an unregistered filter
//! - `filter_chain_reloads_total` (counter): descriptor reloads, by outcome

use std::time::Instant;

use metrics::{counter, histogram};

use crate::mapping::DispatcherType;

/// Record a successfully built chain.
pub fn record_chain_built(dispatcher_type: DispatcherType, filters: usize, start: Instant) {
    counter!("filter_chain_builds_total", "dispatcher" => dispatcher_type.as_str()).increment(1);
    histogram!("filter_chain_length").record(filters as f64);
    histogram!("filter_chain_build_duration_seconds").record(start.elapsed().as_secs_f64());
}

/// Record a build rejected for referencing an unregistered filter.
pub fn record_integrity_failure() {
    counter!("filter_chain_integrity_failures_total").increment(1);
}

/// Record a descriptor reload attempt.
pub fn record_reload(applied: bool) {
    let outcome = if applied { "applied" } else { "rejected" };
    counter!("filter_chain_reloads_total", "outcome" => outcome).increment(1);
}
