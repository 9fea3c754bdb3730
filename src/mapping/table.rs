//! Mapping table: ordered filter mappings plus the filter registry.
//!
//! # Responsibilities
//! - Hold filter mappings in declaration order
//! - Resolve filter names to registrations
//! - Expand multi-pattern config entries into single-pattern mappings
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(1) registration lookup via HashMap
//! - A mapping naming an unregistered filter is representable here; the
//!   loader rejects it and the chain builder reports it, never drops it

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use serde::Serialize;

use crate::config::schema::DeploymentConfig;
use crate::mapping::dispatcher::{DispatcherType, DispatcherTypes};

/// What a filter mapping is matched against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchTarget {
    /// A url pattern, matched against the request path.
    Url(String),
    /// A servlet-name pattern, matched against the target servlet name.
    ServletName(String),
}

impl MatchTarget {
    pub fn pattern(&self) -> &str {
        match self {
            MatchTarget::Url(pattern) | MatchTarget::ServletName(pattern) => pattern,
        }
    }
}

/// A single declarative rule associating a filter with one pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterMapping {
    filter_name: String,
    target: MatchTarget,
    dispatcher_types: DispatcherTypes,
}

impl FilterMapping {
    /// Create a mapping. An empty dispatcher set means `REQUEST` only.
    pub fn new(
        filter_name: impl Into<String>,
        target: MatchTarget,
        dispatcher_types: DispatcherTypes,
    ) -> Self {
        let dispatcher_types = if dispatcher_types.is_empty() {
            DispatcherTypes::request_only()
        } else {
            dispatcher_types
        };
        Self {
            filter_name: filter_name.into(),
            target,
            dispatcher_types,
        }
    }

    pub fn filter_name(&self) -> &str {
        &self.filter_name
    }

    pub fn target(&self) -> &MatchTarget {
        &self.target
    }

    pub fn dispatcher_types(&self) -> DispatcherTypes {
        self.dispatcher_types
    }

    /// Returns true if this mapping is declared for `dispatcher_type`.
    pub fn applies_to(&self, dispatcher_type: DispatcherType) -> bool {
        self.dispatcher_types.contains(dispatcher_type)
    }
}

/// A configured filter, resolved by name when building chains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterRegistration {
    /// Unique filter name.
    pub name: String,
    /// Implementation identifier, opaque to this crate.
    pub class: String,
    /// Initialization parameters handed to the filter.
    pub init_params: BTreeMap<String, String>,
    /// Whether the filter supports asynchronous processing.
    pub async_supported: bool,
}

impl FilterRegistration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            class: String::new(),
            init_params: BTreeMap::new(),
            async_supported: false,
        }
    }
}

/// Read-only snapshot of the deployed filter configuration.
#[derive(Debug, Default)]
pub struct MappingTable {
    mappings: Vec<FilterMapping>,
    registrations: HashMap<String, Arc<FilterRegistration>>,
}

impl MappingTable {
    /// Start building a table programmatically.
    pub fn builder() -> MappingTableBuilder {
        MappingTableBuilder::default()
    }

    /// Build a table from a deployment descriptor.
    ///
    /// Each `[[filter_mappings]]` entry expands to its url patterns followed
    /// by its servlet names, keeping entry order. The config is assumed to be
    /// validated already; unknown filter names are carried through as-is.
    pub fn from_config(config: &DeploymentConfig) -> Self {
        let mut builder = MappingTable::builder();

        for filter in &config.filters {
            builder = builder.filter(FilterRegistration {
                name: filter.name.clone(),
                class: filter.class.clone(),
                init_params: filter.init_params.clone(),
                async_supported: filter.async_supported,
            });
        }

        for entry in &config.filter_mappings {
            let types: DispatcherTypes = entry.dispatcher_types.iter().copied().collect();
            for pattern in &entry.url_patterns {
                builder = builder.mapping(FilterMapping::new(
                    entry.filter.as_str(),
                    MatchTarget::Url(pattern.clone()),
                    types,
                ));
            }
            for servlet_name in &entry.servlet_names {
                builder = builder.mapping(FilterMapping::new(
                    entry.filter.as_str(),
                    MatchTarget::ServletName(servlet_name.clone()),
                    types,
                ));
            }
        }

        builder.build()
    }

    /// All mappings, in declaration order.
    pub fn mappings(&self) -> &[FilterMapping] {
        &self.mappings
    }

    /// Look up a filter registration by name.
    pub fn registration(&self, filter_name: &str) -> Option<&Arc<FilterRegistration>> {
        self.registrations.get(filter_name)
    }

    pub fn filter_count(&self) -> usize {
        self.registrations.len()
    }

    /// Returns true if there are no mappings (every chain is empty).
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }
}

/// Builder for [`MappingTable`].
#[derive(Debug, Default)]
pub struct MappingTableBuilder {
    mappings: Vec<FilterMapping>,
    registrations: HashMap<String, Arc<FilterRegistration>>,
}

impl MappingTableBuilder {
    /// Register a filter. A later registration with the same name replaces
    /// the earlier one.
    pub fn filter(mut self, registration: FilterRegistration) -> Self {
        self.registrations
            .insert(registration.name.clone(), Arc::new(registration));
        self
    }

    /// Append a mapping.
    pub fn mapping(mut self, mapping: FilterMapping) -> Self {
        self.mappings.push(mapping);
        self
    }

    /// Append a url-pattern mapping.
    pub fn url_mapping(
        self,
        filter_name: &str,
        pattern: &str,
        types: impl IntoIterator<Item = DispatcherType>,
    ) -> Self {
        self.mapping(FilterMapping::new(
            filter_name,
            MatchTarget::Url(pattern.to_string()),
            types.into_iter().collect(),
        ))
    }

    /// Append a servlet-name mapping.
    pub fn servlet_mapping(
        self,
        filter_name: &str,
        servlet_name: &str,
        types: impl IntoIterator<Item = DispatcherType>,
    ) -> Self {
        self.mapping(FilterMapping::new(
            filter_name,
            MatchTarget::ServletName(servlet_name.to_string()),
            types.into_iter().collect(),
        ))
    }

    pub fn build(self) -> MappingTable {
        MappingTable {
            mappings: self.mappings,
            registrations: self.registrations,
        }
    }
}
