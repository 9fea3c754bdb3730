//! Deployment descriptor schema.
//!
//! All types derive Serde traits for deserialization from TOML files.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::mapping::DispatcherType;

/// Root of a deployment descriptor.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct DeploymentConfig {
    /// Logging and metrics settings.
    pub observability: ObservabilityConfig,

    /// Filter declarations.
    pub filters: Vec<FilterConfig>,

    /// Servlet declarations (the handlers filters wrap).
    pub servlets: Vec<ServletConfig>,

    /// Filter mappings, in declaration order.
    pub filter_mappings: Vec<FilterMappingConfig>,
}

impl DeploymentConfig {
    /// Look up a declared servlet by name.
    pub fn servlet(&self, name: &str) -> Option<&ServletConfig> {
        self.servlets.iter().find(|s| s.name == name)
    }
}

/// A declared filter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FilterConfig {
    /// Unique filter name, referenced by mappings.
    pub name: String,

    /// Implementation identifier.
    #[serde(default)]
    pub class: String,

    #[serde(default)]
    pub init_params: BTreeMap<String, String>,

    #[serde(default)]
    pub async_supported: bool,
}

/// A declared servlet.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServletConfig {
    /// Unique servlet name, matched by servlet-name mappings.
    pub name: String,

    #[serde(default)]
    pub class: String,

    /// Url patterns the servlet is mapped to.
    #[serde(default)]
    pub url_patterns: Vec<String>,

    #[serde(default)]
    pub async_supported: bool,
}

/// One `[[filter_mappings]]` entry.
///
/// Expands to one mapping per url pattern, then one per servlet name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FilterMappingConfig {
    /// Name of the filter this entry applies.
    pub filter: String,

    #[serde(default)]
    pub url_patterns: Vec<String>,

    #[serde(default)]
    pub servlet_names: Vec<String>,

    /// Dispatcher types the entry applies to (default: REQUEST).
    #[serde(default)]
    pub dispatcher_types: Vec<DispatcherType>,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error), used when RUST_LOG is unset.
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
