//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check referential integrity (mappings reference declared filters)
//! - Reject duplicate names and malformed url patterns
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: DeploymentConfig → Result<(), Vec<ValidationError>>
//! - Runs before a descriptor is accepted into the system

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::DeploymentConfig;
use crate::matching::UrlPatternKind;

/// A semantic problem in a deployment descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("filter #{0} has an empty name")]
    EmptyFilterName(usize),

    #[error("servlet #{0} has an empty name")]
    EmptyServletName(usize),

    #[error("filter '{0}' is declared more than once")]
    DuplicateFilter(String),

    #[error("servlet '{0}' is declared more than once")]
    DuplicateServlet(String),

    #[error("filter mapping #{mapping} references undeclared filter '{filter}'")]
    UnknownFilter { mapping: usize, filter: String },

    #[error("filter mapping #{mapping} for '{filter}' has no url patterns or servlet names")]
    EmptyMapping { mapping: usize, filter: String },

    #[error("filter mapping #{mapping} has invalid url pattern '{pattern}'")]
    InvalidMappingPattern { mapping: usize, pattern: String },

    #[error("servlet '{servlet}' has invalid url pattern '{pattern}'")]
    InvalidServletPattern { servlet: String, pattern: String },
}

/// Validate a deployment descriptor, collecting every problem found.
pub fn validate_config(config: &DeploymentConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let mut filters = HashSet::new();
    for (i, filter) in config.filters.iter().enumerate() {
        if filter.name.is_empty() {
            errors.push(ValidationError::EmptyFilterName(i));
        } else if !filters.insert(filter.name.as_str()) {
            errors.push(ValidationError::DuplicateFilter(filter.name.clone()));
        }
    }

    let mut servlets = HashSet::new();
    for (i, servlet) in config.servlets.iter().enumerate() {
        if servlet.name.is_empty() {
            errors.push(ValidationError::EmptyServletName(i));
        } else if !servlets.insert(servlet.name.as_str()) {
            errors.push(ValidationError::DuplicateServlet(servlet.name.clone()));
        }
        for pattern in &servlet.url_patterns {
            if !UrlPatternKind::classify(pattern).is_valid() {
                errors.push(ValidationError::InvalidServletPattern {
                    servlet: servlet.name.clone(),
                    pattern: pattern.clone(),
                });
            }
        }
    }

    for (i, mapping) in config.filter_mappings.iter().enumerate() {
        if !filters.contains(mapping.filter.as_str()) {
            errors.push(ValidationError::UnknownFilter {
                mapping: i,
                filter: mapping.filter.clone(),
            });
        }
        if mapping.url_patterns.is_empty() && mapping.servlet_names.is_empty() {
            errors.push(ValidationError::EmptyMapping {
                mapping: i,
                filter: mapping.filter.clone(),
            });
        }
        for pattern in &mapping.url_patterns {
            if !UrlPatternKind::classify(pattern).is_valid() {
                errors.push(ValidationError::InvalidMappingPattern {
                    mapping: i,
                    pattern: pattern.clone(),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
