//! Shared fixtures for integration tests.

use std::path::{Path, PathBuf};

use filter_chain::config::parse_config;
use filter_chain::MappingTable;

/// The Echo deployment: one path-wide auth filter, one logger on every servlet.
pub const ECHO_DESCRIPTOR: &str = r#"
[[filters]]
name = "Auth"
class = "com.example.AuthFilter"

[[filters]]
name = "Logger"
class = "com.example.LoggingFilter"

[[servlets]]
name = "Echo"
url_patterns = ["/echo"]

[[filter_mappings]]
filter = "Auth"
url_patterns = ["/*"]
dispatcher_types = ["REQUEST"]

[[filter_mappings]]
filter = "Logger"
servlet_names = ["*"]
dispatcher_types = ["REQUEST"]
"#;

/// Parse, validate and build a table from descriptor text.
#[allow(dead_code)]
pub fn table_from_toml(content: &str) -> MappingTable {
    let config = parse_config(content).expect("descriptor should be valid");
    MappingTable::from_config(&config)
}

/// Write a descriptor into `dir` and return its path.
#[allow(dead_code)]
pub fn write_descriptor(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("filters.toml");
    std::fs::write(&path, content).expect("descriptor should be writable");
    path
}
