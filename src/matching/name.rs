//! Servlet-name matching.

/// Wildcard servlet name: selects every named servlet.
pub const ANY_SERVLET: &str = "*";

/// Returns true if `pattern` selects the servlet named `servlet_name`.
///
/// An absent servlet name never matches, not even the wildcard.
pub fn matches(pattern: &str, servlet_name: Option<&str>) -> bool {
    match servlet_name {
        Some(name) => pattern == ANY_SERVLET || pattern == name,
        None => false,
    }
}
