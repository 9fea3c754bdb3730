//! URL pattern matching.
//!
//! # Responsibilities
//! - Decide whether a filter url pattern applies to a request path
//! - Classify url patterns for validation and diagnostics
//!
//! # Match Kinds (evaluated in order)
//! 1. Exact: pattern equals the path
//! 2. Universal: `/*`
//! 3. Path prefix: `/foo/*` matches `/foo` and anything under `/foo/`
//! 4. Extension: `*.jsp` matches a last segment ending in `.jsp`
//!
//! Anything else never matches. The "default" servlet pattern `/` only
//! matches the path `/` exactly; it has no special meaning for filters.

/// Returns true if `pattern` selects `request_path`.
///
/// Both inputs are optional: named dispatches carry no path, and a mapping
/// may have no url pattern. Either one missing is a non-match.
pub fn matches(pattern: Option<&str>, request_path: Option<&str>) -> bool {
    let Some(path) = request_path else {
        return false;
    };
    let Some(pattern) = pattern else {
        return false;
    };

    if pattern == path {
        return true;
    }

    if pattern == "/*" {
        return true;
    }

    if let Some(base) = pattern.strip_suffix("/*") {
        // `base` is the pattern without its trailing "/*"; the path must either
        // end right there or continue with a '/' at that same offset.
        if !path.starts_with(base) {
            return false;
        }
        return path.len() == base.len() || path.as_bytes()[base.len()] == b'/';
    }

    if let Some(extension) = pattern.strip_prefix("*.") {
        return extension_matches(extension, path);
    }

    false
}

fn extension_matches(extension: &str, path: &str) -> bool {
    let (Some(slash), Some(period)) = (path.rfind('/'), path.rfind('.')) else {
        return false;
    };
    if period < slash || period == path.len() - 1 {
        return false;
    }
    &path[period + 1..] == extension
}

/// Classification of a url pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlPatternKind {
    /// Matches one path exactly (`/echo`, `/`, or the empty context root).
    Exact,
    /// `/*`, matches every request path.
    Universal,
    /// `/foo/*`
    PathPrefix,
    /// `*.ext`
    Extension,
    /// Not a well-formed url pattern. Such a pattern can still match by
    /// exact equality, so the loader rejects it up front.
    Invalid,
}

impl UrlPatternKind {
    /// Classify a url pattern.
    pub fn classify(pattern: &str) -> Self {
        if pattern.is_empty() {
            return UrlPatternKind::Exact;
        }
        if pattern == "/*" {
            return UrlPatternKind::Universal;
        }
        if let Some(base) = pattern.strip_suffix("/*") {
            if base.starts_with('/') && !base.contains('*') {
                return UrlPatternKind::PathPrefix;
            }
            return UrlPatternKind::Invalid;
        }
        if let Some(extension) = pattern.strip_prefix("*.") {
            if !extension.is_empty() && !extension.contains(['/', '*']) {
                return UrlPatternKind::Extension;
            }
            return UrlPatternKind::Invalid;
        }
        if pattern.starts_with('/') && !pattern.contains('*') {
            return UrlPatternKind::Exact;
        }
        UrlPatternKind::Invalid
    }

    /// Returns false for [`UrlPatternKind::Invalid`].
    pub fn is_valid(self) -> bool {
        self != UrlPatternKind::Invalid
    }
}

impl std::fmt::Display for UrlPatternKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            UrlPatternKind::Exact => "exact",
            UrlPatternKind::Universal => "universal",
            UrlPatternKind::PathPrefix => "path-prefix",
            UrlPatternKind::Extension => "extension",
            UrlPatternKind::Invalid => "invalid",
        };
        f.write_str(kind)
    }
}
