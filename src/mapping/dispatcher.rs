//! Dispatch phase classification.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The phase of request processing a dispatch belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DispatcherType {
    /// A request arriving directly from a client.
    Request,
    /// A forward from another handler.
    Forward,
    /// An include from another handler.
    Include,
    /// An asynchronous dispatch.
    Async,
    /// An error page dispatch.
    Error,
}

impl DispatcherType {
    /// Every dispatcher type, in declaration order.
    pub const ALL: [DispatcherType; 5] = [
        DispatcherType::Request,
        DispatcherType::Forward,
        DispatcherType::Include,
        DispatcherType::Async,
        DispatcherType::Error,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DispatcherType::Request => "REQUEST",
            DispatcherType::Forward => "FORWARD",
            DispatcherType::Include => "INCLUDE",
            DispatcherType::Async => "ASYNC",
            DispatcherType::Error => "ERROR",
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for DispatcherType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing an unknown dispatcher type name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown dispatcher type '{0}' (expected REQUEST, FORWARD, INCLUDE, ASYNC or ERROR)")]
pub struct UnknownDispatcherType(pub String);

impl FromStr for DispatcherType {
    type Err = UnknownDispatcherType;

    /// Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DispatcherType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownDispatcherType(s.to_string()))
    }
}

/// A set of dispatcher types, stored as a bitmask.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DispatcherTypes(u8);

impl DispatcherTypes {
    /// The empty set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// The set applied when a mapping declares no dispatcher types.
    pub fn request_only() -> Self {
        Self(DispatcherType::Request.bit())
    }

    pub fn all() -> Self {
        DispatcherType::ALL.into_iter().collect()
    }

    pub fn insert(&mut self, dispatcher_type: DispatcherType) {
        self.0 |= dispatcher_type.bit();
    }

    pub fn contains(self, dispatcher_type: DispatcherType) -> bool {
        self.0 & dispatcher_type.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = DispatcherType> {
        DispatcherType::ALL.into_iter().filter(move |t| self.contains(*t))
    }
}

impl FromIterator<DispatcherType> for DispatcherTypes {
    fn from_iter<I: IntoIterator<Item = DispatcherType>>(iter: I) -> Self {
        let mut set = DispatcherTypes::empty();
        for dispatcher_type in iter {
            set.insert(dispatcher_type);
        }
        set
    }
}

impl fmt::Debug for DispatcherTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
