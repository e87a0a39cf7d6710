//! Node and edge identifiers.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Prefix used when an auto-generated id is rendered as text.
pub const AUTO_ID_PREFIX: &str = "_:";

/// A graph-generated edge id.
///
/// The counter is private: an `AutoId` can only be obtained from a graph,
/// so caller-built keys never land in this namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AutoId(u64);

impl AutoId {
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }

    /// The raw counter value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for AutoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", AUTO_ID_PREFIX, self.0)
    }
}

/// An opaque identifier for a node or an edge.
///
/// Node and edge ids are independent spaces that share this type. Keys are
/// totally ordered (`Int < Str < Auto`), so id listings are deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Integer key.
    Int(i64),
    /// String key.
    Str(String),
    /// Id generated by a graph for an edge inserted without one.
    Auto(AutoId),
}

impl Key {
    /// Whether this key was generated by a graph.
    pub fn is_auto(&self) -> bool {
        matches!(self, Self::Auto(_))
    }

    /// The integer payload, if this is an integer key.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// The string payload, if this is a string key.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{}", n),
            Self::Str(s) => write!(f, "{}", s),
            Self::Auto(id) => write!(f, "{}", id),
        }
    }
}

/// Integers parse as `Int`, everything else is kept verbatim as `Str`.
impl FromStr for Key {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<i64>() {
            Ok(n) => Self::Int(n),
            Err(_) => Self::Str(s.to_string()),
        })
    }
}

impl From<i64> for Key {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Key {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<u32> for Key {
    fn from(n: u32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<&String> for Key {
    fn from(s: &String) -> Self {
        Self::Str(s.clone())
    }
}

impl From<&Key> for Key {
    fn from(key: &Key) -> Self {
        key.clone()
    }
}

impl From<AutoId> for Key {
    fn from(id: AutoId) -> Self {
        Self::Auto(id)
    }
}

impl PartialEq<i64> for Key {
    fn eq(&self, other: &i64) -> bool {
        matches!(self, Self::Int(n) if n == other)
    }
}

impl PartialEq<&str> for Key {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, Self::Str(s) if s == other)
    }
}

impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Int(n) => serializer.serialize_i64(*n),
            Self::Str(s) => serializer.serialize_str(s),
            Self::Auto(id) => serializer.collect_str(id),
        }
    }
}

/// Wire shape accepted for keys. There is no auto variant: a rendered auto
/// id comes back as a plain string key.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawKey {
    Int(i64),
    Str(String),
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawKey::deserialize(deserializer)? {
            RawKey::Int(n) => Self::Int(n),
            RawKey::Str(s) => Self::Str(s),
        })
    }
}
