//! Route keys: the path segment identifying a routable value.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifying value of a routable, embedded verbatim as a path segment.
///
/// Defaults to the primary identifier, but a type may use any attribute
/// (a slug, a user name) instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RouteKey {
    Int(i64),
    Str(String),
}

impl RouteKey {
    /// Parse a literal key, preferring the integer form when it round-trips.
    ///
    /// `"42"` -> `Int(42)`, `"042"` -> `Str("042")`, `"hello"` -> `Str("hello")`
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<i64>() {
            Ok(n) if n.to_string() == raw => Self::Int(n),
            _ => Self::Str(raw.to_string()),
        }
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RouteKey {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for RouteKey {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<u32> for RouteKey {
    fn from(n: u32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<&str> for RouteKey {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for RouteKey {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(RouteKey::parse("42"), RouteKey::Int(42));
        assert_eq!(RouteKey::parse("-3"), RouteKey::Int(-3));
        assert_eq!(RouteKey::parse("042"), RouteKey::Str("042".into()));
        assert_eq!(RouteKey::parse("hello"), RouteKey::Str("hello".into()));
    }

    #[test]
    fn test_display_is_verbatim() {
        assert_eq!(RouteKey::Int(7).to_string(), "7");
        assert_eq!(RouteKey::from("Clifford James").to_string(), "Clifford James");
    }

    #[test]
    fn test_deserialize_untagged() {
        let keys: Vec<RouteKey> = serde_json::from_str(r#"[1, "slug"]"#).unwrap();
        assert_eq!(keys, vec![RouteKey::Int(1), RouteKey::from("slug")]);
    }
}
