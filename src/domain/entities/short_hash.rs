//! Short hash identifying a shortened link.

use std::fmt;

/// Opaque token taken from the request path after `/r/`.
///
/// The hash is carried exactly as it appeared on the wire, still
/// percent-encoded. No length or charset rules apply: the lookup service
/// owns the meaning of every hash, including the empty one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ShortHash(String);

impl ShortHash {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ShortHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ShortHash {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for ShortHash {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_hash_keeps_raw_text() {
        let hash = ShortHash::new("caf%C3%A9%20x");
        assert_eq!(hash.as_str(), "caf%C3%A9%20x");
        assert_eq!(hash.to_string(), "caf%C3%A9%20x");
    }

    #[test]
    fn test_short_hash_empty() {
        assert!(ShortHash::default().is_empty());
        assert!(!ShortHash::from("abc").is_empty());
    }
}
