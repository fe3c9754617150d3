use serde::{Deserialize, Serialize};
use std::fmt;

/// Name used in a key when the definition declares none
pub const UNKNOWN: &str = "unknown";

/// Lookup token `"<kind>-<name>"` identifying a definition across panels.
///
/// Names are joined verbatim, without escaping. Two anonymous definitions of
/// the same kind share a key (`query-unknown`), so the key alone cannot tell
/// them apart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionKey(String);

impl SelectionKey {
    #[must_use]
    pub fn new(kind: &str, name: Option<&str>) -> Self {
        Self(format!("{kind}-{}", name.unwrap_or(UNKNOWN)))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The kind segment (`query`, `fragment`, ...)
    #[must_use]
    pub fn kind(&self) -> &str {
        self.0.split_once('-').map_or(self.0.as_str(), |(kind, _)| kind)
    }

    /// The name segment, `unknown` for anonymous definitions
    #[must_use]
    pub fn name(&self) -> &str {
        self.0.split_once('-').map_or("", |(_, name)| name)
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SelectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SelectionKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
