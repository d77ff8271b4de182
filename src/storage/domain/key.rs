//! Store keys.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A key scoped to a kind of record, formatted `scope:id`.
///
/// # Examples
///
/// ```
/// use diceutils::storage::domain::StoreKey;
///
/// let key = StoreKey::new("status", "group-42");
/// assert_eq!(key.as_str(), "status:group-42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoreKey(String);

impl StoreKey {
    /// Creates a key for `id` within `scope`.
    #[must_use]
    pub fn new(scope: &str, id: &str) -> Self {
        Self(format!("{scope}:{id}"))
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StoreKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
