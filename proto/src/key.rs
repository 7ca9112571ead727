use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// The backend-native key of one entity, rendered as text.
///
/// The codec treats the key as an opaque byte-for-byte payload: any string is
/// a legal key, including the empty string and strings containing `:`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LocalKey(String);

impl LocalKey {
    /// Mint a fresh ULID-valued key.
    pub fn generate() -> Self { LocalKey(Ulid::new().to_string()) }

    pub fn as_str(&self) -> &str { &self.0 }
}

impl From<&str> for LocalKey {
    fn from(val: &str) -> Self { LocalKey(val.to_string()) }
}

impl From<String> for LocalKey {
    fn from(val: String) -> Self { LocalKey(val) }
}

impl From<Ulid> for LocalKey {
    fn from(ulid: Ulid) -> Self { LocalKey(ulid.to_string()) }
}

impl PartialEq<str> for LocalKey {
    fn eq(&self, other: &str) -> bool { self.0 == other }
}

impl From<LocalKey> for String {
    fn from(key: LocalKey) -> Self { key.0 }
}

impl AsRef<str> for LocalKey {
    fn as_ref(&self) -> &str { &self.0 }
}

impl std::fmt::Display for LocalKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> { write!(f, "{}", self.0) }
}
