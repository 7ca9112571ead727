use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::{DecodeError, EntityType, LocalKey};

/// Globally unique identifier of one entity: its type name plus its
/// backend-native key, reversibly packed into an opaque string.
///
/// The encoded form is the URL-safe, unpadded base64 of `"{type}:{key}"`.
/// Decoding splits on the first `:`, so keys containing `:` round trip; type
/// names cannot contain the separator, which makes the scheme collision-free
/// across distinct (type, key) pairs.
#[derive(PartialEq, Eq, Hash, Clone, PartialOrd, Ord)]
pub struct GlobalId {
    entity_type: EntityType,
    key: LocalKey,
}

impl GlobalId {
    /// Mint an id for `entity_type` with a fresh ULID key.
    pub fn new(entity_type: impl Into<EntityType>) -> Self {
        Self { entity_type: entity_type.into(), key: LocalKey::generate() }
    }

    pub fn from_parts(entity_type: impl Into<EntityType>, key: impl Into<LocalKey>) -> Self {
        Self { entity_type: entity_type.into(), key: key.into() }
    }

    pub fn entity_type(&self) -> &EntityType { &self.entity_type }

    pub fn key(&self) -> &LocalKey { &self.key }

    pub fn to_base64(&self) -> String {
        let payload = format!("{}:{}", self.entity_type, self.key);
        general_purpose::URL_SAFE_NO_PAD.encode(payload.as_bytes())
    }

    pub fn from_base64<T: AsRef<[u8]>>(input: T) -> Result<Self, DecodeError> {
        let decoded = general_purpose::URL_SAFE_NO_PAD.decode(input)?;
        let payload = String::from_utf8(decoded).map_err(|_| DecodeError::InvalidUtf8)?;

        let (entity_type, key) = payload.split_once(':').ok_or(DecodeError::MissingSeparator)?;
        if entity_type.is_empty() {
            return Err(DecodeError::EmptyType);
        }

        Ok(Self { entity_type: entity_type.into(), key: key.into() })
    }

    pub fn to_base64_short(&self) -> String {
        // take the last 6 characters of the base64 encoded string
        let value = self.to_base64();
        value[value.len().saturating_sub(6)..].to_string()
    }
}

/// Project the type component out of an encoded id without keeping the key.
///
/// Agrees with the `entity_type` of a full [`GlobalId::from_base64`] decode.
pub fn entity_type_of<T: AsRef<[u8]>>(input: T) -> Result<EntityType, DecodeError> {
    Ok(GlobalId::from_base64(input)?.entity_type)
}

impl fmt::Display for GlobalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        if f.alternate() {
            write!(f, "{}", self.to_base64_short())
        } else {
            write!(f, "{}", self.to_base64())
        }
    }
}

impl fmt::Debug for GlobalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "GlobalId({}:{})", self.entity_type, self.key) }
}

impl TryFrom<&str> for GlobalId {
    type Error = DecodeError;
    fn try_from(id: &str) -> Result<Self, Self::Error> { Self::from_base64(id) }
}

impl TryFrom<String> for GlobalId {
    type Error = DecodeError;
    fn try_from(id: String) -> Result<Self, Self::Error> { Self::try_from(id.as_str()) }
}

impl TryFrom<&String> for GlobalId {
    type Error = DecodeError;
    fn try_from(id: &String) -> Result<Self, Self::Error> { Self::try_from(id.as_str()) }
}

// Ids cross process boundaries as opaque strings, so that is also their serde
// representation.
impl Serialize for GlobalId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> { serializer.serialize_str(&self.to_base64()) }
}

impl<'de> Deserialize<'de> for GlobalId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        GlobalId::from_base64(&encoded).map_err(serde::de::Error::custom)
    }
}
