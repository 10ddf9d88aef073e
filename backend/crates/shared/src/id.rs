//! Typed Identifiers
//!
//! Every persisted entity is keyed by a UUIDv4. `Id<Marker>` keeps a user id
//! from being passed where a review id is expected; the marker is a
//! zero-sized tag and never reaches the database or the wire.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;
use uuid::Uuid;

/// UUID tagged with the entity it identifies
///
/// ```
/// use kernel::id::{BookId, ReviewId};
///
/// let book = BookId::new();
/// let review: ReviewId = book.as_uuid().to_owned().into();
/// assert_eq!(book.as_uuid(), review.as_uuid());
/// ```
pub struct Id<Marker> {
    uuid: Uuid,
    // fn() -> Marker keeps Id Send + Sync regardless of the marker
    _entity: PhantomData<fn() -> Marker>,
}

impl<Marker> Id<Marker> {
    /// Fresh random id
    pub fn new() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    /// Wrap a UUID read from the store
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self {
            uuid,
            _entity: PhantomData,
        }
    }

    /// For binding into queries
    pub fn as_uuid(&self) -> &Uuid {
        &self.uuid
    }

    pub fn into_uuid(self) -> Uuid {
        self.uuid
    }
}

// Manual impls: derives would demand the same traits of the marker.

impl<Marker> Clone for Id<Marker> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Marker> Copy for Id<Marker> {}

impl<Marker> PartialEq for Id<Marker> {
    fn eq(&self, other: &Self) -> bool {
        self.uuid == other.uuid
    }
}

impl<Marker> Eq for Id<Marker> {}

impl<Marker> PartialOrd for Id<Marker> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Marker> Ord for Id<Marker> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.uuid.cmp(&other.uuid)
    }
}

impl<Marker> Hash for Id<Marker> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.uuid.hash(state);
    }
}

impl<Marker> Default for Id<Marker> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Marker> fmt::Debug for Id<Marker> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Id").field(&self.uuid).finish()
    }
}

impl<Marker> fmt::Display for Id<Marker> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.uuid, f)
    }
}

impl<Marker> From<Uuid> for Id<Marker> {
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}

impl<Marker> FromStr for Id<Marker> {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self::from_uuid)
    }
}

impl<Marker> Serialize for Id<Marker> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.uuid.serialize(serializer)
    }
}

impl<'de, Marker> Deserialize<'de> for Id<Marker> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Uuid::deserialize(deserializer).map(Self::from_uuid)
    }
}

/// Entity tags
pub mod markers {
    pub enum User {}
    pub enum Book {}
    pub enum Review {}
}

pub type UserId = Id<markers::User>;
pub type BookId = Id<markers::Book>;
pub type ReviewId = Id<markers::Review>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_new_ids_are_distinct() {
        let ids: HashSet<UserId> = (0..100).map(|_| UserId::new()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_uuid_roundtrip() {
        let uuid = Uuid::new_v4();
        let id = BookId::from_uuid(uuid);
        assert_eq!(id.as_uuid(), &uuid);
        assert_eq!(id.into_uuid(), uuid);
        assert_eq!(id.to_string(), uuid.to_string());
    }

    #[test]
    fn test_id_serializes_as_plain_uuid() {
        let id = ReviewId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));

        let back: ReviewId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_id_from_str_rejects_garbage() {
        assert!("not-a-uuid".parse::<UserId>().is_err());
        let id = UserId::new();
        assert_eq!(id.to_string().parse::<UserId>().unwrap(), id);
    }
}
