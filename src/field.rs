//! Tri-state optional values.
//!
//! Some Route4Me resources treat a field sent as `null` differently from a
//! field that is not sent at all: `null` clears the stored value, absence
//! leaves it untouched. [`Field`] keeps those two cases apart on both the
//! request and the response side.
//!
//! Pair it with `#[serde(default, skip_serializing_if = "Field::is_absent")]`
//! so absent values never reach the wire and missing keys deserialize as
//! [`Field::Absent`].

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A value that can be absent, explicitly null, or present.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Field<T> {
    /// The key is not on the wire.
    #[default]
    Absent,
    /// The key is on the wire with a JSON `null`.
    Null,
    /// The key is on the wire with a value.
    Value(T),
}

impl<T> Field<T> {
    /// Returns `true` for [`Field::Absent`].
    pub fn is_absent(&self) -> bool {
        matches!(self, Field::Absent)
    }

    /// Returns `true` for [`Field::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Field::Null)
    }

    /// Borrows the contained value, if any.
    pub fn as_ref(&self) -> Field<&T> {
        match self {
            Field::Absent => Field::Absent,
            Field::Null => Field::Null,
            Field::Value(v) => Field::Value(v),
        }
    }

    /// Converts into an `Option`, collapsing `Absent` and `Null` to `None`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Field::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the contained value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Field::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Field::Value(value)
    }
}

impl<T> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Field::Null, Field::Value)
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Field::Value(v) => serializer.serialize_some(v),
            Field::Absent | Field::Null => serializer.serialize_none(),
        }
    }
}

// A present key always reaches this impl; missing keys come from `Default`.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Field::from)
    }
}
