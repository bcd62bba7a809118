//! Per-field "leave unchanged" vs "set to value" wrapper
//!
//! `Option<T>` cannot tell "the caller did not mention this field" apart from
//! "the caller wants this field cleared". [`Patch`] keeps the two apart: only
//! [`Patch::Unset`] means "leave unchanged"; [`Patch::Set`] always applies its
//! value, even an empty string.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Patch<T> {
    /// Leave the current value untouched
    #[default]
    Unset,
    /// Replace the current value
    Set(T),
}

impl<T> Patch<T> {
    pub fn is_set(&self) -> bool {
        matches!(self, Patch::Set(_))
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Patch::Unset)
    }

    /// The requested value, if any
    pub fn as_set(&self) -> Option<&T> {
        match self {
            Patch::Set(value) => Some(value),
            Patch::Unset => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Patch<U> {
        match self {
            Patch::Set(value) => Patch::Set(f(value)),
            Patch::Unset => Patch::Unset,
        }
    }
}

impl<T: Clone> Patch<T> {
    /// The value a field ends up with after this patch
    pub fn resolve(&self, current: &T) -> T {
        match self {
            Patch::Set(value) => value.clone(),
            Patch::Unset => current.clone(),
        }
    }
}

impl<T> From<T> for Patch<T> {
    fn from(value: T) -> Self {
        Patch::Set(value)
    }
}

// A present field is always `Set`; absence is handled by `#[serde(default)]`
// on the containing struct. An explicit `null` is not absence and fails to
// deserialize unless `T` itself accepts null.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Patch::Set)
    }
}

// Only meaningful as a struct field with
// `skip_serializing_if = "Patch::is_unset"`: a bare `Unset` writes `null`,
// which does not deserialize back.
impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Patch::Set(value) => value.serialize(serializer),
            Patch::Unset => serializer.serialize_none(),
        }
    }
}
