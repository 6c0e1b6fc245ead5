//! # Record Trait
//!
//! The `Record` trait is the runtime field introspection a [`Builder`](crate::Builder)
//! relies on. A record exposes its field names, hands out a typed mutable slot for a
//! field by name, and can serialize a single field into an open JSON object.
//!
//! # Architecture Note
//! Rust has no reflection, so the lookup compares against field names generated by
//! the [`record!`](crate::record) macro. Mutation goes through [`FieldMut`], which
//! wraps the field as `&mut dyn Any` and only accepts a value whose concrete type is
//! exactly the declared one. Nothing is coerced.
//!
//! Implementing the trait by hand is possible but rarely needed:
//!
//! ```rust
//! use partialjson::{FieldMut, Record};
//! use serde::ser::SerializeMap;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Point { x: i32 }
//!
//! impl Record for Point {
//!     const FIELDS: &'static [&'static str] = &["x"];
//!
//!     fn field_type(name: &str) -> Option<&'static str> {
//!         (name == "x").then_some("i32")
//!     }
//!
//!     fn field_mut(&mut self, name: &str) -> Option<FieldMut<'_>> {
//!         match name {
//!             "x" => Some(FieldMut::new("x", "i32", &mut self.x)),
//!             _ => None,
//!         }
//!     }
//!
//!     fn serialize_field<M: SerializeMap>(&self, name: &str, map: &mut M) -> Result<bool, M::Error> {
//!         match name {
//!             "x" => map.serialize_entry("x", &self.x).map(|_| true),
//!             _ => Ok(false),
//!         }
//!     }
//! }
//! ```

use crate::error::PartialJsonError;
use serde::ser::SerializeMap;
use serde::Serialize;
use std::any::Any;

/// A struct whose fields can be looked up, assigned and serialized by name.
///
/// The full-record encoding is the type's own [`Serialize`] implementation, so the
/// names in [`Record::FIELDS`] must match the keys that implementation emits.
pub trait Record: Serialize {
    /// Field names in declaration order.
    const FIELDS: &'static [&'static str];

    /// Returns `true` if the record declares a field called `name`.
    fn has_field(name: &str) -> bool {
        Self::FIELDS.contains(&name)
    }

    /// The declared type of `name`, as written in the struct definition.
    fn field_type(name: &str) -> Option<&'static str>;

    /// A typed mutable slot for `name`, or `None` if there is no such field.
    fn field_mut(&mut self, name: &str) -> Option<FieldMut<'_>>;

    /// Writes `name` and the field's current value as one entry of `map`.
    ///
    /// Returns `Ok(false)` without writing anything if the field does not exist.
    fn serialize_field<M: SerializeMap>(&self, name: &str, map: &mut M)
        -> Result<bool, M::Error>;
}

/// A mutable, type-checked reference to one field of a [`Record`].
pub struct FieldMut<'a> {
    name: &'static str,
    declared: &'static str,
    slot: &'a mut dyn Any,
}

impl<'a> FieldMut<'a> {
    /// Wraps `slot` as the field `name` of declared type `declared`.
    pub fn new(name: &'static str, declared: &'static str, slot: &'a mut dyn Any) -> Self {
        Self {
            name,
            declared,
            slot,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn declared_type(&self) -> &'static str {
        self.declared
    }

    /// Stores `value` in the field.
    ///
    /// Fails with [`PartialJsonError::TypeMismatch`] and leaves the field untouched
    /// unless `V` is exactly the field's type.
    pub fn assign<V: Any>(self, value: V) -> Result<(), PartialJsonError> {
        match self.slot.downcast_mut::<V>() {
            Some(target) => {
                *target = value;
                Ok(())
            }
            None => Err(PartialJsonError::TypeMismatch {
                field: self.name.to_string(),
                expected: self.declared,
                found: std::any::type_name::<V>(),
            }),
        }
    }
}

/// Strips the `r#` prefix of a raw identifier, giving the key serde derives for it.
#[doc(hidden)]
pub const fn unraw(ident: &'static str) -> &'static str {
    match ident.as_bytes() {
        [b'r', b'#', rest @ ..] => match std::str::from_utf8(rest) {
            Ok(name) => name,
            Err(_) => ident,
        },
        _ => ident,
    }
}

/// Short type name used as the `record_type` field in logs.
///
/// Strips the module path, e.g. `"app::model::User"` becomes `"User"`.
pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_accepts_exact_type() {
        let mut value: i64 = 0;
        FieldMut::new("a", "i64", &mut value).assign(42_i64).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_assign_rejects_other_type() {
        let mut value = String::from("keep");
        let err = FieldMut::new("b", "String", &mut value)
            .assign("replace")
            .unwrap_err();

        match err {
            PartialJsonError::TypeMismatch {
                field,
                expected,
                found,
            } => {
                assert_eq!(field, "b");
                assert_eq!(expected, "String");
                assert_eq!(found, "&str");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(value, "keep");
    }

    #[test]
    fn test_unraw_strips_raw_prefix_only() {
        assert_eq!(unraw("r#type"), "type");
        assert_eq!(unraw("rate"), "rate");
        assert_eq!(unraw("r"), "r");
    }

    #[test]
    fn test_short_type_name_strips_path() {
        assert_eq!(short_type_name::<String>(), "String");
        assert_eq!(short_type_name::<Vec<u8>>(), "Vec");
    }
}
