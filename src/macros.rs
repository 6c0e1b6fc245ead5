//! # The `record!` Macro
//!
//! Declares a struct and implements [`Record`](crate::Record) for it, so that a
//! [`Builder`](crate::Builder) can look its fields up by name.
//!
//! For every field the macro also generates a constant `FIELD_<NAME>` holding the field
//! name. These constants are the intended argument for
//! [`Builder::use_field`](crate::Builder::use_field), which does not check names
//! itself.
//!
//! ```rust
//! use partialjson::{record, Record};
//! use serde::Serialize;
//!
//! record! {
//!     #[derive(Debug, Default, Serialize)]
//!     pub struct Item {
//!         pub sku: String,
//!         pub qty: u32,
//!     }
//! }
//!
//! assert_eq!(Item::FIELDS, ["sku", "qty"]);
//! assert_eq!(Item::FIELD_QTY, "qty");
//! assert_eq!(Item::field_type("qty"), Some("u32"));
//! ```
//!
//! The struct must implement `serde::Serialize` (normally derived) and must not rename
//! fields through serde attributes. The full-record output would then use different
//! keys from the partial output.

/// Declares a struct and implements [`Record`](crate::Record) for it.
///
/// See the [module documentation](crate::macros) for an example.
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $( $(#[$field_meta:meta])* $field_vis:vis $field:ident : $ty:ty ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $( $(#[$field_meta])* $field_vis $field : $ty, )*
        }

        impl $crate::Record for $name {
            const FIELDS: &'static [&'static str] = &[$($crate::record::unraw(stringify!($field))),*];

            fn field_type(name: &str) -> ::core::option::Option<&'static str> {
                $(
                    if name == $crate::record::unraw(stringify!($field)) {
                        return ::core::option::Option::Some(stringify!($ty));
                    }
                )*
                ::core::option::Option::None
            }

            #[allow(unused_variables)]
            fn field_mut(&mut self, name: &str) -> ::core::option::Option<$crate::FieldMut<'_>> {
                $(
                    let field = $crate::record::unraw(stringify!($field));
                    if name == field {
                        return ::core::option::Option::Some($crate::FieldMut::new(
                            field,
                            stringify!($ty),
                            &mut self.$field,
                        ));
                    }
                )*
                ::core::option::Option::None
            }

            #[allow(unused_variables)]
            fn serialize_field<M: $crate::serde::ser::SerializeMap>(
                &self,
                name: &str,
                map: &mut M,
            ) -> ::core::result::Result<bool, M::Error> {
                $(
                    let field = $crate::record::unraw(stringify!($field));
                    if name == field {
                        return map.serialize_entry(field, &self.$field).map(|()| true);
                    }
                )*
                ::core::result::Result::Ok(false)
            }
        }

        $crate::paste::paste! {
            #[allow(dead_code)]
            impl $name {
                $(
                    #[doc = concat!("Name of the `", stringify!($field), "` field.")]
                    pub const [<FIELD_ $field:upper>]: &'static str =
                        $crate::record::unraw(stringify!($field));
                )*
            }
        }
    };
}
