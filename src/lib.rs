//! # partialjson
//!
//! > **Selective, field-level JSON serialization of a struct.**
//!
//! Wrap a record in a [`Builder`], mark the fields you want, optionally update their
//! values while marking them, then serialize either the whole record or only the
//! marked fields, in the order they were marked.
//!
//! ```rust
//! use partialjson::record;
//! use serde::Serialize;
//!
//! record! {
//!     #[derive(Debug, Default, Serialize)]
//!     pub struct MyStruct {
//!         pub a: i64,
//!         pub b: String,
//!         pub c: f64,
//!     }
//! }
//!
//! # fn main() -> Result<(), partialjson::PartialJsonError> {
//! let mut value = MyStruct::default();
//! let builder = partialjson::begin(&mut value)
//!     .set("a", 12_i64)?
//!     .set("b", String::from("testing"))?;
//!
//! assert_eq!(builder.to_json_string()?, r#"{"a":12,"b":"testing","c":0.0}"#);
//! assert_eq!(builder.partial().to_json_string()?, r#"{"a":12,"b":"testing"}"#);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture Notes
//!
//! ### 1. Field Introspection
//! Rust has no runtime reflection, so records opt in through the [`Record`] trait.
//! The [`record!`] macro generates it, which gives name lookup, a type-checked
//! mutable slot per field, and per-field serialization.
//!
//! ### 2. Two Kinds of Errors
//! - A **misspelled field** in [`Builder::set`] is *deferred*: the chain keeps going and
//!   serialization fails with [`PartialJsonError::InvalidFields`], listing every bad name.
//! - A **value of the wrong type** is *immediate*: `set` returns
//!   [`PartialJsonError::TypeMismatch`] and the record is left untouched. No coercion
//!   happens, so `12` (an `i32` literal) does not fit an `i64` field.
//!
//! ### 3. Serialization Hook
//! [`Builder`] implements [`serde::Serialize`]. Passing it to `serde_json` (or
//! embedding it inside another serializable struct) produces the full or partial
//! output. [`Builder::to_json`] does the same and reports deferred errors as typed
//! variants.
//!
//! ### 4. Observability
//! Selection changes and rejected input are logged with `tracing`.
//! See the [`tracing`](crate::tracing) module.
//!
//! ## Module Tour
//!
//! - [`builder`]: the [`Builder`] and its selection operations.
//! - [`encode`]: the `Serialize` hook and `to_json`.
//! - [`record`]: the [`Record`] trait and [`FieldMut`].
//! - [`macros`]: the [`record!`] macro.
//! - [`error`]: [`PartialJsonError`].

pub mod builder;
pub mod encode;
pub mod error;
pub mod macros;
pub mod record;
pub mod tracing;

// Re-export core types for convenience
pub use builder::{begin, Builder};
pub use error::{PartialJsonError, Result};
pub use record::{FieldMut, Record};

#[doc(hidden)]
pub use paste;
#[doc(hidden)]
pub use serde;
