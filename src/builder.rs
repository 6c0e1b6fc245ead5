//! # Selection Builder
//!
//! [`Builder`] wraps a mutable reference to a [`Record`] and tracks which of its fields
//! are selected for output. Every selection method takes and returns the builder by
//! value, so calls chain the same way whether or not they can fail:
//!
//! ```rust
//! use partialjson::record;
//! use serde::Serialize;
//!
//! record! {
//!     #[derive(Debug, Default, Serialize)]
//!     pub struct Profile {
//!         pub id: u64,
//!         pub name: String,
//!         pub score: f64,
//!     }
//! }
//!
//! # fn main() -> Result<(), partialjson::PartialJsonError> {
//! let mut profile = Profile::default();
//! let json = partialjson::begin(&mut profile)
//!     .set("name", String::from("Ada"))?
//!     .use_field(Profile::FIELD_ID)
//!     .partial()
//!     .to_json_string()?;
//!
//! assert_eq!(json, r#"{"name":"Ada","id":0}"#);
//! assert_eq!(profile.name, "Ada");
//! # Ok(())
//! # }
//! ```
//!
//! # Selection Rules
//!
//! - A name is selected at most once. Its position is where it was *first* selected.
//! - [`Builder::set`] checks the name against the record. Unknown names are kept aside
//!   and make every later serialization fail with
//!   [`PartialJsonError::InvalidFields`].
//! - [`Builder::use_field`] does **not** check the name. It is meant for fields that are
//!   already populated, usually via the `FIELD_*` constants from [`record!`](crate::record).

use crate::error::{PartialJsonError, Result};
use crate::record::{short_type_name, Record};
use std::any::Any;
use tracing::{debug, warn};

/// Selects fields of a record for JSON output and optionally updates their values.
///
/// The builder holds `&'a mut R`. Updates made through [`Builder::set`] land directly
/// in the caller's record.
#[derive(Debug)]
pub struct Builder<'a, R: Record> {
    pub(crate) record: &'a mut R,
    pub(crate) selected: Vec<String>,
    pub(crate) partial: bool,
    pub(crate) invalid: Vec<String>,
}

/// Starts a builder for `record`. Shorthand for [`Builder::begin`].
pub fn begin<R: Record>(record: &mut R) -> Builder<'_, R> {
    Builder::begin(record)
}

impl<'a, R: Record> Builder<'a, R> {
    /// Creates a builder in full mode with nothing selected.
    pub fn begin(record: &'a mut R) -> Self {
        Self {
            record,
            selected: Vec::new(),
            partial: false,
            invalid: Vec::new(),
        }
    }

    /// Switches to partial mode: only selected fields are serialized.
    pub fn partial(mut self) -> Self {
        self.partial = true;
        debug!(record_type = short_type_name::<R>(), "Partial mode enabled");
        self
    }

    pub fn is_partial(&self) -> bool {
        self.partial
    }

    /// Returns `true` if `name` is currently selected.
    pub fn is_selected(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.selected.iter().position(|selected| selected == name)
    }

    /// Deselects `name`. The record's value for that field is left unchanged.
    pub fn remove(mut self, name: &str) -> Self {
        if let Some(index) = self.position(name) {
            self.selected.remove(index);
            debug!(
                record_type = short_type_name::<R>(),
                field = name,
                selected = self.selected.len(),
                "Deselected"
            );
        }
        self
    }

    /// Stores `value` in the field `name` and selects it.
    ///
    /// - Unknown `name`: remembered as invalid, the builder is returned unchanged and
    ///   serialization will fail later.
    /// - `value` not of the field's exact type: fails right away with
    ///   [`PartialJsonError::TypeMismatch`]. The record is not modified.
    /// - Setting an already selected field replaces the value and keeps its position.
    pub fn set<V: Any>(mut self, name: &str, value: V) -> Result<Self> {
        let record_type = short_type_name::<R>();

        let Some(field) = self.record.field_mut(name) else {
            warn!(record_type, field = name, "Invalid field");
            self.invalid.push(name.to_string());
            return Ok(self);
        };

        if let Err(e) = field.assign(value) {
            warn!(record_type, field = name, error = %e, "Set failed");
            return Err(e);
        }

        Ok(self.select(name))
    }

    /// Selects `name` without touching its value.
    ///
    /// The name is not checked against the record. Serializing a selection that names
    /// a missing field fails with [`PartialJsonError::UnknownField`].
    pub fn use_field(self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.select(&name)
    }

    fn select(mut self, name: &str) -> Self {
        if !self.is_selected(name) {
            self.selected.push(name.to_string());
            debug!(
                record_type = short_type_name::<R>(),
                field = name,
                selected = self.selected.len(),
                "Selected"
            );
        }
        self
    }

    /// Selected field names in output order.
    pub fn selected_fields(&self) -> &[String] {
        &self.selected
    }

    /// Names rejected by [`Builder::set`], in the order they were passed.
    pub fn invalid_fields(&self) -> &[String] {
        &self.invalid
    }

    pub fn record(&self) -> &R {
        &*self.record
    }

    /// Ends the builder and gives back the record reference.
    pub fn into_record(self) -> &'a mut R {
        self.record
    }

    /// Checks the deferred error conditions without encoding anything.
    pub(crate) fn check(&self) -> Result<()> {
        if !self.invalid.is_empty() {
            return Err(PartialJsonError::InvalidFields(self.invalid.clone()));
        }
        if self.partial {
            if let Some(missing) = self.selected.iter().find(|name| !R::has_field(name)) {
                return Err(PartialJsonError::UnknownField(missing.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    crate::record! {
        #[derive(Debug, Default, Clone, PartialEq, Serialize)]
        struct Sample {
            a: i64,
            b: String,
        }
    }

    #[test]
    fn test_begin_starts_empty_in_full_mode() {
        let mut sample = Sample::default();
        let builder = Builder::begin(&mut sample);

        assert!(!builder.is_partial());
        assert!(builder.selected_fields().is_empty());
        assert!(builder.invalid_fields().is_empty());
    }

    #[test]
    fn test_set_writes_through_to_record() {
        let mut sample = Sample::default();
        let builder = Builder::begin(&mut sample).set("a", 7_i64).unwrap();

        assert_eq!(builder.record().a, 7);
        assert!(builder.is_selected("a"));
        drop(builder);
        assert_eq!(sample.a, 7);
    }

    #[test]
    fn test_set_twice_keeps_position() {
        let mut sample = Sample::default();
        let builder = Builder::begin(&mut sample)
            .set("b", String::from("first"))
            .unwrap()
            .set("a", 1_i64)
            .unwrap()
            .set("b", String::from("second"))
            .unwrap();

        assert_eq!(builder.selected_fields(), ["b", "a"]);
        assert_eq!(builder.record().b, "second");
    }

    #[test]
    fn test_set_unknown_field_is_deferred() {
        let mut sample = Sample::default();
        let builder = Builder::begin(&mut sample)
            .set("missing", 1_i64)
            .unwrap()
            .set("a", 3_i64)
            .unwrap();

        assert_eq!(builder.invalid_fields(), ["missing"]);
        assert_eq!(builder.selected_fields(), ["a"]);
        assert!(matches!(
            builder.check(),
            Err(PartialJsonError::InvalidFields(names)) if names == ["missing"]
        ));
    }

    #[test]
    fn test_set_wrong_type_fails_fast() {
        let mut sample = Sample::default();
        let err = Builder::begin(&mut sample)
            .set("b", "not a String")
            .unwrap_err();

        assert!(matches!(
            err,
            PartialJsonError::TypeMismatch { ref field, expected: "String", .. } if field == "b"
        ));
        assert_eq!(sample.b, "");
    }

    #[test]
    fn test_use_field_is_idempotent() {
        let mut sample = Sample::default();
        let builder = Builder::begin(&mut sample)
            .use_field("a")
            .use_field("b")
            .use_field("a");

        assert_eq!(builder.selected_fields(), ["a", "b"]);
    }

    #[test]
    fn test_remove_only_deselects() {
        let mut sample = Sample::default();
        let builder = Builder::begin(&mut sample)
            .set("a", 5_i64)
            .unwrap()
            .remove("a")
            .remove("never-selected");

        assert!(!builder.is_selected("a"));
        assert_eq!(builder.record().a, 5);
    }

    #[test]
    fn test_unknown_use_field_only_matters_in_partial_mode() {
        let mut sample = Sample::default();
        let builder = Builder::begin(&mut sample).use_field("ghost");
        assert!(builder.check().is_ok());

        let builder = builder.partial();
        assert!(matches!(
            builder.check(),
            Err(PartialJsonError::UnknownField(name)) if name == "ghost"
        ));
    }
}
