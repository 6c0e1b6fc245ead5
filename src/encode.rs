//! # JSON Encoding
//!
//! The builder's serialization hook. [`Builder`] implements [`serde::Serialize`], so
//! any serde encoder, `serde_json` in particular, calls into it instead of
//! looking at the builder's own fields:
//!
//! - **Full mode**: the record's own `Serialize` implementation, unchanged.
//! - **Partial mode**: a map containing the selected fields, in selection order, with
//!   values read from the record at encoding time.
//!
//! Deferred errors (invalid or unknown field names) are reported before anything is
//! written, so a failed encoding never yields partial output.

use crate::builder::Builder;
use crate::error::Result;
use crate::record::{short_type_name, Record};
use serde::ser::{Error as _, SerializeMap};
use serde::{Serialize, Serializer};
use tracing::{debug, warn};

impl<R: Record> Serialize for Builder<'_, R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.check_logged().map_err(S::Error::custom)?;

        if !self.partial {
            return self.record.serialize(serializer);
        }

        let mut map = serializer.serialize_map(Some(self.selected.len()))?;
        for name in &self.selected {
            if !self.record.serialize_field(name, &mut map)? {
                // Only reachable when a hand-written `Record` lists a name in
                // `FIELDS` that `serialize_field` does not know.
                return Err(S::Error::custom(format!(
                    "Selected field not found on record: {name}"
                )));
            }
        }
        map.end()
    }
}

impl<R: Record> Builder<'_, R> {
    /// Encodes the builder as JSON bytes.
    ///
    /// Deferred errors come back as their own [`PartialJsonError`](crate::PartialJsonError)
    /// variants rather than as an opaque encoder error.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        self.encode_with(serde_json::to_vec)
    }

    /// Encodes the builder as a JSON string.
    pub fn to_json_string(&self) -> Result<String> {
        self.encode_with(serde_json::to_string)
    }

    fn encode_with<T: AsRef<[u8]>>(
        &self,
        encode: impl FnOnce(&Self) -> serde_json::Result<T>,
    ) -> Result<T> {
        let record_type = short_type_name::<R>();
        self.check_logged()?;

        let out = encode(self).map_err(|e| {
            warn!(record_type, error = %e, "Encoding failed");
            e
        })?;
        debug!(
            record_type,
            partial = self.partial,
            fields = self.selected.len(),
            bytes = out.as_ref().len(),
            "Encoded"
        );
        Ok(out)
    }

    /// Runs the deferred checks, logging the refusal when they fail.
    fn check_logged(&self) -> Result<()> {
        self.check().map_err(|e| {
            warn!(record_type = short_type_name::<R>(), error = %e, "Refusing to encode");
            e
        })
    }
}
