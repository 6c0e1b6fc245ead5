//! The record type used by every demo scenario.

use partialjson::record;
use serde::Serialize;

record! {
    /// A small record with one integer, one string and one float field.
    #[derive(Debug, Default, Clone, PartialEq, Serialize)]
    pub struct MyStruct {
        pub a: i64,
        pub b: String,
        pub c: f64,
    }
}

impl MyStruct {
    /// Creates a record with only `b` populated.
    pub fn with_b(b: impl Into<String>) -> Self {
        Self {
            b: b.into(),
            ..Self::default()
        }
    }
}
