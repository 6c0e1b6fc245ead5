//! # Builder Errors
//!
//! This module defines the error type shared by every [`Builder`](crate::Builder)
//! operation. Field-name and type errors are reported at different points:
//!
//! - [`PartialJsonError::InvalidFields`] is *collected* by [`Builder::set`](crate::Builder::set)
//!   and only reported when serialization is attempted.
//! - [`PartialJsonError::TypeMismatch`] is returned *immediately* from `set`, since a
//!   value of the wrong type is a contract violation at the call site.

/// Errors produced while selecting fields or encoding a [`Builder`](crate::Builder).
#[derive(Debug, thiserror::Error)]
pub enum PartialJsonError {
    /// One or more names passed to `set` do not exist on the record.
    #[error("Invalid struct fields: {0:?}")]
    InvalidFields(Vec<String>),

    /// The value passed to `set` does not have the field's declared type.
    #[error("Type mismatch for field `{field}`: expected `{expected}`, got `{found}`")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A name selected through `use_field` does not exist on the record.
    #[error("Selected field not found on record: {0}")]
    UnknownField(String),

    /// The JSON encoder failed on a field value.
    #[error("Encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Convenience alias used across the crate.
pub type Result<T, E = PartialJsonError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_fields_lists_every_name() {
        let err = PartialJsonError::InvalidFields(vec!["Foo".into(), "bar".into()]);
        assert_eq!(err.to_string(), r#"Invalid struct fields: ["Foo", "bar"]"#);
    }

    #[test]
    fn test_type_mismatch_names_both_types() {
        let err = PartialJsonError::TypeMismatch {
            field: "a".into(),
            expected: "i64",
            found: "&str",
        };
        assert_eq!(
            err.to_string(),
            "Type mismatch for field `a`: expected `i64`, got `&str`"
        );
    }
}
