//! # Observability & Tracing
//!
//! The builder logs through the `tracing` crate with structured fields. Every event
//! carries `record_type` (the short name of the wrapped record type), plus `field` for
//! selection changes.
//!
//! ## What Gets Traced
//!
//! - **Selection**: `Selected`, `Deselected` and `Partial mode enabled` at `debug`.
//! - **Rejected input**: `Invalid field` and `Set failed` at `warn`.
//! - **Encoding**: `Encoded` at `debug` with `partial`, `fields` and `bytes`.
//!   `Refusing to encode` at `warn` when a deferred error blocks output, and
//!   `Encoding failed` at `warn` when `serde_json` rejects a field value.
//!
//! ## Usage Examples
//!
//! ```bash
//! # Only rejected input
//! RUST_LOG=warn cargo run -p partialjson-demo
//!
//! # Every selection and encoding
//! RUST_LOG=partialjson=debug cargo run -p partialjson-demo
//! ```
//!
//! With `RUST_LOG=debug` the demo prints lines such as:
//!
//! ```text
//! DEBUG Selected record_type="MyStruct" field="a" selected=1
//! DEBUG Selected record_type="MyStruct" field="b" selected=2
//! DEBUG Partial mode enabled record_type="MyStruct"
//! DEBUG Encoded record_type="MyStruct" partial=true fields=2 bytes=22
//! ```

/// Initializes the tracing subscriber for binaries built on this crate.
///
/// Log levels come from `RUST_LOG`. Module paths are hidden (`with_target(false)`)
/// because every event already names its `record_type`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
