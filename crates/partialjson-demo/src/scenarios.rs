//! The three demo scenarios, each returning the JSON it produces.

use crate::model::MyStruct;
use partialjson::PartialJsonError;
use tracing::{debug, info_span};

/// Errors surfaced by the demo scenarios.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("Scenario `{scenario}` failed: {source}")]
    Scenario {
        scenario: &'static str,
        #[source]
        source: PartialJsonError,
    },
}

fn run(
    scenario: &'static str,
    body: impl FnOnce() -> Result<String, PartialJsonError>,
) -> Result<String, DemoError> {
    let _span = info_span!("scenario", name = scenario).entered();
    let json = body().map_err(|source| DemoError::Scenario { scenario, source })?;
    debug!(%json, "Scenario finished");
    Ok(json)
}

/// Encodes only the assigned values.
///
/// Output: `{"a":12,"b":"testing"}`
pub fn assigned_only() -> Result<String, DemoError> {
    run("assigned_only", || {
        let mut value = MyStruct::default();
        partialjson::begin(&mut value)
            .set(MyStruct::FIELD_A, 12_i64)?
            .set(MyStruct::FIELD_B, String::from("testing"))?
            .partial()
            .to_json_string()
    })
}

/// Encodes the complete struct after assigning two fields.
///
/// Output: `{"a":12,"b":"testing","c":0.0}`
pub fn complete() -> Result<String, DemoError> {
    run("complete", || {
        let mut value = MyStruct::default();
        partialjson::begin(&mut value)
            .set(MyStruct::FIELD_A, 12_i64)?
            .set(MyStruct::FIELD_B, String::from("testing"))?
            .to_json_string()
    })
}

/// Encodes a predefined field without going through `set`.
///
/// Output: `{"b":"testing"}`
pub fn predefined() -> Result<String, DemoError> {
    run("predefined", || {
        let mut value = MyStruct::with_b("testing");
        partialjson::begin(&mut value)
            .use_field(MyStruct::FIELD_B)
            .partial()
            .to_json_string()
    })
}

/// Runs every scenario in order.
pub fn all() -> Result<Vec<String>, DemoError> {
    Ok(vec![assigned_only()?, complete()?, predefined()?])
}
