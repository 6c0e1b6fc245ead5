//! # partialjson Demo
//!
//! Prints the output of the three scenarios in [`scenarios`]:
//! 1.  Partial encoding of values assigned with `set`.
//! 2.  Full encoding of the same record.
//! 3.  Partial encoding of a pre-populated field selected with `use_field`.
//!
//! ```bash
//! RUST_LOG=debug cargo run -p partialjson-demo
//! ```

use partialjson::tracing::setup_tracing;
use partialjson_demo::scenarios;
use tracing::{error, info};

fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting partialjson demo");

    let outputs = scenarios::all().map_err(|e| {
        error!(error = %e, "Demo failed");
        e.to_string()
    })?;

    for json in &outputs {
        println!("{json}");
    }

    info!(scenarios = outputs.len(), "Demo completed successfully");
    Ok(())
}
