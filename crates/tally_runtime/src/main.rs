//! Tally Runtime
//!
//! Records the demo scenario and prints one `GROUP_KEY:VALUE` line per
//! populated counter to stdout.

mod scenario;
mod settings;

use anyhow::Result;
use scenario::{run_scenario, PriorityCounters};
use settings::DemoSettings;
use std::io::{self, Write};

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the report
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    tracing::info!("Tally v{}", tally_metrics::VERSION);

    let settings = DemoSettings::default();
    let counters = PriorityCounters::new();
    run_scenario(&counters, &settings)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    counters.write_report(&mut out)?;
    out.flush()?;

    Ok(())
}
