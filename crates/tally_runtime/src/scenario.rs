//! Test-result counting per priority level

use crate::settings::DemoSettings;
use tally_metrics::{dimension, GroupedCounters, MetricsError};

dimension! {
    /// Test priority levels
    pub enum Priority { P0, P1, P2, P3, P4, NONE }
}

dimension! {
    /// Per-priority metric keys: raw outcome tallies plus timing figures
    pub enum Outcome {
        PASS,
        FAIL,
        SKIP,
        WARN,
        EXCEPTION,
        EXECUTION_TIME,
        /// Derived: EXECUTION_TIME / PASS, rewritten after every run
        AVERAGE_EXECUTION_TIME,
    }
}

pub type PriorityCounters = GroupedCounters<Priority, Outcome>;

pub fn run_scenario(
    counters: &PriorityCounters,
    settings: &DemoSettings,
) -> Result<(), MetricsError> {
    for _ in 0..settings.pass_repeats {
        counters.increment(Priority::P2, Outcome::PASS)?;
    }

    counters.increment_by(Priority::P3, Outcome::SKIP, settings.bulk_skip)?;

    for _ in 0..settings.fail_batches {
        counters.increment_by(Priority::P4, Outcome::FAIL, settings.fail_batch)?;
    }

    for run in 0..settings.average_iterations {
        counters.with_counter(Priority::P1, |counter| {
            let passes = counter.increment(Outcome::PASS);
            let total =
                counter.increment_by(Outcome::EXECUTION_TIME, settings.execution_time_per_run);
            let average = total.checked_div(passes).unwrap_or(0);
            counter.put(Outcome::AVERAGE_EXECUTION_TIME, average);

            tracing::debug!(run, passes, total, average, "P1 running average updated");
        })?;
    }

    tracing::info!(runs = settings.average_iterations, "Scenario recorded");
    Ok(())
}
