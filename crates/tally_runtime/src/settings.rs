//! Demo scenario settings

use serde::{Deserialize, Serialize};

/// Parameters of the demo scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoSettings {
    /// Single PASS increments recorded for P2
    pub pass_repeats: u32,
    /// Bulk SKIP amount recorded for P3
    pub bulk_skip: i64,
    pub fail_batch: i64,
    pub fail_batches: u32,
    /// Runs folded into the P1 running average
    pub average_iterations: u32,
    pub execution_time_per_run: i64,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            pass_repeats: 2,
            bulk_skip: 12,
            fail_batch: 2,
            fail_batches: 2,
            average_iterations: 5,
            execution_time_per_run: 3,
        }
    }
}
