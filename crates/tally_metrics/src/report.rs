//! Line-oriented `GROUP_KEY:VALUE` reporting

use crate::{Dimension, GroupedCounters};
use std::fmt;
use std::io::{self, Write};

/// One populated (group, key) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine<G, K> {
    pub group: G,
    pub key: K,
    pub value: i64,
}

impl<G: fmt::Display, K: fmt::Display> fmt::Display for ReportLine<G, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}:{}", self.group, self.key, self.value)
    }
}

impl<G: Dimension, K: Ord + Clone> GroupedCounters<G, K> {
    /// Every populated pair: groups in declaration order, keys in key order.
    pub fn report_lines(&self) -> Vec<ReportLine<G, K>> {
        self.snapshot()
            .into_iter()
            .flat_map(|(group, values)| {
                values
                    .into_iter()
                    .map(move |(key, value)| ReportLine { group, key, value })
            })
            .collect()
    }

    pub fn write_report<W: Write>(&self, out: &mut W) -> io::Result<()>
    where
        K: fmt::Display,
    {
        let lines = self.report_lines();
        tracing::debug!(lines = lines.len(), "writing report");

        for line in &lines {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}
