//! Closed enumerations used as group and metric-key dimensions

use std::fmt::Display;
use std::hash::Hash;

/// A closed, enumerable set of values.
///
/// Implemented by [`dimension!`](crate::dimension) for fieldless enums.
/// `ALL` must list every value exactly once; [`GroupedCounters`](crate::GroupedCounters)
/// pre-populates one counter per entry and reports in this order.
pub trait Dimension: Copy + Eq + Ord + Hash + Display + Send + Sync + 'static {
    const ALL: &'static [Self];

    /// Name used in report lines
    fn name(&self) -> &'static str;
}
