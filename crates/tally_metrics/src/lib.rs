//! Tally Metrics - Grouped counters for "m x n" metric spaces
//!
//! Counts labeled events across a small, closed set of groups, where every
//! group owns its own [`Counter`] keyed by a second dimension. Counting test
//! results per priority level is the canonical case: `P1_PASS`, `P1_FAIL`,
//! `P2_PASS`, ...
//!
//! # Usage
//!
//! ```
//! use tally_metrics::{dimension, GroupedCounters};
//!
//! dimension! {
//!     pub enum Region { USA, EUROPE, ASIA }
//! }
//!
//! dimension! {
//!     pub enum State { RUNNING, STOPPED }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let counters = GroupedCounters::<Region, State>::new();
//!     counters.increment(Region::USA, State::RUNNING)?;
//!     counters.increment_by(Region::ASIA, State::STOPPED, 2)?;
//!
//!     let mut out = Vec::new();
//!     counters.write_report(&mut out)?;
//!     assert_eq!(String::from_utf8(out)?, "USA_RUNNING:1\nASIA_STOPPED:2\n");
//!     Ok(())
//! }
//! ```

mod counter;
mod dimension;
mod error;
mod grouped;
mod report;

pub use counter::Counter;
pub use dimension::Dimension;
pub use error::MetricsError;
pub use grouped::{CounterGuard, GroupedCounters};
pub use report::ReportLine;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Macros
// ============================================================================

/// Declare a closed enumeration usable as a group or metric key
///
/// Variants print exactly as declared and order by declaration, so a
/// `Counter` keyed by the enum reports in declaration order.
///
/// ```
/// use tally_metrics::{dimension, Dimension};
///
/// dimension! {
///     /// Test priority levels
///     pub enum Priority { P0, P1, P2 }
/// }
///
/// assert_eq!(Priority::ALL, &[Priority::P0, Priority::P1, Priority::P2]);
/// assert_eq!(Priority::P1.to_string(), "P1");
/// ```
#[macro_export]
macro_rules! dimension {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$variant_meta:meta])* $variant:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[allow(non_camel_case_types)]
        #[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $name {
            $($(#[$variant_meta])* $variant),+
        }

        impl $crate::Dimension for $name {
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn name(&self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant)),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::Dimension::name(self))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    dimension! {
        enum Colo {
            USA,
            /// Frankfurt and Dublin
            EUROPE,
            ASIA,
        }
    }

    #[test]
    fn version_is_set() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn dimension_lists_variants_in_declaration_order() {
        assert_eq!(Colo::ALL, &[Colo::USA, Colo::EUROPE, Colo::ASIA]);
        assert!(Colo::USA < Colo::EUROPE);
        assert!(Colo::EUROPE < Colo::ASIA);
    }

    #[test]
    fn dimension_displays_declared_name() {
        assert_eq!(Colo::EUROPE.to_string(), "EUROPE");
        assert_eq!(Colo::ASIA.name(), "ASIA");
    }
}
