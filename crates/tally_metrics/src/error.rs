use thiserror::Error;

/// Errors raised by grouped counter lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricsError {
    #[error("no counter registered for group '{group}'")]
    GroupNotFound { group: String },
}
