use thiserror::Error;

/// Errors raised while building a store or an engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecsError {
    /// One or more required columns are absent from the header row.
    #[error("missing required column(s): {}", missing.join(", "))]
    DataFormat { missing: Vec<String> },

    /// The requested number of recommendations is not positive.
    #[error("recommendation limit must be >= 1, got {limit}")]
    InvalidLimit { limit: usize },
}

/// The target item has no entry in a strategy's score map.
///
/// The only way ranking can fail; the engine recovers from it per section.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("item '{item}' has no score in this candidate set")]
pub struct UnknownTarget {
    pub item: String,
}

pub type Result<T> = std::result::Result<T, RecsError>;
