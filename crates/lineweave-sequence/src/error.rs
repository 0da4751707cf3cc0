//! Error types for interaction sequencing.

use thiserror::Error;

use lineweave_compose::ComposeError;

use crate::samples::SampleCategory;

/// Errors from the interaction sequencer. These are configuration or
/// programming faults (a misbuilt catalog, an out-of-range sample); none
/// are recoverable at runtime and none may be silently swallowed.
#[derive(Debug, Error)]
pub enum SequenceError {
    #[error(transparent)]
    Compose(#[from] ComposeError),

    #[error("scale catalog must hold at least 2 entries, got {len}")]
    CatalogTooSmall { len: usize },

    #[error("scale {scale} has an empty {part} sequence")]
    EmptyScaleSequence { scale: usize, part: &'static str },

    #[error("no eligible scale to pick: all entries excluded")]
    NoEligibleScale,

    #[error("sample index {index} out of range for {category:?} bank of {len}")]
    SampleOutOfRange {
        category: SampleCategory,
        index: usize,
        len: usize,
    },
}
