//! Error types for dataset loading.

/// Error raised while reading the embedded dataset.
///
/// Every variant is fatal for a build: nothing is written once one occurs.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The marker comment does not occur in the host document.
    #[error("marker `{marker}` not found in host document")]
    MissingMarker {
        /// Marker that was searched for.
        marker: String,
    },

    /// The marker exists but no opening bracket follows it.
    #[error("no array literal follows marker `{marker}`")]
    MissingLiteral {
        /// Marker after which the literal was expected.
        marker: String,
    },

    /// The document ends before the literal's brackets balance.
    #[error("array literal starting at byte {start} is never closed")]
    UnbalancedLiteral {
        /// Byte offset of the literal's opening bracket.
        start: usize,
    },

    /// The normalized literal is not valid JSON for a record list.
    #[error("malformed data literal: {0}")]
    MalformedLiteral(#[from] serde_json::Error),
}
