//! Error types for the summarization pipeline.

use thiserror::Error;

/// Errors surfaced by [`crate::Summarizer::summarize`].
///
/// Degenerate similarity vectors and a non-converging ranking run are not
/// errors: the former resolves to a similarity of zero, the latter proceeds
/// with the last iterate and a logged warning.
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// The document tokenized to zero sentences.
    #[error("document is empty or contains no sentences")]
    EmptyDocument,

    /// A summary of zero sentences was requested.
    #[error("requested summary length must be at least 1")]
    ZeroSummaryLength,
}
