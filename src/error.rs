// ============================================================
// Crate Error Taxonomy
// ============================================================
// Exactly two failure kinds exist in this system:
//
//   ModelUnavailable — the named pretrained model could not be
//                      loaded at construction time
//   AnalysisFailure  — the model raised an error while analyzing
//                      a sentence; passed through unmodified
//
// There is no retry and no local recovery for either kind.

use thiserror::Error;

/// Errors surfaced by the parser and its model backend.
#[derive(Debug, Error)]
pub enum ParserError {
    /// The named pretrained model is not installed or could not be
    /// loaded. Fatal for the Parser being constructed — nothing is
    /// partially initialized when this is returned.
    #[error("language model '{model}' is unavailable: {reason}")]
    ModelUnavailable { model: String, reason: String },

    /// The external model failed while analyzing a sentence
    /// (e.g. an unsupported input encoding). Pass-through of the
    /// underlying failure; the wrapper adds no validation of its own.
    #[error("analysis failed: {reason}")]
    AnalysisFailure { reason: String },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ParserError>;
