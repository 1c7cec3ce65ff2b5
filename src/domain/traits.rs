// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// By programming against the trait instead of a concrete
// backend, the Parser never sees how tokens are produced:
//   - SpacyModel implements LinguisticModel via a pretrained
//     spaCy pipeline
//   - tests implement it with scripted token sequences
//
// The trait is the full extent of what this crate knows about
// the external model: tagging and dependency parsing happen
// entirely behind it.

use crate::domain::token::Token;
use crate::error::Result;

// ─── LinguisticModel ──────────────────────────────────────────────────────────
/// The opaque external model that analyzes raw text.
///
/// Contract for implementations:
///   - tokens are returned in sentence order
///   - every `head` is a valid index into the returned sequence
///   - the sentence root's head is its own index
///
/// Failures during analysis surface as
/// [`ParserError::AnalysisFailure`](crate::error::ParserError),
/// unmodified.
pub trait LinguisticModel {
    /// Run the model's full analysis pipeline on the input text
    /// and return the annotated token sequence.
    fn analyze(&self, text: &str) -> Result<Vec<Token>>;
}
