// ============================================================
// Layer 4 — spaCy Model Backend
// ============================================================
// Loads the pretrained pipeline once and keeps the handle for
// the lifetime of the backend. Every call crosses into Python
// under the interpreter's global lock, so calls on one handle
// are serialized; the handle itself is never mutated after
// construction.
//
// Token mapping (spaCy attribute → domain field):
//   token.text   → Token::text
//   token.pos_   → Token::tag   (Universal POS label)
//   token.head.i → Token::head  (index within the doc; the root's
//                                head is the token itself)

use pyo3::prelude::*;

use crate::domain::token::{PosTag, Token};
use crate::domain::traits::LinguisticModel;
use crate::error::{ParserError, Result};

/// Name of the pretrained pipeline this crate is pinned to.
/// The host environment must have it installed before construction
/// (`python -m spacy download en_core_web_sm`).
pub const MODEL_NAME: &str = "en_core_web_sm";

/// A pretrained spaCy pipeline behind the [`LinguisticModel`] trait.
#[derive(Debug)]
pub struct SpacyModel {
    /// The loaded spaCy `Language` object
    nlp: Py<PyAny>,

    /// Which model the handle was loaded from
    model: String,
}

impl SpacyModel {
    /// Load the fixed pretrained model ([`MODEL_NAME`]).
    pub fn load() -> Result<Self> {
        Self::load_named(MODEL_NAME)
    }

    /// Load a pretrained model by name.
    ///
    /// Any failure on the Python side — spaCy not importable, the
    /// named model not installed — surfaces as
    /// [`ParserError::ModelUnavailable`] and leaves nothing behind.
    pub fn load_named(model: &str) -> Result<Self> {
        Python::with_gil(|py| {
            let unavailable = |e: PyErr| ParserError::ModelUnavailable {
                model:  model.to_string(),
                reason: e.to_string(),
            };

            let spacy = py.import_bound("spacy").map_err(unavailable)?;
            let nlp = spacy.call_method1("load", (model,)).map_err(unavailable)?;

            tracing::info!("Loaded language model '{model}'");
            Ok(Self {
                nlp:   nlp.unbind(),
                model: model.to_string(),
            })
        })
    }

    /// Name of the model this handle was loaded from.
    pub fn model_name(&self) -> &str {
        &self.model
    }
}

impl LinguisticModel for SpacyModel {
    /// Run the full spaCy pipeline on the input text and lift every
    /// token into a domain [`Token`].
    ///
    /// Failures raised by the pipeline (e.g. unsupported input) pass
    /// through as [`ParserError::AnalysisFailure`]; no retry.
    fn analyze(&self, text: &str) -> Result<Vec<Token>> {
        Python::with_gil(|py| {
            let failure = |e: PyErr| ParserError::AnalysisFailure {
                reason: e.to_string(),
            };

            // Calling the Language object runs tokenization, tagging
            // and dependency parsing in one pass
            let doc = self.nlp.bind(py).call1((text,)).map_err(failure)?;

            let mut tokens = Vec::new();
            for item in doc.iter().map_err(failure)? {
                let item = item.map_err(failure)?;

                let surface: String = item
                    .getattr("text")
                    .and_then(|v| v.extract())
                    .map_err(failure)?;
                let label: String = item
                    .getattr("pos_")
                    .and_then(|v| v.extract())
                    .map_err(failure)?;
                let head: usize = item
                    .getattr("head")
                    .and_then(|h| h.getattr("i"))
                    .and_then(|v| v.extract())
                    .map_err(failure)?;

                tokens.push(Token::new(surface, PosTag::from_label(&label), head));
            }

            tracing::debug!("Analyzed {} tokens", tokens.len());
            Ok(tokens)
        })
    }
}
