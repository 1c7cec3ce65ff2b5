// ============================================================
// Library Root
// ============================================================
// sentence-parse loads a pretrained linguistic analysis model
// and routes its token stream into three buckets:
//
//   entities — tokens tagged NOUN or PROPN
//   verbs    — tokens tagged VERB
//   nuances  — tokens tagged ADJ or ADV, paired with the word
//              they modify (their syntactic head)
//
// All tagging and dependency parsing is delegated to the
// external model; this crate only classifies its output.
//
// Layer map:
//   Layer 1 — cli          clap presentation layer
//   Layer 2 — application  the Parser and its classification pass
//   Layer 3 — domain       pure types and the LinguisticModel trait
//   Layer 4 — nlp          the pretrained spaCy backend (feature "spacy")

/// The Parser and its classification pass
pub mod application;

/// Command line interface (needs the default backend)
#[cfg(feature = "spacy")]
pub mod cli;

/// Pure domain types and the model seam trait
pub mod domain;

/// Crate error taxonomy
pub mod error;

/// Pretrained model backend
#[cfg(feature = "spacy")]
pub mod nlp;

pub use application::parser::Parser;
pub use domain::parse_result::{Nuance, ParseResult};
pub use domain::token::{PosTag, Token};
pub use domain::traits::LinguisticModel;
pub use error::{ParserError, Result};
#[cfg(feature = "spacy")]
pub use nlp::spacy_model::SpacyModel;
