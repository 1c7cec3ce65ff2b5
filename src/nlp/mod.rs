// ============================================================
// Layer 4 — NLP Backend Layer
// ============================================================
// Concrete implementations of the LinguisticModel trait.
//
//   spacy_model.rs — drives a pretrained spaCy pipeline through
//                    an embedded Python interpreter. The whole
//                    of tagging, dependency parsing and
//                    tokenization lives on the Python side;
//                    this layer only lifts the annotated tokens
//                    into domain types.
//
// The layer exists only with the "spacy" feature; nothing above
// it depends on pyo3.

/// The pretrained spaCy pipeline backend
pub mod spacy_model;
