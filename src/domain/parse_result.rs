// ============================================================
// Layer 3 — ParseResult Domain Type
// ============================================================
// The three-bucket output of a parse. Created fresh per call,
// never mutated after construction, owns no resources.
//
// Invariants:
//   - order within each bucket matches the tokens' order of
//     appearance in the sentence
//   - a token lands in at most one bucket, decided solely by
//     its tag

use std::fmt;

use serde::{Deserialize, Serialize};

/// An adjective or adverb together with the word it modifies
/// (the surface text of its syntactic head).
///
/// For a nuance token that is itself the sentence root,
/// `modifies` is its own text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nuance {
    /// Surface text of the modifier token
    pub text: String,

    /// Surface text of the token it modifies
    pub modifies: String,
}

impl Nuance {
    /// Create a new Nuance pair
    pub fn new(text: impl Into<String>, modifies: impl Into<String>) -> Self {
        Self {
            text:     text.into(),
            modifies: modifies.into(),
        }
    }
}

/// The classified output of one parsed sentence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    /// Tokens tagged NOUN or PROPN, in sentence order
    pub entities: Vec<String>,

    /// Tokens tagged VERB, in sentence order
    pub verbs: Vec<String>,

    /// Tokens tagged ADJ or ADV with their heads, in sentence order
    pub nuances: Vec<Nuance>,
}

impl ParseResult {
    /// True when no token matched any bucket.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty() && self.verbs.is_empty() && self.nuances.is_empty()
    }
}

/// Simple key-value text form, one bucket per line:
///
/// ```text
/// entities: [code, program]
/// verbs: []
/// nuances: [good -> program, carefully -> code]
/// ```
impl fmt::Display for ParseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "entities: [{}]", self.entities.join(", "))?;
        writeln!(f, "verbs: [{}]", self.verbs.join(", "))?;
        let pairs: Vec<String> = self
            .nuances
            .iter()
            .map(|n| format!("{} -> {}", n.text, n.modifies))
            .collect();
        write!(f, "nuances: [{}]", pairs.join(", "))
    }
}
