// ============================================================
// Layer 3 — Token Domain Type
// ============================================================
// Represents one annotated token as produced by the external
// model: its surface text, a coarse grammatical category, and
// the position of its syntactic head within the same analyzed
// sequence.
//
// The tagset is the Universal POS tagset that pretrained
// pipelines emit as string labels ("NOUN", "VERB", ...). It is
// fixed and external — this crate never assigns tags itself,
// it only converts the model's labels into the enum.

use serde::{Deserialize, Serialize};

/// Coarse part-of-speech category from the Universal POS tagset.
///
/// Labels outside the tagset map to [`PosTag::X`] ("other"),
/// which no output bucket matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PosTag {
    /// Adjective ("good", "first")
    Adj,
    /// Adposition ("in", "to")
    Adp,
    /// Adverb ("carefully", "very")
    Adv,
    /// Auxiliary verb ("is", "has")
    Aux,
    /// Coordinating conjunction ("and", "or")
    Cconj,
    /// Determiner ("the", "a")
    Det,
    /// Interjection ("oh", "hello")
    Intj,
    /// Common noun ("program", "city")
    Noun,
    /// Numeral ("1", "seven")
    Num,
    /// Particle ("'s", "not")
    Part,
    /// Pronoun ("I", "they")
    Pron,
    /// Proper noun ("Alice", "Paris")
    Propn,
    /// Punctuation (".", "!")
    Punct,
    /// Subordinating conjunction ("if", "because")
    Sconj,
    /// Symbol ("$", "%")
    Sym,
    /// Verb ("run", "coded")
    Verb,
    /// Other / unrecognized
    X,
}

impl PosTag {
    /// Convert a model's string label into a tag.
    /// Unrecognized labels become `X` so they fall into no bucket.
    pub fn from_label(label: &str) -> Self {
        match label {
            "ADJ"   => Self::Adj,
            "ADP"   => Self::Adp,
            "ADV"   => Self::Adv,
            "AUX"   => Self::Aux,
            "CCONJ" => Self::Cconj,
            "DET"   => Self::Det,
            "INTJ"  => Self::Intj,
            "NOUN"  => Self::Noun,
            "NUM"   => Self::Num,
            "PART"  => Self::Part,
            "PRON"  => Self::Pron,
            "PROPN" => Self::Propn,
            "PUNCT" => Self::Punct,
            "SCONJ" => Self::Sconj,
            "SYM"   => Self::Sym,
            "VERB"  => Self::Verb,
            _       => Self::X,
        }
    }

    /// The canonical string label for this tag.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Adj   => "ADJ",
            Self::Adp   => "ADP",
            Self::Adv   => "ADV",
            Self::Aux   => "AUX",
            Self::Cconj => "CCONJ",
            Self::Det   => "DET",
            Self::Intj  => "INTJ",
            Self::Noun  => "NOUN",
            Self::Num   => "NUM",
            Self::Part  => "PART",
            Self::Pron  => "PRON",
            Self::Propn => "PROPN",
            Self::Punct => "PUNCT",
            Self::Sconj => "SCONJ",
            Self::Sym   => "SYM",
            Self::Verb  => "VERB",
            Self::X     => "X",
        }
    }
}

/// One token of an analyzed sentence.
///
/// `head` is the index of this token's syntactic head within the
/// sequence the model returned. The sentence root's head is its
/// own index — there is no sentinel value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The surface text exactly as it appeared in the sentence
    pub text: String,

    /// Coarse grammatical category assigned by the model
    pub tag: PosTag,

    /// Index of the syntactic head token in the same sequence
    pub head: usize,
}

impl Token {
    /// Create a new Token.
    /// Uses impl Into<String> so callers can pass &str or String.
    pub fn new(text: impl Into<String>, tag: PosTag, head: usize) -> Self {
        Self {
            text: text.into(),
            tag,
            head,
        }
    }
}
