// ============================================================
// Layer 2 — Parser
// ============================================================
// Holds the loaded model handle and routes its token stream
// into the three output buckets:
//
//   NOUN, PROPN → entities
//   VERB        → verbs
//   ADJ, ADV    → nuances (paired with the head's surface text)
//   anything else is dropped
//
// The handle is acquired once at construction (the expensive
// step) and reused read-only across parse calls. The Parser has
// no other state.

use crate::domain::parse_result::{Nuance, ParseResult};
use crate::domain::token::PosTag;
use crate::domain::traits::LinguisticModel;
use crate::error::Result;

/// Classifies the output of a pretrained linguistic model into
/// entities, verbs and nuance pairs.
pub struct Parser {
    /// The opaque external model, immutable after construction
    model: Box<dyn LinguisticModel>,
}

impl Parser {
    /// Construct a Parser over the default pretrained backend.
    ///
    /// Loads the fixed spaCy model once; moderately expensive.
    /// Fails with [`ParserError::ModelUnavailable`](crate::error::ParserError)
    /// when the model is not installed in the environment.
    #[cfg(feature = "spacy")]
    pub fn new() -> Result<Self> {
        let model = crate::nlp::spacy_model::SpacyModel::load()?;
        Ok(Self::with_model(model))
    }

    /// Construct a Parser over any [`LinguisticModel`].
    /// No model load happens here — the caller brings the handle.
    pub fn with_model(model: impl LinguisticModel + 'static) -> Self {
        Self {
            model: Box::new(model),
        }
    }

    /// Parse one sentence into a [`ParseResult`].
    ///
    /// Runs the model's full analysis pipeline, then classifies
    /// each token in sequence order by its tag. Purely functional
    /// given the loaded model; any model failure passes through
    /// unmodified.
    pub fn parse(&self, sentence: &str) -> Result<ParseResult> {
        let tokens = self.model.analyze(sentence)?;

        let mut result = ParseResult::default();
        for token in &tokens {
            match token.tag {
                // Nouns and proper nouns
                PosTag::Noun | PosTag::Propn => {
                    result.entities.push(token.text.clone());
                }
                // Verbs
                PosTag::Verb => {
                    result.verbs.push(token.text.clone());
                }
                // Adjectives and adverbs, paired with what they modify.
                // The head index is valid per the trait contract; a root
                // modifier's head is itself, so it reports its own text.
                PosTag::Adj | PosTag::Adv => {
                    let modifies = tokens[token.head].text.clone();
                    result.nuances.push(Nuance::new(&token.text, modifies));
                }
                _ => {}
            }
        }
        Ok(result)
    }

    /// Parse several sentences sequentially.
    /// Stops at the first model failure.
    pub fn parse_many<S: AsRef<str>>(&self, sentences: &[S]) -> Result<Vec<ParseResult>> {
        sentences
            .iter()
            .map(|s| self.parse(s.as_ref()))
            .collect()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
// The classification pass is tested against scripted models so no
// pretrained pipeline is needed. End-to-end tests against the real
// model live with the backend in src/nlp/spacy_model.rs.
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::token::Token;
    use crate::error::ParserError;

    /// Replays a fixed token sequence for every input.
    struct ScriptedModel {
        tokens: Vec<Token>,
    }

    impl ScriptedModel {
        fn new(tokens: Vec<Token>) -> Self {
            Self { tokens }
        }
    }

    impl LinguisticModel for ScriptedModel {
        fn analyze(&self, _text: &str) -> Result<Vec<Token>> {
            Ok(self.tokens.clone())
        }
    }

    /// Fails every analysis, as a model would on unsupported input.
    struct FailingModel;

    impl LinguisticModel for FailingModel {
        fn analyze(&self, _text: &str) -> Result<Vec<Token>> {
            Err(ParserError::AnalysisFailure {
                reason: "unsupported input encoding".to_string(),
            })
        }
    }

    /// The example sentence "I code good program carefully" under a
    /// tagging where "code" and "program" are nouns, "good" modifies
    /// "program" and "carefully" modifies "code".
    fn example_tokens() -> Vec<Token> {
        vec![
            Token::new("I",         PosTag::Pron, 1),
            Token::new("code",      PosTag::Noun, 1), // sentence root
            Token::new("good",      PosTag::Adj,  3),
            Token::new("program",   PosTag::Noun, 1),
            Token::new("carefully", PosTag::Adv,  1),
        ]
    }

    #[test]
    fn test_example_sentence_buckets() {
        let parser = Parser::with_model(ScriptedModel::new(example_tokens()));
        let result = parser.parse("I code good program carefully").unwrap();

        assert_eq!(result.entities, vec!["code", "program"]);
        assert!(result.verbs.is_empty());
        assert_eq!(
            result.nuances,
            vec![
                Nuance::new("good", "program"),
                Nuance::new("carefully", "code"),
            ]
        );
    }

    #[test]
    fn test_verbs_are_collected() {
        let tokens = vec![
            Token::new("Alice", PosTag::Propn, 1),
            Token::new("runs",  PosTag::Verb,  1), // root
            Token::new("and",   PosTag::Cconj, 1),
            Token::new("jumps", PosTag::Verb,  1),
        ];
        let parser = Parser::with_model(ScriptedModel::new(tokens));
        let result = parser.parse("Alice runs and jumps").unwrap();

        assert_eq!(result.entities, vec!["Alice"]);
        assert_eq!(result.verbs, vec!["runs", "jumps"]);
        assert!(result.nuances.is_empty());
    }

    #[test]
    fn test_bucket_order_matches_sentence_order() {
        let tokens = vec![
            Token::new("dogs",  PosTag::Noun, 1),
            Token::new("chase", PosTag::Verb, 1), // root
            Token::new("cats",  PosTag::Noun, 1),
            Token::new("that",  PosTag::Pron, 4),
            Token::new("eat",   PosTag::Verb, 2),
            Token::new("mice",  PosTag::Noun, 4),
        ];
        let parser = Parser::with_model(ScriptedModel::new(tokens));
        let result = parser.parse("dogs chase cats that eat mice").unwrap();

        assert_eq!(result.entities, vec!["dogs", "cats", "mice"]);
        assert_eq!(result.verbs, vec!["chase", "eat"]);
    }

    #[test]
    fn test_each_token_lands_in_at_most_one_bucket() {
        let parser = Parser::with_model(ScriptedModel::new(example_tokens()));
        let result = parser.parse("I code good program carefully").unwrap();

        let total = result.entities.len()
            + result.verbs.len()
            + result.nuances.len();
        // 5 tokens, the pronoun matches no bucket
        assert_eq!(total, 4);

        // No surface text is shared across buckets
        for nuance in &result.nuances {
            assert!(!result.entities.contains(&nuance.text));
            assert!(!result.verbs.contains(&nuance.text));
        }
        for verb in &result.verbs {
            assert!(!result.entities.contains(verb));
        }
    }

    #[test]
    fn test_empty_token_sequence_gives_empty_result() {
        let parser = Parser::with_model(ScriptedModel::new(Vec::new()));
        let result = parser.parse("").unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_unmatched_tags_give_empty_result() {
        // Only punctuation and function words — nothing matches a bucket
        let tokens = vec![
            Token::new("the", PosTag::Det,   2),
            Token::new("of",  PosTag::Adp,   2),
            Token::new("!",   PosTag::Punct, 2), // root
            Token::new("?",   PosTag::Punct, 2),
        ];
        let parser = Parser::with_model(ScriptedModel::new(tokens));
        let result = parser.parse("the of ! ?").unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_root_modifier_reports_its_own_text() {
        // A lone adverb is the sentence root; its head is itself
        let tokens = vec![Token::new("carefully", PosTag::Adv, 0)];
        let parser = Parser::with_model(ScriptedModel::new(tokens));
        let result = parser.parse("carefully").unwrap();

        assert_eq!(result.nuances, vec![Nuance::new("carefully", "carefully")]);
    }

    #[test]
    fn test_parse_is_idempotent() {
        let parser = Parser::with_model(ScriptedModel::new(example_tokens()));
        let first  = parser.parse("I code good program carefully").unwrap();
        let second = parser.parse("I code good program carefully").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_analysis_failure_passes_through() {
        let parser = Parser::with_model(FailingModel);
        let err = parser.parse("anything").unwrap_err();
        assert!(matches!(err, ParserError::AnalysisFailure { .. }));
    }

    #[test]
    fn test_parse_many_preserves_sentence_order() {
        let parser  = Parser::with_model(ScriptedModel::new(example_tokens()));
        let results = parser
            .parse_many(&["I code good program carefully", "same again"])
            .unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0], results[1]);
    }

    #[test]
    fn test_parse_many_stops_on_failure() {
        let parser = Parser::with_model(FailingModel);
        assert!(parser.parse_many(&["a", "b"]).is_err());
    }
}
