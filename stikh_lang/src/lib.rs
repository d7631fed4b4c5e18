// Shared stikh language crate.
//
// Turns a plain word list into a stress-annotated word source and provides
// the matching rules the verse generator builds lines with. No file I/O:
// loading from disk lives in `stikh_verse::loader`.
//
// Architecture:
// - `types.rs`: `Alphabet` (vowel table), `Token`, the stress mark constant
// - `tokenizer.rs`: raw word -> `Token` (ending + stress signature)
// - `stress.rs`: prefix stress compatibility and rhyme `Ending` matching
// - `lib.rs` (this file): `Dictionary`, the read-only word source
//
// A `Dictionary` is never mutated after construction, so line generation
// tasks share it by plain reference across threads.

pub mod stress;
pub mod tokenizer;
pub mod types;

pub use stress::{Ending, ending_matches, is_compatible, is_exact};
pub use tokenizer::{tokenize, tokenize_with};
pub use types::{Alphabet, STRESS_MARK, Token};

use stikh_prng::VerseRng;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DictionaryError {
    /// Sampling needs at least one word.
    #[error("dictionary contains no words")]
    Empty,
}

/// A fixed, non-empty collection of tokenized words.
///
/// Entries keep their source order, duplicates included: a word listed
/// twice is sampled twice as often.
#[derive(Debug, Clone)]
pub struct Dictionary {
    tokens: Vec<Token>,
}

impl Dictionary {
    pub fn new(tokens: Vec<Token>) -> Result<Self, DictionaryError> {
        if tokens.is_empty() {
            return Err(DictionaryError::Empty);
        }
        Ok(Dictionary { tokens })
    }

    /// Tokenize each word. Blank entries are skipped; syllable-less words
    /// are kept.
    pub fn from_words<I, S>(words: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_string())
            .filter(|w| !w.is_empty())
            .map(|w| tokenize(&w))
            .collect();
        Dictionary::new(tokens)
    }

    /// Parse a plain-text word list, one word per line.
    pub fn from_text(text: &str) -> Result<Self, DictionaryError> {
        Dictionary::from_words(text.lines())
    }

    /// All entries, in source order.
    pub fn all(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of entries that can end a line (have a non-empty ending).
    pub fn terminal_count(&self) -> usize {
        self.tokens.iter().filter(|t| !t.ending.is_empty()).count()
    }

    /// Draw one entry uniformly at random.
    pub fn sample(&self, rng: &mut VerseRng) -> &Token {
        // Non-empty by construction.
        &self.tokens[rng.range_usize(0, self.tokens.len())]
    }
}

/// Load the sample dictionary embedded at compile time.
///
/// Uses `include_str!` to embed `data/dictionaries/sample.txt`, a short
/// stress-marked Russian word list. Panics if the embedded file is empty
/// (should never happen in a released build).
pub fn sample_dictionary() -> Dictionary {
    let text = include_str!("../../data/dictionaries/sample.txt");
    Dictionary::from_text(text).expect("embedded sample.txt is empty")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dictionary_rejected() {
        assert_eq!(Dictionary::new(vec![]).unwrap_err(), DictionaryError::Empty);
        assert_eq!(
            Dictionary::from_text("\n  \n").unwrap_err(),
            DictionaryError::Empty
        );
    }

    #[test]
    fn test_from_text_keeps_order_and_duplicates() {
        let dict = Dictionary::from_text("да\u{301}\r\nв\n\nда\u{301}\n").unwrap();
        let words: Vec<&str> = dict.all().iter().map(|t| t.word.as_str()).collect();
        assert_eq!(words, vec!["да\u{301}", "в", "да\u{301}"]);
    }

    #[test]
    fn test_syllable_less_words_kept_but_not_terminal() {
        let dict = Dictionary::from_words(["в", "к", "нет"]).unwrap();
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.terminal_count(), 1);
        assert!(dict.all()[0].ending.is_empty());
    }

    #[test]
    fn test_from_words_trims_entries() {
        let dict = Dictionary::from_words([" луна\u{301}\t", "мо\u{301}ре "]).unwrap();
        assert_eq!(dict.all()[0].word, "луна\u{301}");
        assert_eq!(dict.all()[1].stress, vec![true, false]);
    }

    #[test]
    fn test_sample_single_word() {
        let dict = Dictionary::from_words(["да\u{301}"]).unwrap();
        let mut rng = VerseRng::new(3);
        for _ in 0..20 {
            assert_eq!(dict.sample(&mut rng).word, "да\u{301}");
        }
    }

    #[test]
    fn test_sample_deterministic() {
        let dict = sample_dictionary();
        let mut a = VerseRng::new(11);
        let mut b = VerseRng::new(11);
        for _ in 0..50 {
            assert_eq!(dict.sample(&mut a).word, dict.sample(&mut b).word);
        }
    }

    #[test]
    fn test_sample_dictionary_loads() {
        let dict = sample_dictionary();
        assert!(dict.len() >= 60, "Expected >= 60 words, got {}", dict.len());
        assert!(dict.terminal_count() < dict.len(), "Should include bare prepositions");
        assert!(
            dict.all().iter().any(|t| t.final_stress() == Some(true)),
            "Should have words with a stressed last syllable"
        );
        assert!(
            dict.all().iter().any(|t| t.final_stress() == Some(false)),
            "Should have words with an unstressed last syllable"
        );
    }
}
