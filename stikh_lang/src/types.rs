// Core language types: the vowel alphabet and the tokenized dictionary entry.
//
// - `Alphabet`: which characters open a syllable, and which of those are
//   stressed without an explicit mark (Russian `ё`). A plain constant value
//   passed by reference, never mutable global state.
// - `Token`: one dictionary word with its rhyme ending and per-syllable
//   stress signature, produced by `tokenizer.rs`.
//
// Stress in the source text is written as a combining acute accent
// (U+0301) right after the stressed vowel: "луна\u{301}".

/// Combining acute accent used to mark a stressed vowel.
pub const STRESS_MARK: char = '\u{301}';

/// Vowel classification table for one writing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    /// Vowels that are unstressed unless followed by [`STRESS_MARK`].
    pub vowels: &'static [char],
    /// Vowels that always carry stress, mark or not.
    pub stressed_vowels: &'static [char],
}

impl Alphabet {
    /// Russian Cyrillic vowels, both cases. `ё` is always stressed.
    pub const RUSSIAN: Alphabet = Alphabet {
        vowels: &[
            'а', 'у', 'о', 'и', 'э', 'ы', 'я', 'ю', 'е', 'А', 'У', 'О', 'И', 'Э', 'Ы', 'Я', 'Ю',
            'Е',
        ],
        stressed_vowels: &['ё', 'Ё'],
    };

    /// True for any syllable-forming character, stressed or not.
    pub fn is_vowel(&self, c: char) -> bool {
        self.vowels.contains(&c) || self.stressed_vowels.contains(&c)
    }

    /// True for vowels that are stressed without a mark.
    pub fn is_stressed_vowel(&self, c: char) -> bool {
        self.stressed_vowels.contains(&c)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Alphabet::RUSSIAN
    }
}

/// A tokenized dictionary word.
///
/// Invariant: `stress` is empty exactly when the word has no vowel, and in
/// that case `ending` is empty too. A syllable-less word (a bare
/// preposition like "в") can sit inside a line but never ends one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Token {
    /// The word as written in the dictionary, stress marks included.
    pub word: String,
    /// Everything from the last vowel (with its mark) to the end of the word.
    pub ending: String,
    /// One flag per syllable, left to right, `true` = stressed.
    pub stress: Vec<bool>,
}

impl Token {
    pub fn syllable_count(&self) -> usize {
        self.stress.len()
    }

    /// Whether the word has at least one syllable.
    pub fn is_syllabic(&self) -> bool {
        !self.stress.is_empty()
    }

    /// Stress of the final syllable, which decides masculine vs feminine rhyme.
    pub fn final_stress(&self) -> Option<bool> {
        self.stress.last().copied()
    }
}
