// Word tokenizer: derives a `Token` (rhyme ending + stress signature) from
// the raw text of a dictionary line.
//
// The scan runs right to left. Until the first vowel is reached every
// character is collected into the ending, so the ending always starts at
// the last vowel ("луна\u{301}" -> "а\u{301}", "ого\u{301}нь" -> "о\u{301}нь").
// Each vowel adds one syllable flag:
// - an inherently stressed vowel (`ё`) adds `true`;
// - a vowel followed by the stress mark adds `true`, consuming both chars;
// - any other vowel adds `false`.
// Non-vowels add nothing. The flags are reversed at the end.

use crate::types::{Alphabet, STRESS_MARK, Token};

/// Tokenize a word with the default (Russian) alphabet.
pub fn tokenize(word: &str) -> Token {
    tokenize_with(word, &Alphabet::RUSSIAN)
}

/// Tokenize a word against an explicit alphabet.
pub fn tokenize_with(word: &str, alphabet: &Alphabet) -> Token {
    let chars: Vec<char> = word.chars().collect();
    let mut stress = Vec::new();
    // Collected back to front, reversed when the string is built.
    let mut ending_rev: Vec<char> = Vec::new();
    let mut seen_vowel = false;

    let mut i = chars.len();
    while i > 0 {
        i -= 1;
        let c = chars[i];

        if c == STRESS_MARK && i > 0 {
            let base = chars[i - 1];
            if !seen_vowel {
                ending_rev.push(c);
                ending_rev.push(base);
            }
            i -= 1;
            if alphabet.is_vowel(base) {
                stress.push(true);
                seen_vowel = true;
            }
            continue;
        }

        if !seen_vowel {
            ending_rev.push(c);
        }
        if alphabet.is_stressed_vowel(c) {
            stress.push(true);
            seen_vowel = true;
        } else if alphabet.is_vowel(c) {
            stress.push(false);
            seen_vowel = true;
        }
    }

    let ending = if stress.is_empty() {
        String::new()
    } else {
        ending_rev.iter().rev().collect()
    };
    stress.reverse();

    Token {
        word: word.to_string(),
        ending,
        stress,
    }
}
