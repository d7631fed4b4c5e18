// Line generator: stochastic search for one verse line.
//
// Given a `LineTarget` (exact stress pattern + rhyme ending), the generator
// runs up to `line_attempts` rounds of a two-phase search:
//
// 1. Terminal word. Draw words until one has a matching ending and a stress
//    signature that fits the tail of the pattern. A word without syllables
//    never ends a line that has any. Running out of draws here
//    fails the whole line at once (`LineError::NoTerminal`): if no word can
//    end the line, more rounds will not help.
// 2. Prefix. Draw words left to right, keeping each one whose stress fits
//    the part of the pattern not yet covered. Before the first draw and
//    after every draw, check whether prefix + terminal is exactly the
//    pattern (so a terminal word that fills the line alone is returned
//    as-is); if it overshoots, give up on this round and start the next one
//    with a fresh terminal word.
//
// Each round starts from nothing; a partial line is never repaired. A line
// never waits on anything but the dictionary and its own RNG, and every
// loop is bounded by an attempt count from `GenerationConfig`.

use stikh_lang::{Dictionary, Token, is_compatible, is_exact};
use stikh_prng::VerseRng;
use thiserror::Error;

use crate::config::GenerationConfig;
use crate::template::LineTarget;

/// Why a line could not be generated. The `Display` text is what appears in
/// the poem in place of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("generation error 1 (line ending)")]
    NoTerminal,
    #[error("generation error 2 (line assembly)")]
    Exhausted,
}

/// Result of one line task, tagged with the line's position in the poem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedLine {
    pub id: usize,
    pub text: Result<String, LineError>,
}

/// Generate the text of one line.
pub fn generate_line(
    dictionary: &Dictionary,
    target: &LineTarget,
    config: &GenerationConfig,
    rng: &mut VerseRng,
) -> Result<String, LineError> {
    for _ in 0..config.line_attempts {
        let terminal = pick_terminal(dictionary, target, config.terminal_attempts, rng)
            .ok_or(LineError::NoTerminal)?;
        if let Some(line) =
            assemble_prefix(dictionary, &target.stress, terminal, config.prefix_attempts, rng)
        {
            return Ok(line);
        }
    }
    Err(LineError::Exhausted)
}

/// Phase 1: a word that can close the line.
fn pick_terminal<'d>(
    dictionary: &'d Dictionary,
    target: &LineTarget,
    attempts: u32,
    rng: &mut VerseRng,
) -> Option<&'d Token> {
    for _ in 0..attempts {
        let token = dictionary.sample(rng);
        if !target.ending.matches(&token.ending) {
            continue;
        }
        // Bare words ("в", "к") only close a zero-syllable line.
        if !token.is_syllabic() && !target.stress.is_empty() {
            continue;
        }
        // A word longer than the whole line has no tail window to fit.
        let Some(start) = target.stress.len().checked_sub(token.syllable_count()) else {
            continue;
        };
        if is_compatible(&token.stress, &target.stress[start..]) {
            return Some(token);
        }
    }
    None
}

/// Phase 2: leading words in front of `terminal`. `None` when this round
/// overshoots the pattern or runs out of draws.
fn assemble_prefix(
    dictionary: &Dictionary,
    pattern: &[bool],
    terminal: &Token,
    attempts: u32,
    rng: &mut VerseRng,
) -> Option<String> {
    let mut line = String::new();
    let mut stress: Vec<bool> = Vec::with_capacity(pattern.len());
    // Blocks runs like "в к с" of syllable-less words.
    let mut previous_bare = false;
    let mut draws = 0;

    loop {
        let total = stress.len() + terminal.syllable_count();
        if total == pattern.len() {
            let combined: Vec<bool> = stress.iter().chain(&terminal.stress).copied().collect();
            if is_exact(&combined, pattern) {
                line.push_str(&terminal.word);
                return Some(line);
            }
        }
        if total > pattern.len() || draws == attempts {
            return None;
        }

        draws += 1;
        let token = dictionary.sample(rng);
        let bare_run = previous_bare && !token.is_syllabic();
        let window = pattern.get(stress.len()..).unwrap_or(&[]);
        if !bare_run && is_compatible(&token.stress, window) {
            stress.extend_from_slice(&token.stress);
            line.push_str(&token.word);
            line.push(' ');
            previous_bare = !token.is_syllabic();
        }
    }
}
