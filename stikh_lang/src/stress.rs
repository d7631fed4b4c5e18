// Stress-pattern and rhyme-ending matching.
//
// `is_compatible` is a prefix check: a candidate fits a target window when
// it is no longer than the window and agrees with it position by position.
// A window with no stressed syllable accepts anything, whatever its length;
// that test runs before the length test.
//
// Used by the line generator for both the terminal word (matched against
// the tail of the line pattern) and the leading words (matched against the
// part of the pattern not yet covered).

/// Rhyme requirement for the last word of a line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Ending {
    /// No rhyme constraint.
    #[default]
    Any,
    /// The last word's ending must equal this text exactly.
    Exact(String),
}

impl Ending {
    /// Build an ending from suffix text; the empty string means `Any`.
    pub fn from_suffix(suffix: &str) -> Self {
        if suffix.is_empty() {
            Ending::Any
        } else {
            Ending::Exact(suffix.to_string())
        }
    }

    pub fn matches(&self, suffix: &str) -> bool {
        ending_matches(suffix, self)
    }
}

/// Whether `candidate` can occupy the start of `target`.
pub fn is_compatible(candidate: &[bool], target: &[bool]) -> bool {
    if !target.contains(&true) {
        return true;
    }
    if candidate.len() > target.len() {
        return false;
    }
    candidate.iter().zip(target).all(|(c, t)| c == t)
}

/// Whether `candidate` is a complete match for `target`.
pub fn is_exact(candidate: &[bool], target: &[bool]) -> bool {
    candidate.len() == target.len() && is_compatible(candidate, target)
}

/// Whether a word ending satisfies a rhyme requirement.
pub fn ending_matches(suffix: &str, ending: &Ending) -> bool {
    match ending {
        Ending::Any => true,
        Ending::Exact(required) => suffix == required,
    }
}
