// Poem templates and per-line plans.
//
// A `PoemTemplate` describes a poem as four cycled lists: rhyme group labels
// (one per line, cycled over lines), syllable counts (cycled over lines),
// and an accent pattern (cycled within each line, restarting at every line).
// `expand()` turns it into one `LinePlan` per line. The rhyme resolver then
// converts plans into `LineTarget`s with concrete endings (see `rhyme.rs`).
//
// Templates come from JSON structure files with the keys `Length`,
// `Endings`, `Syllables`, `Accents`. Out-of-range values are corrected on
// load rather than rejected, each correction logged as a warning:
// - `Length` below 1 becomes 1
// - empty `Endings` becomes `[""]` (no rhyme)
// - empty `Syllables` becomes `[0]`; negative counts become 0
// - empty `Accents` becomes `[false]` (stress ignored)

use serde::{Deserialize, Deserializer};
use stikh_lang::Ending;
use tracing::warn;

/// Structure file as written on disk, before correction.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TemplateFile {
    #[serde(rename = "Length")]
    length: i64,
    #[serde(rename = "Endings")]
    endings: Vec<String>,
    #[serde(rename = "Syllables")]
    syllables: Vec<i64>,
    #[serde(rename = "Accents")]
    accents: Vec<bool>,
}

/// A validated poem template. All lists are non-empty and `line_count >= 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoemTemplate {
    line_count: usize,
    endings: Vec<String>,
    syllables: Vec<usize>,
    accents: Vec<bool>,
}

impl<'de> Deserialize<'de> for PoemTemplate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        TemplateFile::deserialize(deserializer).map(PoemTemplate::from_file)
    }
}

impl PoemTemplate {
    fn from_file(file: TemplateFile) -> Self {
        let line_count = if file.length < 1 {
            warn!(length = file.length, "template Length must be at least 1, using 1");
            1
        } else {
            file.length as usize
        };
        let syllables = file
            .syllables
            .into_iter()
            .map(|n| {
                if n < 0 {
                    warn!(count = n, "negative syllable count in template, using 0");
                    0
                } else {
                    n as usize
                }
            })
            .collect();
        PoemTemplate::new(line_count, file.endings, syllables, file.accents)
    }

    /// Build a template, correcting empty lists and a zero line count.
    pub fn new(
        line_count: usize,
        endings: Vec<String>,
        syllables: Vec<usize>,
        accents: Vec<bool>,
    ) -> Self {
        let mut template = PoemTemplate {
            line_count,
            endings,
            syllables,
            accents,
        };
        if template.line_count == 0 {
            warn!("template has no lines, using 1");
            template.line_count = 1;
        }
        if template.endings.is_empty() {
            warn!("template has no Endings, rhyme will be ignored");
            template.endings.push(String::new());
        }
        if template.syllables.is_empty() {
            warn!("template has no Syllables, lines will be a single word");
            template.syllables.push(0);
        }
        if template.accents.is_empty() {
            warn!("template has no Accents, stress will be ignored");
            template.accents.push(false);
        }
        template
    }

    /// Parse a structure file.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }

    pub fn endings(&self) -> &[String] {
        &self.endings
    }

    pub fn syllables(&self) -> &[usize] {
        &self.syllables
    }

    pub fn accents(&self) -> &[bool] {
        &self.accents
    }

    /// Required stress for line `index`: the accent pattern cycled over the
    /// line's syllable count.
    pub fn line_stress(&self, index: usize) -> Vec<bool> {
        let count = self.syllables[index % self.syllables.len()];
        self.accents.iter().copied().cycle().take(count).collect()
    }

    /// Rhyme group label for line `index`; `None` for the empty label.
    pub fn line_group(&self, index: usize) -> Option<&str> {
        let label = &self.endings[index % self.endings.len()];
        (!label.is_empty()).then_some(label.as_str())
    }

    /// One plan per line, in line order.
    pub fn expand(&self) -> Vec<LinePlan> {
        (0..self.line_count)
            .map(|id| LinePlan {
                id,
                stress: self.line_stress(id),
                group: self.line_group(id).map(str::to_string),
            })
            .collect()
    }
}

/// A line before its rhyme group has been given a concrete ending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinePlan {
    /// Position in the poem, 0-based.
    pub id: usize,
    /// Stress pattern the finished line must match exactly.
    pub stress: Vec<bool>,
    /// Rhyme group label; `None` means the line need not rhyme.
    pub group: Option<String>,
}

impl LinePlan {
    /// Resolve this plan with the given ending.
    pub fn into_target(self, ending: Ending) -> LineTarget {
        LineTarget {
            id: self.id,
            stress: self.stress,
            ending,
        }
    }
}

/// A fully specified line, ready for a generation task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTarget {
    pub id: usize,
    pub stress: Vec<bool>,
    pub ending: Ending,
}
