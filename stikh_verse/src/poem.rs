// Poem orchestrator: template in, ordered lines out.
//
// Pipeline: expand the template into line plans -> resolve rhyme groups ->
// fan out one thread per line -> collect results -> reorder by line id.
//
// Concurrency model: one scoped thread per line (no pool; poems are short
// and every task is bounded by its attempt budgets) and a single `mpsc`
// channel that each task sends exactly one `GeneratedLine` into. The
// collector receives exactly `line_count` messages in whatever order the
// tasks finish and writes each into the slot named by its id. The
// dictionary is borrowed read-only by every thread; nothing else is shared.
//
// Each task gets its own `VerseRng`, forked from the caller's generator in
// line order before any thread starts, so a fixed seed gives the same poem
// no matter how the threads are scheduled.
//
// A line that runs out of attempts only degrades its own slot to a
// `LineError`. A rhyme group that cannot be resolved aborts the poem before
// any thread is spawned.

use std::fmt;
use std::sync::mpsc;
use std::thread;

use stikh_lang::Dictionary;
use stikh_prng::VerseRng;
use tracing::{debug, info, warn};

use crate::config::GenerationConfig;
use crate::error::PoemError;
use crate::line::{GeneratedLine, LineError, generate_line};
use crate::rhyme::resolve_rhymes;
use crate::template::{LineTarget, PoemTemplate};

/// A generated poem, one entry per template line, in line order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Poem {
    lines: Vec<Result<String, LineError>>,
}

impl Poem {
    pub fn lines(&self) -> &[Result<String, LineError>] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of lines replaced by an error message.
    pub fn failed_count(&self) -> usize {
        self.lines.iter().filter(|l| l.is_err()).count()
    }

    /// Line texts for display, with failed lines shown as their error message.
    pub fn to_lines(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|line| match line {
                Ok(text) => text.clone(),
                Err(e) => e.to_string(),
            })
            .collect()
    }
}

impl fmt::Display for Poem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.to_lines().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Generate a poem from `template` using words from `dictionary`.
pub fn generate_poem(
    dictionary: &Dictionary,
    template: &PoemTemplate,
    config: &GenerationConfig,
    rng: &mut VerseRng,
) -> Result<Poem, PoemError> {
    let targets = resolve_rhymes(template.expand(), dictionary, config, rng)?;
    let line_count = targets.len();
    let tasks: Vec<(LineTarget, VerseRng)> =
        targets.into_iter().map(|target| (target, rng.fork())).collect();

    let mut slots: Vec<Option<Result<String, LineError>>> = vec![None; line_count];

    thread::scope(|scope| {
        let (tx, rx) = mpsc::channel::<GeneratedLine>();
        for (target, mut line_rng) in tasks {
            let tx = tx.clone();
            scope.spawn(move || {
                let text = generate_line(dictionary, &target, config, &mut line_rng);
                debug!(id = target.id, ok = text.is_ok(), "line task finished");
                // The receiver lives until the scope ends, so this cannot fail.
                let _ = tx.send(GeneratedLine {
                    id: target.id,
                    text,
                });
            });
        }
        drop(tx);

        for _ in 0..line_count {
            // Every task sends once before exiting; recv only fails if a
            // task panicked, and the scope re-raises that panic on exit.
            let Ok(line) = rx.recv() else {
                break;
            };
            if let Err(e) = &line.text {
                warn!(id = line.id, error = %e, "line generation failed");
            }
            slots[line.id] = Some(line.text);
        }
    });

    let lines: Vec<Result<String, LineError>> = slots
        .into_iter()
        .map(|slot| slot.unwrap_or(Err(LineError::Exhausted)))
        .collect();
    let poem = Poem { lines };
    info!(
        lines = poem.len(),
        failed = poem.failed_count(),
        "poem generated"
    );
    Ok(poem)
}
