// stikh verse generator.
//
// Generates poems that follow a metrical template: a syllable count and
// stress pattern per line and shared rhyme endings between lines. Words come
// from a stress-marked dictionary (`stikh_lang`); all randomness comes from
// `stikh_prng::VerseRng`.
//
// Architecture:
// - template.rs: `PoemTemplate` (structure files) -> `LinePlan` per line
// - rhyme.rs: one concrete ending per rhyme group -> `LineTarget` per line
// - line.rs: bounded stochastic search for one line's words
// - poem.rs: orchestration, one thread per line, results reordered by id
// - config.rs: attempt budgets (`GenerationConfig`) and the settings file
// - loader.rs: dictionary/structure file loading
// - error.rs: load and poem-level error types
// - menu.rs: interactive session used by the `stikh` binary
//
// The library entry point is `generate_poem`.

pub mod config;
pub mod error;
pub mod line;
pub mod loader;
pub mod menu;
pub mod poem;
pub mod rhyme;
pub mod template;

pub use config::{GenerationConfig, Settings};
pub use error::{LoadError, PoemError};
pub use line::{GeneratedLine, LineError, generate_line};
pub use poem::{Poem, generate_poem};
pub use template::{LinePlan, LineTarget, PoemTemplate};
