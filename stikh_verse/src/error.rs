// Error types for loading inputs and generating poems.
//
// Per-line generation failures are not here: they are recovered inside the
// poem as `line::LineError` sentinels. `PoemError` is only for failures that
// abort a whole poem before any line task starts.

use std::path::PathBuf;

use stikh_lang::DictionaryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not valid JSON for the expected shape.
    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The word list is unusable.
    #[error("dictionary {path}: {source}")]
    Dictionary {
        path: PathBuf,
        #[source]
        source: DictionaryError,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PoemError {
    /// No word with the right final stress was found for a rhyme group.
    #[error("could not pick an ending for rhyme group '{group}' after {attempts} attempts")]
    RhymeExhausted { group: String, attempts: u32 },
}
