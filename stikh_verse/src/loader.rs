// File loaders for dictionaries and structure templates.
//
// Thin wrappers that read a file, hand the text to the parsers in
// `stikh_lang::Dictionary::from_text` and `PoemTemplate::from_json`, and
// attach the path to any error. Nothing here changes generation semantics.

use std::path::Path;

use stikh_lang::Dictionary;
use tracing::info;

use crate::error::LoadError;
use crate::template::PoemTemplate;

fn read(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a plain-text dictionary, one word per line.
pub fn load_dictionary(path: &Path) -> Result<Dictionary, LoadError> {
    let text = read(path)?;
    let dictionary = Dictionary::from_text(&text).map_err(|source| LoadError::Dictionary {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        path = %path.display(),
        words = dictionary.len(),
        terminals = dictionary.terminal_count(),
        "dictionary loaded"
    );
    Ok(dictionary)
}

/// Load a JSON structure template, correcting out-of-range values.
pub fn load_template(path: &Path) -> Result<PoemTemplate, LoadError> {
    let text = read(path)?;
    let template = PoemTemplate::from_json(&text).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        path = %path.display(),
        lines = template.line_count(),
        "structure loaded"
    );
    Ok(template)
}
