// Data-driven generation settings.
//
// Every attempt budget used by the rhyme resolver and the line generator
// lives in `GenerationConfig`; the generators read it rather than using
// literal limits. `Settings` is the on-disk settings file for the `stikh`
// binary: which dictionary and structure to load by default, where to find
// them, and optional `generation` overrides.
//
// The settings file also accepts the keys "Default dictionary" and
// "Default structure" in place of `dictionary` and `structure`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// Attempt budgets for the stochastic search.
///
/// Larger budgets raise the chance of success on sparse dictionaries and
/// strict templates, at a proportional cost in sampling.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Samples allowed when choosing a line's last word.
    pub terminal_attempts: u32,
    /// Samples allowed per prefix-assembly pass.
    pub prefix_attempts: u32,
    /// Outer restarts of terminal choice + prefix assembly per line.
    pub line_attempts: u32,
    /// Samples allowed when choosing the ending of one rhyme group.
    pub rhyme_attempts: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            terminal_attempts: 1000,
            prefix_attempts: 100,
            line_attempts: 100,
            rhyme_attempts: 100,
        }
    }
}

/// Contents of the settings file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Dictionary name, without the `.txt` extension.
    #[serde(alias = "Default dictionary")]
    pub dictionary: String,
    /// Structure name, without the `.json` extension.
    #[serde(alias = "Default structure")]
    pub structure: String,
    #[serde(default = "default_dictionaries_dir")]
    pub dictionaries_dir: PathBuf,
    #[serde(default = "default_structures_dir")]
    pub structures_dir: PathBuf,
    #[serde(default)]
    pub generation: GenerationConfig,
}

fn default_dictionaries_dir() -> PathBuf {
    PathBuf::from("dictionaries")
}

fn default_structures_dir() -> PathBuf {
    PathBuf::from("structures")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dictionary: "sample".to_string(),
            structure: "quatrain".to_string(),
            dictionaries_dir: default_dictionaries_dir(),
            structures_dir: default_structures_dir(),
            generation: GenerationConfig::default(),
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read and parse a settings file.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Settings::from_json(&text).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// `<dictionaries_dir>/<name>.txt`
    pub fn dictionary_path(&self, name: &str) -> PathBuf {
        self.dictionaries_dir.join(format!("{name}.txt"))
    }

    /// `<structures_dir>/<name>.json`
    pub fn structure_path(&self, name: &str) -> PathBuf {
        self.structures_dir.join(format!("{name}.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_defaults() {
        let config = GenerationConfig::default();
        assert_eq!(config.terminal_attempts, 1000);
        assert_eq!(config.prefix_attempts, 100);
        assert_eq!(config.line_attempts, 100);
        assert_eq!(config.rhyme_attempts, 100);
    }

    #[test]
    fn test_settings_minimal() {
        let settings =
            Settings::from_json(r#"{"dictionary": "lyric", "structure": "sonnet"}"#).unwrap();
        assert_eq!(settings.dictionary, "lyric");
        assert_eq!(settings.structure, "sonnet");
        assert_eq!(settings.dictionaries_dir, PathBuf::from("dictionaries"));
        assert_eq!(settings.generation, GenerationConfig::default());
    }

    #[test]
    fn test_settings_legacy_keys() {
        let json = r#"{"Default dictionary": "Основной", "Default structure": "Катрен"}"#;
        let settings = Settings::from_json(json).unwrap();
        assert_eq!(settings.dictionary, "Основной");
        assert_eq!(settings.structure, "Катрен");
    }

    #[test]
    fn test_settings_partial_generation_override() {
        let json = r#"{
            "dictionary": "a",
            "structure": "b",
            "generation": {"line_attempts": 5}
        }"#;
        let settings = Settings::from_json(json).unwrap();
        assert_eq!(settings.generation.line_attempts, 5);
        assert_eq!(settings.generation.terminal_attempts, 1000);
    }

    #[test]
    fn test_settings_missing_dictionary_is_error() {
        assert!(Settings::from_json(r#"{"structure": "b"}"#).is_err());
    }

    #[test]
    fn test_paths() {
        let settings = Settings {
            dictionaries_dir: PathBuf::from("data/dictionaries"),
            structures_dir: PathBuf::from("data/structures"),
            ..Settings::default()
        };
        assert_eq!(
            settings.dictionary_path("sample"),
            PathBuf::from("data/dictionaries/sample.txt")
        );
        assert_eq!(
            settings.structure_path("quatrain"),
            PathBuf::from("data/structures/quatrain.json")
        );
    }

    #[test]
    fn test_load_missing_file() {
        let err = Settings::load(Path::new("/nonexistent/stikh/settings.json")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
