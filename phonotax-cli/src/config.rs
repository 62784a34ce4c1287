use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

pub const CONFIG_FILE: &str = "cfg.json";

/// A sound list, written either as one string (`"aeiou"`) or as a list of
/// symbols (`["a", "e", "i"]`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Symbols {
    Text(String),
    List(Vec<String>),
}

impl Symbols {
    pub fn to_text(&self) -> String {
        match self {
            Symbols::Text(text) => text.clone(),
            Symbols::List(items) => items.concat(),
        }
    }
}

impl From<&str> for Symbols {
    fn from(text: &str) -> Self {
        Symbols::Text(text.to_string())
    }
}

/// Contents of a language directory's `cfg.json`. Missing keys fall back
/// to a minimal two-vowel, three-consonant language.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LanguageConfig {
    pub vowels: Symbols,
    pub consonants: Symbols,
    pub doubles: Symbols,
    pub sylpats: Vec<String>,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        LanguageConfig {
            vowels: "ai".into(),
            consonants: "ktm".into(),
            doubles: "".into(),
            sylpats: vec!["V".to_string(), "CV".to_string()],
        }
    }
}

/// A language project directory.
#[derive(Debug, Clone)]
pub struct Language {
    pub name: String,
    pub path: PathBuf,
    pub config: LanguageConfig,
}

impl Language {
    /// Open `dir`, reading its `cfg.json` when there is one.
    pub fn open(dir: &Path) -> Result<Self> {
        let path = dir
            .canonicalize()
            .with_context(|| format!("language directory {} not found", dir.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let cfg_path = path.join(CONFIG_FILE);
        let config = if cfg_path.is_file() {
            let text = fs::read_to_string(&cfg_path)
                .with_context(|| format!("failed to read {}", cfg_path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("failed to parse {}", cfg_path.display()))?
        } else {
            debug!(path = %path.display(), "no {CONFIG_FILE}, using defaults");
            LanguageConfig::default()
        };
        Ok(Language { name, path, config })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_keys_use_defaults() {
        let config: LanguageConfig = serde_json::from_str(r#"{"vowels": "eio"}"#).expect("parse");
        assert_eq!(config.vowels.to_text(), "eio");
        assert_eq!(config.consonants.to_text(), "ktm");
        assert_eq!(config.doubles.to_text(), "");
        assert_eq!(config.sylpats, ["V", "CV"]);
    }

    #[test]
    fn accepts_symbol_lists() {
        let config: LanguageConfig =
            serde_json::from_str(r#"{"consonants": ["s", "p", "x"]}"#).expect("parse");
        assert_eq!(config.consonants.to_text(), "spx");
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempdir().expect("tempdir");
        let lang_dir = dir.path().join("martian");
        fs::create_dir(&lang_dir).expect("create language dir");
        fs::write(
            lang_dir.join(CONFIG_FILE),
            r#"{"vowels": "eio", "consonants": "spx", "sylpats": ["CV", "CVC"]}"#,
        )
        .expect("write cfg");

        let lang = Language::open(&lang_dir).expect("open");
        assert_eq!(lang.name, "martian");
        assert_eq!(lang.config.vowels.to_text(), "eio");
        assert_eq!(lang.config.consonants.to_text(), "spx");
        assert_eq!(lang.config.sylpats.len(), 2);
    }

    #[test]
    fn directory_without_config_is_default() {
        let dir = tempdir().expect("tempdir");
        let lang = Language::open(dir.path()).expect("open");
        assert_eq!(lang.config, LanguageConfig::default());
    }

    #[test]
    fn malformed_config_is_an_error() {
        let dir = tempdir().expect("tempdir");
        fs::write(dir.path().join(CONFIG_FILE), "{ not json").expect("write cfg");
        let err = Language::open(dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse"));
    }
}
