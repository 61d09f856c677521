use crate::error::{PoError, Result};
use serde::{Deserialize, Serialize};

/// Language code that stands for "the language the prompt was written in".
pub const SOURCE_LANGUAGE: &str = "source";

/// Per-call optimizer options. Every field has an independent default and
/// unknown fields are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizationConfig {
    pub translate_to_english: bool,
    pub language: String,
    pub stop_word_removal: f64,
    pub remove_accents: bool,
    pub word_compression: f64,
    pub min_word_length: usize,
    pub remove_punctuation: bool,
    pub abbreviation_level: f64,
    pub preserve_entities: bool,
}

impl Default for OptimizationConfig {
    fn default() -> Self {
        Self {
            translate_to_english: false,
            language: SOURCE_LANGUAGE.into(),
            stop_word_removal: 0.0,
            remove_accents: false,
            word_compression: 1.0,
            min_word_length: 2,
            remove_punctuation: false,
            abbreviation_level: 0.0,
            preserve_entities: true,
        }
    }
}

impl OptimizationConfig {
    /// Apply every supplied override on top of `self`.
    pub fn merged(&self, overrides: &ConfigOverrides) -> Self {
        let mut out = self.clone();
        if let Some(v) = overrides.translate_to_english {
            out.translate_to_english = v;
        }
        if let Some(v) = &overrides.language {
            out.language = v.clone();
        }
        if let Some(v) = overrides.stop_word_removal {
            out.stop_word_removal = v;
        }
        if let Some(v) = overrides.remove_accents {
            out.remove_accents = v;
        }
        if let Some(v) = overrides.word_compression {
            out.word_compression = v;
        }
        if let Some(v) = overrides.min_word_length {
            out.min_word_length = v;
        }
        if let Some(v) = overrides.remove_punctuation {
            out.remove_punctuation = v;
        }
        if let Some(v) = overrides.abbreviation_level {
            out.abbreviation_level = v;
        }
        if let Some(v) = overrides.preserve_entities {
            out.preserve_entities = v;
        }
        out
    }
}

/// Caller-supplied options, each optional so presence can be told apart
/// from a default value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigOverrides {
    pub translate_to_english: Option<bool>,
    pub language: Option<String>,
    pub stop_word_removal: Option<f64>,
    pub remove_accents: Option<bool>,
    pub word_compression: Option<f64>,
    pub min_word_length: Option<usize>,
    pub remove_punctuation: Option<bool>,
    pub abbreviation_level: Option<f64>,
    pub preserve_entities: Option<bool>,
}

impl ConfigOverrides {
    /// Range checks for the ratio options and the word length floor.
    pub fn validate(&self) -> Result<()> {
        let ratios = [
            ("word_compression", self.word_compression),
            ("stop_word_removal", self.stop_word_removal),
            ("abbreviation_level", self.abbreviation_level),
        ];
        for (field, value) in ratios {
            if let Some(v) = value {
                if !(0.0..=1.0).contains(&v) {
                    return Err(PoError::InvalidOption {
                        field: field.into(),
                        reason: "must be between 0 and 1".into(),
                    });
                }
            }
        }
        if self.min_word_length == Some(0) {
            return Err(PoError::InvalidOption {
                field: "min_word_length".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}

/// Process-level configuration for the server and its collaborators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptOptimizerConfig {
    pub server: ServerConfig,
    pub translation: TranslationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationConfig {
    pub mymemory_url: String,
    pub libretranslate_url: String,
    pub timeout_secs: u64,
    /// Longest chunk, in characters, sent to a provider in one request.
    pub char_limit: usize,
    /// Language that `"source"` resolves to.
    pub source_language: String,
}

impl Default for PromptOptimizerConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".into(),
                port: 5000,
            },
            translation: TranslationConfig::default(),
        }
    }
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            mymemory_url: "https://api.mymemory.translated.net/get".into(),
            libretranslate_url: "https://libretranslate.de/translate".into(),
            timeout_secs: 10,
            char_limit: 500,
            source_language: "pt".into(),
        }
    }
}

impl PromptOptimizerConfig {
    /// Defaults overridden by `PO_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut cfg = Self::default();
        if let Some(v) = lookup("PO_HOST") {
            cfg.server.host = v;
        }
        if let Some(v) = lookup("PO_PORT") {
            cfg.server.port = parse_var("PO_PORT", &v)?;
        }
        if let Some(v) = lookup("PO_TRANSLATION_TIMEOUT_SECS") {
            cfg.translation.timeout_secs = parse_var("PO_TRANSLATION_TIMEOUT_SECS", &v)?;
        }
        if let Some(v) = lookup("PO_TRANSLATION_CHAR_LIMIT") {
            cfg.translation.char_limit = parse_var("PO_TRANSLATION_CHAR_LIMIT", &v)?;
        }
        if let Some(v) = lookup("PO_MYMEMORY_URL") {
            cfg.translation.mymemory_url = v;
        }
        if let Some(v) = lookup("PO_LIBRETRANSLATE_URL") {
            cfg.translation.libretranslate_url = v;
        }
        if let Some(v) = lookup("PO_SOURCE_LANGUAGE") {
            cfg.translation.source_language = v;
        }
        if cfg.translation.char_limit == 0 {
            return Err(PoError::Config("PO_TRANSLATION_CHAR_LIMIT must be positive".into()));
        }
        tracing::debug!(host = %cfg.server.host, port = cfg.server.port, "loaded configuration");
        Ok(cfg)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| PoError::Config(format!("{key} has invalid value {value:?}")))
}
