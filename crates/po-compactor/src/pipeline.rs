//! Optimization pipeline. Runs every enabled stage over one prompt.
//!
//! Order: entities → abbreviations → translation → whitespace/punctuation
//! cleanup → stop words → accents → punctuation → word compression →
//! final cleanup.

use crate::entities::{self, Entity, PreservationLevel};
use crate::{abbreviations, numbers, text, word};
use po_core::config::{OptimizationConfig, SOURCE_LANGUAGE};
use po_core::{OptimizationResult, OptimizationStats, Translator};
use std::sync::Arc;

/// Language assumed for prompts when the caller says `"source"`.
pub const DEFAULT_SOURCE_LANGUAGE: &str = "pt";
const TARGET_LANGUAGE: &str = "en";

/// The prompt optimizer. Stateless apart from its translator, so one
/// instance can serve concurrent calls.
#[derive(Clone)]
pub struct Optimizer {
    translator: Option<Arc<dyn Translator>>,
    source_language: String,
}

impl Optimizer {
    /// An optimizer without a translator; translation requests keep the
    /// original text.
    pub fn new() -> Self {
        Self {
            translator: None,
            source_language: DEFAULT_SOURCE_LANGUAGE.into(),
        }
    }

    pub fn with_translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = Some(translator);
        self
    }

    pub fn with_source_language(mut self, language: impl Into<String>) -> Self {
        self.source_language = language.into();
        self
    }

    fn resolve_language(&self, language: &str) -> String {
        if language == SOURCE_LANGUAGE {
            self.source_language.clone()
        } else {
            language.to_string()
        }
    }

    fn translate(&self, text: &str, language: &str) -> Option<String> {
        let Some(translator) = &self.translator else {
            tracing::warn!("translation requested but no translator is configured");
            return None;
        };
        match translator.translate(text, language, TARGET_LANGUAGE) {
            Ok(translated) => Some(translated),
            Err(e) => {
                tracing::warn!(error = %e, "translation failed, keeping original text");
                None
            }
        }
    }

    /// Run every enabled stage over `input`.
    pub fn optimize(&self, input: &str, config: &OptimizationConfig) -> OptimizationResult {
        let mut language = self.resolve_language(&config.language);
        let mut current = input.to_string();

        if config.abbreviation_level > 0.0 {
            let protected: Vec<Entity> = if config.preserve_entities {
                entities::extract(&current)
                    .into_iter()
                    .filter(|e| e.preservation_level == PreservationLevel::Never)
                    .collect()
            } else {
                Vec::new()
            };
            let level = config.abbreviation_level;
            let (abbreviated, replacements) =
                abbreviations::apply_protected(&current, level, true, &protected);
            tracing::debug!(
                protected = protected.len(),
                replacements = replacements.len(),
                "abbreviation stage"
            );
            current = abbreviated;
        }

        if config.translate_to_english {
            if let Some(translated) = self.translate(&current, &language) {
                current = translated;
                language = TARGET_LANGUAGE.into();
            }
        }

        current = text::collapse_whitespace(&current);
        current = text::remove_redundant_punctuation(&current);

        if config.stop_word_removal > 0.0 {
            current = text::remove_stop_words(&current, &language, config.stop_word_removal);
        }
        if config.remove_accents {
            current = text::remove_accents(&current);
        }
        if config.remove_punctuation {
            current = text::remove_punctuation(&current);
        }
        if config.word_compression < 1.0 {
            current = compress_words(&current, config);
        }

        current = text::collapse_whitespace(&current);

        let stats = OptimizationStats::compute(input, &current);
        tracing::debug!(
            original = stats.original_length,
            optimized = stats.optimized_length,
            ratio = stats.compression_ratio_percent,
            "optimized prompt"
        );

        OptimizationResult {
            original_text: input.to_string(),
            optimized_text: current,
            stats,
            config_used: config.clone(),
        }
    }
}

impl Default for Optimizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Compress each space-separated word. Numeric tokens pass through, and a
/// word touching any entity never drops below the highest such floor. Entities are
/// extracted from `input` itself so offsets line up exactly.
fn compress_words(input: &str, config: &OptimizationConfig) -> String {
    let found = if config.preserve_entities {
        entities::extract(input)
    } else {
        Vec::new()
    };

    let mut offset = 0;
    let mut words = Vec::new();
    for raw in input.split(' ') {
        let position = offset;
        offset += raw.len() + 1;
        if raw.is_empty() {
            words.push(String::new());
            continue;
        }
        if numbers::is_important(raw) {
            words.push(raw.to_string());
            continue;
        }
        let ratio = match entities::floor_for_span(position, position + raw.len(), &found) {
            Some(floor) => config.word_compression.max(floor),
            None => config.word_compression,
        };
        words.push(word::compress(raw, ratio, config.min_word_length));
    }
    words.join(" ")
}
