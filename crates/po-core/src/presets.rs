//! Named option bundles for common optimization strengths.

use crate::config::{ConfigOverrides, OptimizationConfig};
use crate::error::{PoError, Result};
use serde::Serialize;
use std::sync::LazyLock;

/// A preset: description plus the options it sets.
#[derive(Debug, Clone, Serialize)]
pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    pub config: OptimizationConfig,
}

impl Preset {
    /// Preset options with the caller's manual options taking precedence.
    pub fn with_overrides(&self, overrides: &ConfigOverrides) -> OptimizationConfig {
        self.config.merged(overrides)
    }
}

fn preset(name: &'static str, description: &'static str, overrides: ConfigOverrides) -> Preset {
    Preset {
        name,
        description,
        config: OptimizationConfig::default().merged(&overrides),
    }
}

pub static PRESETS: LazyLock<Vec<Preset>> = LazyLock::new(|| {
    vec![
        preset(
            "conservative",
            "Light optimization: removes only redundant elements.",
            ConfigOverrides {
                word_compression: Some(0.9),
                stop_word_removal: Some(0.1),
                min_word_length: Some(3),
                language: Some("pt".into()),
                ..Default::default()
            },
        ),
        preset(
            "moderate",
            "Balance between savings and readability, including translation.",
            ConfigOverrides {
                word_compression: Some(0.75),
                remove_accents: Some(true),
                translate_to_english: Some(true),
                stop_word_removal: Some(0.3),
                min_word_length: Some(2),
                abbreviation_level: Some(0.5),
                language: Some("pt".into()),
                ..Default::default()
            },
        ),
        preset(
            "aggressive",
            "Maximum savings, lowest readability.",
            ConfigOverrides {
                word_compression: Some(0.6),
                remove_accents: Some(true),
                remove_punctuation: Some(true),
                translate_to_english: Some(true),
                stop_word_removal: Some(0.5),
                min_word_length: Some(1),
                abbreviation_level: Some(0.8),
                language: Some("pt".into()),
                ..Default::default()
            },
        ),
        preset(
            "translation_only",
            "Only translate to English.",
            ConfigOverrides {
                translate_to_english: Some(true),
                language: Some("pt".into()),
                ..Default::default()
            },
        ),
    ]
});

pub fn find(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.name == name)
}

pub fn get(name: &str) -> Result<&'static Preset> {
    find(name).ok_or_else(|| PoError::PresetNotFound { name: name.into() })
}
