//! HTTP translation for the optimizer.
//!
//! Providers are tried in order for every chunk: MyMemory first, then
//! LibreTranslate. A chunk that fails on all of them fails the whole call.

pub mod chunk;
pub mod providers;

use po_core::config::TranslationConfig;
use po_core::{PoError, Result, Translator};
use providers::{HttpClient, LibreTranslate, MyMemory, TranslationProvider};
use std::sync::Arc;
use std::time::Duration;

/// Translator backed by a chain of remote providers.
pub struct HttpTranslator {
    providers: Vec<Box<dyn TranslationProvider>>,
    char_limit: usize,
}

impl HttpTranslator {
    /// MyMemory with LibreTranslate fallback, sharing one lazily built client.
    pub fn from_config(config: &TranslationConfig) -> Self {
        let client = Arc::new(HttpClient::new(Duration::from_secs(config.timeout_secs)));
        Self::with_providers(
            vec![
                Box::new(MyMemory::new(config.mymemory_url.clone(), client.clone())),
                Box::new(LibreTranslate::new(config.libretranslate_url.clone(), client)),
            ],
            config.char_limit,
        )
    }

    pub fn with_providers(providers: Vec<Box<dyn TranslationProvider>>, char_limit: usize) -> Self {
        Self {
            providers,
            char_limit: char_limit.max(1),
        }
    }

    fn translate_chunk(&self, chunk: &str, source: &str, target: &str) -> Result<String> {
        for provider in &self.providers {
            match provider.translate(chunk, source, target) {
                Ok(translated) if !translated.trim().is_empty() => return Ok(translated),
                Ok(_) => tracing::warn!(provider = provider.name(), "empty translation"),
                Err(e) => tracing::warn!(provider = provider.name(), error = %e, "provider failed"),
            }
        }
        let count = self.providers.len();
        Err(PoError::Translation(format!("all {count} providers failed")))
    }
}

impl Translator for HttpTranslator {
    fn translate(&self, text: &str, source: &str, target: &str) -> Result<String> {
        if text.trim().is_empty() || source == target {
            return Ok(text.to_string());
        }
        let chunks = chunk::split(text, self.char_limit);
        tracing::debug!(chunks = chunks.len(), source, target, "translating");
        let translated = chunks
            .iter()
            .map(|c| self.translate_chunk(c, source, target))
            .collect::<Result<Vec<_>>>()?;
        Ok(translated.join(" "))
    }
}

#[cfg(test)]
mod tests;
