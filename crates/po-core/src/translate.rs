//! Translation seam consumed by the optimizer pipeline.

use crate::error::Result;

/// A text translator. Implementations own their retry/fallback policy; an
/// `Err` means every provider failed and the caller keeps the original text.
pub trait Translator: Send + Sync {
    fn translate(&self, text: &str, source: &str, target: &str) -> Result<String>;
}
