//! Prompt compactor — rule-based prompt shortening.
//!
//! Stages:
//! 1. Entity extraction (spans that must survive)
//! 2. Abbreviation: dictionary replacements guarded by context
//! 3. Translation (optional, via [`po_core::Translator`])
//! 4. Cleanup: whitespace, punctuation, stop words, accents
//! 5. Word compression: drop vowels from the middle of words

pub mod abbreviations;
pub mod data;
pub mod entities;
pub mod numbers;
pub mod pipeline;
pub mod text;
pub mod word;

pub use abbreviations::{ReplacementResult, SavingsEstimate};
pub use entities::{Entity, EntityType, PreservationLevel};
pub use numbers::ImportanceReason;
pub use pipeline::Optimizer;
