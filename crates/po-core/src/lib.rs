//! Shared types for the prompt optimizer: options, results, presets, errors
//! and the translation seam.

pub mod config;
pub mod error;
pub mod presets;
pub mod translate;
pub mod types;

pub use config::{ConfigOverrides, OptimizationConfig, PromptOptimizerConfig};
pub use error::{PoError, Result};
pub use presets::{Preset, PRESETS};
pub use translate::Translator;
pub use types::{OptimizationResult, OptimizationStats};
