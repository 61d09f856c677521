use crate::config::OptimizationConfig;
use serde::{Deserialize, Serialize};

/// Length statistics for one optimize call. Lengths count characters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationStats {
    pub original_length: usize,
    pub optimized_length: usize,
    pub compression_ratio_percent: f64,
    pub characters_saved: i64,
}

impl OptimizationStats {
    pub fn compute(original: &str, optimized: &str) -> Self {
        let original_length = original.chars().count();
        let optimized_length = optimized.chars().count();
        let characters_saved = original_length as i64 - optimized_length as i64;
        let compression_ratio_percent = if original_length > 0 {
            round2(characters_saved as f64 / original_length as f64 * 100.0)
        } else {
            0.0
        };
        Self {
            original_length,
            optimized_length,
            compression_ratio_percent,
            characters_saved,
        }
    }
}

/// Round to two decimal places.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Output of the optimizer pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub original_text: String,
    pub optimized_text: String,
    pub stats: OptimizationStats,
    pub config_used: OptimizationConfig,
}
