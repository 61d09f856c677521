//! Request validation and option resolution for `/optimize`.

use crate::error::ApiError;
use po_core::config::{ConfigOverrides, OptimizationConfig};
use po_core::presets;
use serde::Deserialize;

/// Body of an optimize request. Options may be given at the top level or
/// under `config`; top-level options win.
#[derive(Debug, Default, Deserialize)]
pub struct OptimizeRequest {
    pub text: Option<String>,
    pub preset: Option<String>,
    pub config: Option<ConfigOverrides>,
    #[serde(flatten)]
    pub options: ConfigOverrides,
}

/// A validated request: the text plus the effective options.
#[derive(Debug)]
pub struct OptimizeJob {
    pub text: String,
    pub config: OptimizationConfig,
}

impl OptimizeRequest {
    /// Check required fields and ranges, then merge preset, nested config and
    /// top-level options in that order.
    pub fn into_job(self) -> Result<OptimizeJob, ApiError> {
        let text = self
            .text
            .ok_or_else(|| ApiError::validation("field \"text\" is required"))?;

        let nested = self.config.unwrap_or_default();
        nested.validate()?;
        self.options.validate()?;

        let base = match self.preset.as_deref() {
            Some(name) => presets::find(name)
                .map(|p| p.config.clone())
                .ok_or_else(|| ApiError::invalid_preset(format!("unknown preset {name:?}")))?,
            None => OptimizationConfig::default(),
        };

        Ok(OptimizeJob {
            text,
            config: base.merged(&nested).merged(&self.options),
        })
    }
}
