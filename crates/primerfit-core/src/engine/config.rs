use crate::core::scoring::loss::{
    DEFAULT_PROBABILITY_SCALE, DEFAULT_TARGET_TM, LossModel, TemperatureRange,
};
use crate::core::scoring::scorer::{DEFAULT_GENOME_LENGTH, Scorer};
use thiserror::Error;

/// Probability weight used while selecting primers.
pub const DEFAULT_SELECTION_PROBABILITY_SCALE: f64 = 10.0;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    pub genome_length: u64,
    pub probability_scale: f64,
    pub target_tm: TemperatureRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportConfig {
    pub summary: bool,
    pub trace: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectionConfig {
    pub scoring: ScoringConfig,
    /// Complement Backward inputs before reversing them, i.e. extend along
    /// the reverse complement instead of the plain reversal.
    pub complement_backward: bool,
    pub curve_probability_scale: f64,
    pub report: ReportConfig,
}

impl SelectionConfig {
    pub fn scorer(&self) -> Scorer {
        Scorer::new(self.scoring.genome_length)
    }

    pub fn loss_model(&self) -> LossModel {
        LossModel::new(self.scoring.target_tm, self.scoring.probability_scale)
    }

    pub fn curve_loss_model(&self) -> LossModel {
        LossModel::new(self.scoring.target_tm, self.curve_probability_scale)
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig {
                genome_length: DEFAULT_GENOME_LENGTH,
                probability_scale: DEFAULT_SELECTION_PROBABILITY_SCALE,
                target_tm: DEFAULT_TARGET_TM,
            },
            complement_backward: false,
            curve_probability_scale: DEFAULT_PROBABILITY_SCALE,
            report: ReportConfig {
                summary: true,
                trace: false,
            },
        }
    }
}

#[derive(Default)]
pub struct SelectionConfigBuilder {
    genome_length: Option<u64>,
    probability_scale: Option<f64>,
    target_tm: Option<TemperatureRange>,
    complement_backward: Option<bool>,
    curve_probability_scale: Option<f64>,
    report_summary: Option<bool>,
    report_trace: Option<bool>,
}

impl SelectionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn genome_length(mut self, length: u64) -> Self {
        self.genome_length = Some(length);
        self
    }
    pub fn probability_scale(mut self, scale: f64) -> Self {
        self.probability_scale = Some(scale);
        self
    }
    pub fn target_tm(mut self, range: TemperatureRange) -> Self {
        self.target_tm = Some(range);
        self
    }
    pub fn complement_backward(mut self, enabled: bool) -> Self {
        self.complement_backward = Some(enabled);
        self
    }
    pub fn curve_probability_scale(mut self, scale: f64) -> Self {
        self.curve_probability_scale = Some(scale);
        self
    }
    pub fn report_summary(mut self, enabled: bool) -> Self {
        self.report_summary = Some(enabled);
        self
    }
    pub fn report_trace(mut self, enabled: bool) -> Self {
        self.report_trace = Some(enabled);
        self
    }

    pub fn build(self) -> Result<SelectionConfig, ConfigError> {
        let defaults = SelectionConfig::default();

        let genome_length = self
            .genome_length
            .unwrap_or(defaults.scoring.genome_length);
        if genome_length == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "genome_length",
                reason: "must be at least 1".to_string(),
            });
        }

        let probability_scale = validate_scale(
            "probability_scale",
            self.probability_scale
                .unwrap_or(defaults.scoring.probability_scale),
        )?;
        let curve_probability_scale = validate_scale(
            "curve_probability_scale",
            self.curve_probability_scale
                .unwrap_or(defaults.curve_probability_scale),
        )?;

        let target_tm = self.target_tm.unwrap_or(defaults.scoring.target_tm);
        if !target_tm.low.is_finite() || !target_tm.high.is_finite() {
            return Err(ConfigError::InvalidParameter {
                name: "target_tm",
                reason: "bounds must be finite".to_string(),
            });
        }
        if target_tm.low > target_tm.high {
            return Err(ConfigError::InvalidParameter {
                name: "target_tm",
                reason: format!(
                    "lower bound {} exceeds upper bound {}",
                    target_tm.low, target_tm.high
                ),
            });
        }

        Ok(SelectionConfig {
            scoring: ScoringConfig {
                genome_length,
                probability_scale,
                target_tm,
            },
            complement_backward: self
                .complement_backward
                .unwrap_or(defaults.complement_backward),
            curve_probability_scale,
            report: ReportConfig {
                summary: self.report_summary.unwrap_or(defaults.report.summary),
                trace: self.report_trace.unwrap_or(defaults.report.trace),
            },
        })
    }
}

fn validate_scale(name: &'static str, scale: f64) -> Result<f64, ConfigError> {
    if !scale.is_finite() || scale < 0.0 {
        return Err(ConfigError::InvalidParameter {
            name,
            reason: format!("must be a finite, non-negative number (got {})", scale),
        });
    }
    Ok(scale)
}
