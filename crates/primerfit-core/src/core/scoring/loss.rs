use super::scorer::ScoreResult;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TARGET_TM: TemperatureRange = TemperatureRange {
    low: 65.0,
    high: 75.0,
};

/// Weight applied to the occurrence probability when no call site overrides it.
pub const DEFAULT_PROBABILITY_SCALE: f64 = 5000.0;

/// Acceptable melting temperature window, in °C.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureRange {
    pub low: f64,
    pub high: f64,
}

impl TemperatureRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    #[inline]
    pub fn midpoint(&self) -> f64 {
        (self.low + self.high) / 2.0
    }
}

impl Default for TemperatureRange {
    fn default() -> Self {
        DEFAULT_TARGET_TM
    }
}

/// Squared deviation of `tm` from the midpoint of `range`.
#[inline]
pub fn temperature_loss(tm: f64, range: TemperatureRange) -> f64 {
    let deviation = range.midpoint() - tm;
    deviation * deviation
}

#[inline]
pub fn probability_loss(probability: f64, scale: f64) -> f64 {
    probability * scale
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct LossTerm {
    pub temperature: f64,
    pub probability: f64,
}

impl LossTerm {
    pub fn new(temperature: f64, probability: f64) -> Self {
        Self {
            temperature,
            probability,
        }
    }

    #[inline]
    pub fn total(&self) -> f64 {
        self.temperature + self.probability
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LossModel {
    pub target_tm: TemperatureRange,
    pub probability_scale: f64,
}

impl LossModel {
    pub fn new(target_tm: TemperatureRange, probability_scale: f64) -> Self {
        Self {
            target_tm,
            probability_scale,
        }
    }

    pub fn with_scale(probability_scale: f64) -> Self {
        Self::new(DEFAULT_TARGET_TM, probability_scale)
    }

    #[inline]
    pub fn total_loss(&self, score: &ScoreResult) -> LossTerm {
        LossTerm {
            temperature: temperature_loss(score.melting_temperature as f64, self.target_tm),
            probability: probability_loss(score.occurrence_probability, self.probability_scale),
        }
    }
}

impl Default for LossModel {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_TM, DEFAULT_PROBABILITY_SCALE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn score(tm: u32, probability: f64) -> ScoreResult {
        ScoreResult {
            melting_temperature: tm,
            occurrence_probability: probability,
        }
    }

    #[test]
    fn temperature_loss_is_zero_at_range_midpoint() {
        assert_eq!(temperature_loss(70.0, DEFAULT_TARGET_TM), 0.0);
    }

    #[test]
    fn temperature_loss_is_symmetric_around_midpoint() {
        let below = temperature_loss(64.0, DEFAULT_TARGET_TM);
        let above = temperature_loss(76.0, DEFAULT_TARGET_TM);
        assert_eq!(below, 36.0);
        assert_eq!(below, above);
    }

    #[test]
    fn temperature_loss_for_empty_primer_is_squared_midpoint() {
        assert_eq!(temperature_loss(0.0, DEFAULT_TARGET_TM), 4900.0);
    }

    #[test]
    fn temperature_loss_respects_custom_range() {
        let range = TemperatureRange::new(50.0, 60.0);
        assert_eq!(range.midpoint(), 55.0);
        assert_eq!(temperature_loss(52.0, range), 9.0);
    }

    #[test]
    fn probability_loss_scales_linearly() {
        assert_eq!(probability_loss(0.5, 10.0), 5.0);
        assert_eq!(probability_loss(0.0, DEFAULT_PROBABILITY_SCALE), 0.0);
        assert!(f64_approx_equal(probability_loss(1e-9, 5000.0), 5e-6));
    }

    #[test]
    fn total_loss_sums_both_components() {
        let model = LossModel::with_scale(10.0);
        let term = model.total_loss(&score(4, 1.0));
        assert_eq!(term.temperature, 4356.0);
        assert_eq!(term.probability, 10.0);
        assert_eq!(term.total(), 4366.0);
    }

    #[test]
    fn default_model_uses_default_range_and_scale() {
        let model = LossModel::default();
        assert_eq!(model.target_tm, DEFAULT_TARGET_TM);
        assert_eq!(model.probability_scale, DEFAULT_PROBABILITY_SCALE);
    }

    #[test]
    fn loss_term_default_is_zero() {
        let term = LossTerm::default();
        assert_eq!(term.total(), 0.0);
        assert_eq!(LossTerm::new(1.5, 2.5).total(), 4.0);
    }
}
