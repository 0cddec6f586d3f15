use crate::core::scoring::loss::LossModel;
use crate::core::scoring::scorer::{ScoringError, Scorer};
use serde::Serialize;
use std::iter;
use tracing::instrument;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    pub prefix_length: usize,
    pub temperature_loss: f64,
    pub probability_loss: f64,
    pub total_loss: f64,
}

/// Loss components for every prefix of a sequence, shortest first.
///
/// Derived for plotting only; the descent never consults it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LossCurve {
    points: Vec<CurvePoint>,
}

impl LossCurve {
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn temperature_losses(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.temperature_loss).collect()
    }

    pub fn probability_losses(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.probability_loss).collect()
    }

    pub fn total_losses(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.total_loss).collect()
    }

    pub fn minimum(&self) -> Option<&CurvePoint> {
        self.points
            .iter()
            .min_by(|a, b| a.total_loss.total_cmp(&b.total_loss))
    }
}

/// Computes the curve over prefix lengths `0..=len(sequence)`.
#[instrument(skip_all, name = "loss_curve", fields(length = sequence.len()))]
pub fn loss_curve(
    sequence: &str,
    scorer: &Scorer,
    model: &LossModel,
) -> Result<LossCurve, ScoringError> {
    let boundaries = iter::once(0).chain(sequence.char_indices().map(|(i, c)| i + c.len_utf8()));

    let points = boundaries
        .enumerate()
        .map(|(prefix_length, end)| {
            let score = scorer.score(&sequence[..end])?;
            let loss = model.total_loss(&score);
            Ok(CurvePoint {
                prefix_length,
                temperature_loss: loss.temperature,
                probability_loss: loss.probability,
                total_loss: loss.total(),
            })
        })
        .collect::<Result<Vec<_>, ScoringError>>()?;

    Ok(LossCurve { points })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO_BACKWARD: &str = "TGACGATGGTGATTATTTCGAACACGACGAATTGTAG";

    #[test]
    fn curve_has_one_point_per_prefix_including_empty() {
        let curve = loss_curve("ATG", &Scorer::default(), &LossModel::default()).unwrap();
        assert_eq!(curve.len(), 4);
        let lengths: Vec<_> = curve.points().iter().map(|p| p.prefix_length).collect();
        assert_eq!(lengths, vec![0, 1, 2, 3]);
    }

    #[test]
    fn empty_prefix_has_only_temperature_loss() {
        let curve = loss_curve("ATG", &Scorer::default(), &LossModel::default()).unwrap();
        let first = curve.points()[0];
        assert_eq!(first.temperature_loss, 4900.0);
        assert_eq!(first.probability_loss, 0.0);
        assert_eq!(first.total_loss, 4900.0);
    }

    #[test]
    fn curve_of_empty_sequence_is_single_point() {
        let curve = loss_curve("", &Scorer::default(), &LossModel::default()).unwrap();
        assert_eq!(curve.len(), 1);
        assert!(!curve.is_empty());
    }

    #[test]
    fn series_are_consistent_with_points() {
        let curve = loss_curve(SCENARIO_BACKWARD, &Scorer::default(), &LossModel::default())
            .unwrap();
        let temperature = curve.temperature_losses();
        let probability = curve.probability_losses();
        let total = curve.total_losses();

        assert_eq!(temperature.len(), SCENARIO_BACKWARD.len() + 1);
        assert_eq!(probability.len(), temperature.len());
        for i in 0..total.len() {
            assert_eq!(total[i], temperature[i] + probability[i]);
        }
    }

    #[test]
    fn default_curve_weights_probability_by_five_thousand() {
        let curve = loss_curve("A", &Scorer::default(), &LossModel::default()).unwrap();
        let point = curve.points()[1];
        assert_eq!(point.temperature_loss, 4624.0);
        assert!((point.probability_loss - 5000.0).abs() < 1e-6);
    }

    #[test]
    fn minimum_reports_lowest_total_loss() {
        let curve = loss_curve(SCENARIO_BACKWARD, &Scorer::default(), &LossModel::default())
            .unwrap();
        let minimum = curve.minimum().unwrap();
        for point in curve.points() {
            assert!(minimum.total_loss <= point.total_loss);
        }
    }

    #[test]
    fn invalid_symbol_fails_curve_generation() {
        let result = loss_curve("ACXT", &Scorer::default(), &LossModel::default());
        assert!(matches!(
            result,
            Err(ScoringError::InvalidSequence { position: 2, .. })
        ));
    }
}
