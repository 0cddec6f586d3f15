use crate::core::models::sequence::Nucleotide;
use serde::Serialize;
use thiserror::Error;

/// Roughly the size of a yeast genome, in bases.
pub const DEFAULT_GENOME_LENGTH: u64 = 12_000_000;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ScoringError {
    #[error("Invalid sequence: symbol '{symbol}' at position {position} is not one of A, T, G, C")]
    InvalidSequence { symbol: char, position: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreResult {
    pub melting_temperature: u32,
    pub occurrence_probability: f64,
}

/// Probability that a given sequence of `length` bases occurs at least once by
/// chance in a random genome of `genome_length` bases:
/// `1 - (1 - 4^-length)^genome_length`.
///
/// Evaluated as `-expm1(G * ln_1p(-4^-L))` so long sequences keep their small
/// but non-zero probability instead of cancelling to zero. An empty sequence
/// is defined to have probability zero.
pub fn occurrence_probability(length: usize, genome_length: u64) -> f64 {
    if length == 0 || genome_length == 0 {
        return 0.0;
    }
    let per_site = (-(length as f64) * 4f64.ln()).exp();
    -((genome_length as f64) * (-per_site).ln_1p()).exp_m1()
}

/// Wallace-rule melting temperature and chance-occurrence scoring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scorer {
    genome_length: u64,
}

impl Scorer {
    pub fn new(genome_length: u64) -> Self {
        Self { genome_length }
    }

    pub fn genome_length(&self) -> u64 {
        self.genome_length
    }

    /// Scores raw sequence text. Symbols are matched case-insensitively; any
    /// symbol outside `{A, T, G, C}` is an error.
    pub fn score(&self, sequence: &str) -> Result<ScoreResult, ScoringError> {
        let mut strong = 0u32;
        let mut weak = 0u32;
        let mut length = 0usize;

        for (position, symbol) in sequence.chars().enumerate() {
            let base = Nucleotide::from_symbol(symbol)
                .ok_or(ScoringError::InvalidSequence { symbol, position })?;
            if base.is_strong() {
                strong += 1;
            } else {
                weak += 1;
            }
            length += 1;
        }

        Ok(ScoreResult {
            melting_temperature: 4 * strong + 2 * weak,
            occurrence_probability: occurrence_probability(length, self.genome_length),
        })
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new(DEFAULT_GENOME_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn melting_temperature_counts_four_per_gc_and_two_per_at() {
        let scorer = Scorer::default();
        let cases = [
            ("", 0),
            ("A", 2),
            ("G", 4),
            ("ATAT", 8),
            ("GCGC", 16),
            ("ATGTTTTTCAACAGACTAAGCGC", 64),
            ("TGACGATGGTGATTATTTCGAACACGACGAATTGTAG", 104),
        ];
        for (seq, expected) in cases {
            let gc = seq.chars().filter(|c| matches!(c, 'G' | 'C')).count() as u32;
            let at = seq.chars().filter(|c| matches!(c, 'A' | 'T')).count() as u32;
            let result = scorer.score(seq).unwrap();
            assert_eq!(result.melting_temperature, expected, "sequence {seq}");
            assert_eq!(result.melting_temperature, 4 * gc + 2 * at);
        }
    }

    #[test]
    fn score_is_case_insensitive() {
        let scorer = Scorer::default();
        assert_eq!(scorer.score("atgc").unwrap(), scorer.score("ATGC").unwrap());
    }

    #[test]
    fn score_rejects_symbols_outside_alphabet() {
        let scorer = Scorer::default();
        for seq in ["ATXG", "N", "ACGU", "AC-GT", "AC GT"] {
            assert!(
                matches!(
                    scorer.score(seq),
                    Err(ScoringError::InvalidSequence { .. })
                ),
                "sequence {seq} should be rejected"
            );
        }
    }

    #[test]
    fn score_reports_position_of_invalid_symbol() {
        let err = Scorer::default().score("ATXG").unwrap_err();
        assert_eq!(
            err,
            ScoringError::InvalidSequence {
                symbol: 'X',
                position: 2
            }
        );
    }

    #[test]
    fn empty_sequence_scores_zero() {
        let result = Scorer::default().score("").unwrap();
        assert_eq!(result.melting_temperature, 0);
        assert_eq!(result.occurrence_probability, 0.0);
    }

    #[test]
    fn occurrence_probability_of_zero_length_is_zero() {
        for genome_length in [1, 100, DEFAULT_GENOME_LENGTH, u64::MAX] {
            assert_eq!(occurrence_probability(0, genome_length), 0.0);
        }
    }

    #[test]
    fn occurrence_probability_is_strictly_between_zero_and_one() {
        for length in 1..=24 {
            for genome_length in [1, 10, 100] {
                let p = occurrence_probability(length, genome_length);
                assert!(p > 0.0 && p < 1.0, "L={length} G={genome_length} p={p}");
            }
        }
    }

    #[test]
    fn occurrence_probability_matches_closed_form_for_single_site() {
        assert!(f64_approx_equal(occurrence_probability(1, 1), 0.25));
        assert!(f64_approx_equal(occurrence_probability(2, 1), 0.0625));
        assert!(f64_approx_equal(occurrence_probability(1, 2), 1.0 - 0.75 * 0.75));
    }

    #[test]
    fn occurrence_probability_stays_positive_for_long_primers() {
        let p = occurrence_probability(40, DEFAULT_GENOME_LENGTH);
        assert!(p > 0.0);
        assert!(p < 1e-15);
    }

    #[test]
    fn occurrence_probability_saturates_for_short_sequences_in_large_genome() {
        let p = occurrence_probability(12, DEFAULT_GENOME_LENGTH);
        assert!((p - 0.5109329873053028).abs() < 1e-9);
    }

    #[test]
    fn scorer_uses_configured_genome_length() {
        let small = Scorer::new(1).score("A").unwrap();
        assert!(f64_approx_equal(small.occurrence_probability, 0.25));
        assert_eq!(Scorer::new(1).genome_length(), 1);
        assert_eq!(Scorer::default().genome_length(), DEFAULT_GENOME_LENGTH);
    }
}
