use crate::core::scoring::loss::LossModel;
use crate::core::scoring::scorer::{ScoringError, Scorer};
use crate::engine::config::SelectionConfig;
use crate::engine::state::{Candidate, Extension, ExtensionStep, StopReason};
use tracing::{debug, instrument, trace};

/// One-pass greedy descent over the prefixes of an input.
///
/// The candidate grows one base at a time for as long as the loss does not
/// increase. The first extension that raises the loss ends the run with the
/// previous candidate; reaching the last base ends it with the full input.
/// A base, once accepted, is never retracted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GreedyExtender {
    scorer: Scorer,
    loss_model: LossModel,
}

impl GreedyExtender {
    pub fn new(scorer: Scorer, loss_model: LossModel) -> Self {
        Self { scorer, loss_model }
    }

    pub fn from_config(config: &SelectionConfig) -> Self {
        Self::new(config.scorer(), config.loss_model())
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    pub fn loss_model(&self) -> &LossModel {
        &self.loss_model
    }

    /// Runs the descent over `input`, which must already be
    /// orientation-normalized.
    ///
    /// An empty input yields an empty primer. A symbol outside the alphabet
    /// aborts the run as soon as the step that includes it is scored.
    #[instrument(skip_all, name = "greedy_extension", fields(input_length = input.len()))]
    pub fn extend(&self, input: &str) -> Result<Extension, ScoringError> {
        let total = input.chars().count();
        let mut candidate = Candidate::empty();
        let mut steps = Vec::with_capacity(total);

        for (step, base) in input.chars().enumerate() {
            let test_sequence = candidate.extended_with(base);
            let test_score = self.scorer.score(&test_sequence)?;
            let test_loss = self.loss_model.total_loss(&test_score);
            let rejected = test_loss.total() > candidate.loss;

            trace!(
                step,
                candidate = %test_sequence,
                tm = test_score.melting_temperature,
                probability = test_score.occurrence_probability,
                loss = test_loss.total(),
                accepted = !rejected,
                "Evaluated extension."
            );

            steps.push(ExtensionStep {
                step,
                length: step + 1,
                score: test_score,
                loss: test_loss,
                accepted: !rejected,
            });

            if rejected {
                return self.finish(candidate, steps, StopReason::LossIncreased);
            }

            candidate.accept(test_sequence, test_score, test_loss);

            if step + 1 == total {
                return self.finish(candidate, steps, StopReason::InputExhausted);
            }
        }

        self.finish(candidate, steps, StopReason::EmptyInput)
    }

    fn finish(
        &self,
        candidate: Candidate,
        steps: Vec<ExtensionStep>,
        stop_reason: StopReason,
    ) -> Result<Extension, ScoringError> {
        let (score, loss) = match candidate.accepted {
            Some((score, loss)) => (score, Some(loss)),
            None => (self.scorer.score(&candidate.sequence)?, None),
        };

        debug!(
            primer = %candidate.sequence,
            steps = steps.len(),
            reason = ?stop_reason,
            "Extension finished."
        );

        Ok(Extension {
            primer: candidate.sequence,
            score,
            loss,
            steps,
            stop_reason,
        })
    }
}

impl Default for GreedyExtender {
    fn default() -> Self {
        Self::from_config(&SelectionConfig::default())
    }
}
