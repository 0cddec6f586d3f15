use crate::core::scoring::loss::LossTerm;
use crate::core::scoring::scorer::ScoreResult;
use serde::Serialize;

/// The primer being grown during one descent.
///
/// `loss` is `+inf` until the first extension is accepted, so the first step
/// can never be rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub sequence: String,
    pub loss: f64,
    pub accepted: Option<(ScoreResult, LossTerm)>,
}

impl Candidate {
    pub fn empty() -> Self {
        Self {
            sequence: String::new(),
            loss: f64::INFINITY,
            accepted: None,
        }
    }

    pub fn extended_with(&self, base: char) -> String {
        let mut next = String::with_capacity(self.sequence.len() + 1);
        next.push_str(&self.sequence);
        next.push(base);
        next
    }

    pub fn accept(&mut self, sequence: String, score: ScoreResult, loss: LossTerm) {
        self.sequence = sequence;
        self.loss = loss.total();
        self.accepted = Some((score, loss));
    }
}

impl Default for Candidate {
    fn default() -> Self {
        Self::empty()
    }
}

/// One evaluated extension, accepted or not.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExtensionStep {
    pub step: usize,
    pub length: usize,
    pub score: ScoreResult,
    pub loss: LossTerm,
    pub accepted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The input had no bases to extend with.
    EmptyInput,
    /// Extending by one more base would have raised the loss.
    LossIncreased,
    /// Every base of the input was accepted.
    InputExhausted,
}

/// Outcome of a single greedy descent.
#[derive(Debug, Clone, PartialEq)]
pub struct Extension {
    pub primer: String,
    /// Score of `primer` as recorded when it was accepted.
    pub score: ScoreResult,
    /// `None` when no base was accepted.
    pub loss: Option<LossTerm>,
    pub steps: Vec<ExtensionStep>,
    pub stop_reason: StopReason,
}

impl Extension {
    pub fn len(&self) -> usize {
        self.primer.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.primer.is_empty()
    }

    pub fn rejected_step(&self) -> Option<&ExtensionStep> {
        self.steps.iter().find(|step| !step.accepted)
    }
}
